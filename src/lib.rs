//! # StarImage Library
//!
//! 查找网页中引用的最大图片。“最大”指服务器报告的字节大小，而不是像素尺寸。
//!
//! 输入可以是一个 URL、一个完整的 HTML 文档或一个 HTML 片段；相对图片地址会被解析为
//! 绝对 URL，每个候选图片通过一次仅请求响应头的探测获取大小，最终返回最大的那一个。
//!
//! ## 模块组织
//!
//! - `core` - 选项、结果类型、最大图片选择和主流程
//! - `parsers` - HTML 文档/片段解析、图片提取、链接重写
//! - `network` - HTTP 会话、文档获取和大小探测
//! - `utils` - URL 工具函数
//! - `env` - 环境变量配置
//! - `logging` - 日志订阅者初始化

pub mod core;
pub mod env;
pub mod logging;
pub mod network;
pub mod parsers;
pub mod utils;

// Re-export commonly used items for convenience
pub use crate::core::*;
pub use crate::network::*;
pub use crate::parsers::*;
pub use crate::utils::*;
