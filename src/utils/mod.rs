//! # 工具模块
//!
//! 这个模块包含各种工具函数和实用程序：
//!
//! - 绝对 HTTP(S) URL 的判断
//! - 基础 URL 的推导与相对链接的解析
//! - 从 URL 中提取文件名
//!
//! # 模块组织
//!
//! - `url` - URL处理、基础URL推导、文件名提取等工具函数

pub mod url;

// Re-export commonly used items for convenience
pub use url::{
    derive_base_url, get_filename, is_absolute_url, is_http_url, resolve_url, Url, HTTP_SCHEMES,
};
