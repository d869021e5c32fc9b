//! # 网络模块
//!
//! 这个模块包含所有与网络通信相关的功能：
//!
//! - HTTP会话管理和文档下载
//! - 仅请求响应头的图片大小探测
//!
//! # 模块组织
//!
//! - `session` - HTTP会话、传输接口、请求错误类型
//! - `probe` - 容错的 content-length 探测

pub mod probe;
pub mod session;

// Re-export commonly used items for convenience
pub use probe::probe_content_length;
pub use session::{FetchError, FetchedDocument, ProbeError, Session, Transport};
