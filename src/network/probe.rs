//! 图片大小探测
//!
//! 每个候选 URL 只发一次仅含响应头的请求。任何失败都记录日志并按 0 字节处理，
//! 单个无法访问的图片不会中断整个选择过程。

use super::session::Transport;
use crate::core::LOG_TARGET;

/// 探测 URL 的字节大小
///
/// 请求失败或非 2xx 响应返回 0；响应没有 content-length 头时同样返回 0。
pub fn probe_content_length<T: Transport + ?Sized>(transport: &T, url: &str) -> u64 {
    match transport.content_length(url) {
        Ok(Some(content_length)) => content_length,
        Ok(None) => {
            tracing::debug!(target: LOG_TARGET, "no content-length reported for {}", url);
            0
        }
        Err(e) => {
            tracing::warn!(target: LOG_TARGET, "failed to probe size of {}: {}", url, e);
            0
        }
    }
}
