//! # 解析器模块
//!
//! 这个模块包含所有用于解析和处理HTML输入的功能：
//!
//! - HTML文档与片段解析、DOM操作
//! - 图片候选提取
//! - 链接重写和URL转换
//!
//! # 模块组织
//!
//! - `html` - HTML文档解析、DOM操作、元数据处理、图片提取
//! - `link_rewriter` - 链接重写功能，将HTML中的相对链接转换为绝对链接

pub mod html;
pub mod link_rewriter;

// Re-export commonly used items for convenience
pub use html::{
    extract_candidates, extract_images, fragment_to_dom, html_to_dom, looks_like_full_document,
    ImageCandidate,
};
pub use link_rewriter::{effective_base_url, make_links_absolute};
