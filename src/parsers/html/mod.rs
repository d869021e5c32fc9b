//! HTML解析和处理模块
//!
//! - `utils`: 基础工具函数、完整文档判断
//! - `dom`: 文档与片段解析、基础DOM操作
//! - `metadata`: 文档元数据处理
//! - `images`: 图片候选提取

pub mod dom;
pub mod images;
pub mod metadata;
pub mod utils;

// 重新导出主要的公共 API
pub use dom::{
    find_elements_by_name, find_nodes, for_each_element, fragment_to_dom, get_node_attr,
    get_node_name, html_to_dom, set_node_attr, ParseError,
};
pub use images::{extract_candidates, extract_images, parse_declared_dimension, ImageCandidate};
pub use metadata::{get_base_url, get_charset};
pub use utils::{is_number, looks_like_full_document, parse_number, WHITESPACES};
