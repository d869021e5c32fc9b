//! HTML 文档元数据处理模块
//!
//! 此模块提供对链接解析有影响的文档元数据的读取：
//! - 获取 `<base>` 标签的 href
//! - 处理字符编码声明
//!
//! 获取到的字符编码用于重新解码远程获取的文档，base href 用于计算链接重写时的有效基础 URL。

use markup5ever_rcdom::Handle;

use crate::core::parse_content_type;

use super::dom::{find_nodes, get_node_attr};

/// 获取文档的 base URL
///
/// 从 HTML 文档的 `<head>` 部分查找 `<base>` 标签并提取其 `href` 属性值。
/// 根据 HTML 规范，只有第一个 `<base>` 标签有效，其余的将被忽略。
///
/// # 参数
///
/// * `handle` - HTML 文档的根节点句柄
///
/// # 返回值
///
/// * `Some(String)` - 如果找到 base 标签且有非空 href 属性，返回其值
/// * `None` - 如果没有找到 base 标签或 href 属性为空
pub fn get_base_url(handle: &Handle) -> Option<String> {
    find_nodes(handle, &["html", "head", "base"])
        .first()
        .and_then(|base_node| get_node_attr(base_node, "href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}

/// 获取文档字符编码
///
/// 从 HTML 文档的 meta 标签中提取字符编码信息。支持两种格式：
/// 1. HTML5 格式：`<meta charset="utf-8">`
/// 2. HTML4 格式：`<meta http-equiv="content-type" content="text/html; charset=utf-8">`
pub fn get_charset(node: &Handle) -> Option<String> {
    for meta_node in find_nodes(node, &["html", "head", "meta"]).iter() {
        if let Some(meta_charset_node_attr_value) = get_node_attr(meta_node, "charset") {
            return Some(meta_charset_node_attr_value);
        }

        if get_node_attr(meta_node, "http-equiv")
            .unwrap_or_default()
            .eq_ignore_ascii_case("content-type")
        {
            if let Some(meta_content_type_node_attr_value) = get_node_attr(meta_node, "content") {
                let (_media_type, charset) = parse_content_type(&meta_content_type_node_attr_value);
                return Some(charset);
            }
        }
    }

    None
}
