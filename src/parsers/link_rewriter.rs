//! 链接重写模块
//!
//! 负责将HTML中的相对链接原地重写为绝对链接

use markup5ever_rcdom::Handle;

use crate::parsers::html::{for_each_element, get_base_url, get_node_attr, set_node_attr};
use crate::utils::url::{resolve_url, Url};

/// 可能包含链接的属性
pub const LINK_ATTRIBUTES: &[&str] = &[
    "action",
    "archive",
    "background",
    "cite",
    "classid",
    "codebase",
    "data",
    "dynsrc",
    "formaction",
    "href",
    "icon",
    "longdesc",
    "lowsrc",
    "manifest",
    "poster",
    "profile",
    "src",
    "usemap",
];

/// 计算文档的有效基础URL
///
/// 文档中的 `<base href>` 相对于给定的基础URL解析后优先使用。
pub fn effective_base_url(document: &Handle, base_url: &Url) -> Url {
    get_base_url(document)
        .and_then(|base_href| resolve_url(base_url, &base_href))
        .unwrap_or_else(|| base_url.clone())
}

/// 将文档中所有链接属性重写为绝对形式
///
/// # Arguments
///
/// * `document` - DOM树的根节点
/// * `base_url` - 用于解析相对链接的基础URL
///
/// # Returns
///
/// 被重写的属性数量
pub fn make_links_absolute(document: &Handle, base_url: &Url) -> usize {
    let base_url = effective_base_url(document, base_url);
    let mut rewritten = 0;

    for_each_element(document, &mut |node: &Handle| {
        for attr_name in LINK_ATTRIBUTES {
            if rewrite_link_attr(node, attr_name, &base_url) {
                rewritten += 1;
            }
        }
    });

    rewritten
}

fn rewrite_link_attr(node: &Handle, attr_name: &str, base_url: &Url) -> bool {
    let Some(value) = get_node_attr(node, attr_name) else {
        return false;
    };
    let trimmed_value = value.trim();

    if should_skip_link(trimmed_value) {
        return false;
    }

    match resolve_url(base_url, trimmed_value) {
        Some(absolute_url) if absolute_url.as_str() != value => {
            set_node_attr(node, attr_name, absolute_url.as_str());
            true
        }
        _ => false,
    }
}

/// 判断是否应该跳过重写的链接
fn should_skip_link(href: &str) -> bool {
    href.is_empty()
        || href.starts_with('#')
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
        || href.starts_with("blob:")
}
