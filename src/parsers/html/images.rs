//! 图片候选提取模块
//!
//! 从 DOM 中按文档顺序收集 `<img>` 元素，并将其转换为去重后的图片候选列表。
//! 只有 `src` 为绝对 HTTP(S) URL 的元素才会成为候选，未解析的相对路径和
//! `data:` 等其他协议都会被丢弃。本模块不进行任何网络访问。

use std::collections::HashSet;

use markup5ever_rcdom::{Handle, RcDom};
use serde::Serialize;

use crate::utils::url::is_absolute_url;

use super::dom::{find_elements_by_name, get_node_attr};
use super::utils::{parse_number, WHITESPACES};

/// 图片元素标签名
pub const IMAGE_TAG: &str = "img";

/// 图片候选
///
/// 每个唯一的 `src` 只生成一次，之后不再修改。
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageCandidate {
    /// 绝对 HTTP(S) URL，与 `src` 属性的字符串完全一致
    pub url: String,
    /// `width` 属性声明的宽度
    pub declared_width: Option<u32>,
    /// `height` 属性声明的高度
    pub declared_height: Option<u32>,
}

/// 按文档顺序返回所有图片元素
///
/// 只有在没有文档时才返回 `None`；文档中没有图片时返回空列表。
pub fn extract_images(dom: Option<&RcDom>) -> Option<Vec<Handle>> {
    dom.map(|dom| find_elements_by_name(&dom.document, IMAGE_TAG))
}

/// 将图片元素转换为去重后的候选列表（保留首次出现的顺序）
///
/// 重复的 URL 被直接丢弃，后出现的宽高不会覆盖先出现的。
pub fn extract_candidates(elements: &[Handle]) -> Vec<ImageCandidate> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates: Vec<ImageCandidate> = Vec::new();

    for element in elements {
        let src = match get_node_attr(element, "src") {
            Some(src) => src.trim_matches(WHITESPACES).to_string(),
            None => continue,
        };
        if !is_absolute_url(&src) {
            continue;
        }

        if !seen.insert(src.clone()) {
            continue;
        }

        candidates.push(ImageCandidate {
            url: src,
            declared_width: get_node_attr(element, "width")
                .as_deref()
                .and_then(parse_declared_dimension),
            declared_height: get_node_attr(element, "height")
                .as_deref()
                .and_then(parse_declared_dimension),
        });
    }

    candidates
}

/// 解析声明的宽度或高度
///
/// 小数向零截断；截断后小于 1 的值视为未声明。
pub fn parse_declared_dimension(value: &str) -> Option<u32> {
    let number = parse_number(value)?.trunc();

    if number < 1.0 {
        None
    } else if number >= u32::MAX as f64 {
        Some(u32::MAX)
    } else {
        Some(number as u32)
    }
}
