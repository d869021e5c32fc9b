use std::sync::OnceLock;

use regex::Regex;

/// ASCII 空白字符
pub const WHITESPACES: &[char] = &[' ', '\t', '\n', '\x0c', '\r'];

/// 匹配 `<html ...>` 起始标签（不区分大小写，可跨行，允许属性）
const HTML_TAG_PATTERN: &str = r"(?is)<html.*?>";

fn html_tag_regex() -> &'static Regex {
    static HTML_TAG_RE: OnceLock<Regex> = OnceLock::new();
    HTML_TAG_RE.get_or_init(|| Regex::new(HTML_TAG_PATTERN).expect("valid <html> tag pattern"))
}

/// 判断输入是否为完整的 HTML 文档
///
/// 只有包含 `<html>` 起始标签的输入才被视为完整文档，其余的一律按片段处理，
/// 无论片段有多大、包含多少元素。
pub fn looks_like_full_document(value: &str) -> bool {
    html_tag_regex().is_match(value)
}

/// 判断属性值是否为数字（整数或小数）
pub fn is_number(value: &str) -> bool {
    parse_number(value).is_some()
}

/// 将属性值解析为有限数值
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim_matches(WHITESPACES)
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}
