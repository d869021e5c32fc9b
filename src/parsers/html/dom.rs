use encoding_rs::Encoding;
use html5ever::interface::{Attribute, QualName};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{local_name, namespace_url, ns, parse_document, parse_fragment, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use thiserror::Error;

/// DOM 构建错误
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read markup: {0}")]
    Read(#[from] std::io::Error),
}

fn decode(data: &[u8], document_encoding: &str) -> String {
    if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
        let (string, _, _) = encoding.decode(data);
        string.to_string()
    } else {
        String::from_utf8_lossy(data).to_string()
    }
}

/// 关闭脚本模式，`<noscript>` 的内容按普通标记解析
fn parse_opts() -> ParseOpts {
    ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// 将 HTML 字节按完整文档解析为 DOM
pub fn html_to_dom(data: &[u8], document_encoding: &str) -> Result<RcDom, ParseError> {
    let s = decode(data, document_encoding);

    let dom = parse_document(RcDom::default(), parse_opts())
        .from_utf8()
        .read_from(&mut s.as_bytes())?;
    Ok(dom)
}

/// 将 HTML 片段解析为 DOM
///
/// 片段在 `<body>` 上下文中解析，任何文本（包括夹杂标签的纯文本）都会得到一棵树。
pub fn fragment_to_dom(fragment: &str) -> Result<RcDom, ParseError> {
    let context = QualName::new(None, ns!(html), local_name!("body"));
    let context_attrs: Vec<Attribute> = vec![];

    let dom = parse_fragment(RcDom::default(), parse_opts(), context, context_attrs)
        .from_utf8()
        .read_from(&mut fragment.as_bytes())?;
    Ok(dom)
}

/// 查找指定路径的DOM节点
pub fn find_nodes(node: &Handle, node_names: &[&str]) -> Vec<Handle> {
    let mut found_nodes = Vec::new();

    let Some((node_name, rest)) = node_names.split_first() else {
        return found_nodes;
    };

    match get_node_name(node) {
        Some(name) if name == *node_name => {
            if rest.is_empty() {
                found_nodes.push(node.clone());
                for child_node in node.children.borrow().iter() {
                    found_nodes.append(&mut find_nodes(child_node, node_names));
                }
            } else {
                found_nodes.append(&mut find_nodes_in_children(node, rest));
            }
        }
        _ => {
            for child_node in node.children.borrow().iter() {
                found_nodes.append(&mut find_nodes(child_node, node_names));
            }
        }
    }

    found_nodes
}

fn find_nodes_in_children(parent: &Handle, node_names: &[&str]) -> Vec<Handle> {
    let mut found_nodes = Vec::new();
    for child_node in parent.children.borrow().iter() {
        found_nodes.append(&mut find_nodes(child_node, node_names));
    }
    found_nodes
}

/// 按标签名查找所有元素（文档顺序）
pub fn find_elements_by_name(node: &Handle, node_name: &str) -> Vec<Handle> {
    find_nodes(node, &[node_name])
}

/// 获取节点属性值
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// 获取节点名称
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// 设置已有节点属性的值
///
/// 节点上不存在的属性不会被添加。
pub fn set_node_attr(node: &Handle, attr_name: &str, attr_value: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        for attr in attrs.borrow_mut().iter_mut() {
            if &*attr.name.local == attr_name {
                attr.value.clear();
                attr.value.push_slice(attr_value);
            }
        }
    }
}

/// 遍历所有元素节点（文档顺序）
pub fn for_each_element<F: FnMut(&Handle)>(node: &Handle, f: &mut F) {
    if let NodeData::Element { .. } = node.data {
        f(node);
    }

    for child_node in node.children.borrow().iter() {
        for_each_element(child_node, f);
    }
}
