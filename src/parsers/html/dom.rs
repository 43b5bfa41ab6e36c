use encoding_rs::Encoding;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::core::{MhtError, MhtResult};

/// 将 HTML 字节转换为 DOM
///
/// The bytes are decoded with `document_encoding` (UTF-8 with replacement
/// characters when the label is unknown). Malformed markup never fails; the
/// parser recovers and the tree simply holds fewer elements.
pub fn html_to_dom(data: &[u8], document_encoding: &str) -> MhtResult<RcDom> {
    let s: String = match Encoding::for_label(document_encoding.as_bytes()) {
        Some(encoding) => {
            let (string, _, _) = encoding.decode(data);
            string.into_owned()
        }
        None => String::from_utf8_lossy(data).into_owned(),
    };

    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut s.as_bytes())
        .map_err(|e| MhtError::Parse(e.to_string()))
}

/// 查找指定路径的DOM节点
///
/// `node_names` is a chain of element names, e.g. `["head", "script"]`.
/// Matches are returned in document order; no match yields an empty `Vec`.
pub fn find_nodes(node: &Handle, node_names: &[&str]) -> Vec<Handle> {
    let mut found_nodes = Vec::new();

    let Some((&node_name, rest)) = node_names.split_first() else {
        return found_nodes;
    };

    if rest.is_empty() {
        if get_node_name(node) == Some(node_name) {
            found_nodes.push(node.clone());
        }

        for child_node in node.children.borrow().iter() {
            found_nodes.append(&mut find_nodes(child_node, node_names));
        }
    } else if get_node_name(node) == Some(node_name) {
        found_nodes.append(&mut find_nodes(node, rest));
    } else {
        for child_node in node.children.borrow().iter() {
            found_nodes.append(&mut find_nodes(child_node, node_names));
        }
    }

    found_nodes
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
