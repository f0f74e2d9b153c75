//! Deterministic markup serializer
//!
//! Attributes are written in insertion order, text and attribute values are
//! escaped, raw nodes are written verbatim. Two equal trees always
//! serialize to the same bytes.

use super::node::{Element, Node};

/// Serialize an element (fragments serialize as their children)
pub fn render_html(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

/// Serialize a sequence of sibling nodes
pub fn render_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => escape_into(text, false, out),
        Node::Element(el) => write_element(el, out),
        Node::Raw(raw) => out.push_str(raw),
    }
}

fn write_element(el: &Element, out: &mut String) {
    let name = el.tag.name();
    if name.is_empty() {
        for child in &el.children {
            write_node(child, out);
        }
        return;
    }

    out.push('<');
    out.push_str(name);
    for (key, value) in el.attributes.iter() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        escape_into(value, true, out);
        out.push('"');
    }

    if el.tag.is_void() {
        out.push_str(" />");
        return;
    }
    out.push('>');
    for child in &el.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
