//! HTML serialisation of the view tree.
//!
//! This is the presentation layer's read side of the search state: technology
//! items (elements carrying `data-tech`) get a `highlighted` or `dimmed` class
//! from the [`VisibilityMap`].  Items in the default state get neither.
//!
//! All text and attribute values are escaped; the data file is contributor
//! input and must not be able to inject markup.

use super::view::{Element, Node};
use crate::search::visibility::{ItemState, VisibilityMap};

/// Elements that have no closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta"];

/// Serialises `element` and its subtree.
pub fn to_html(element: &Element, visibility: &VisibilityMap) -> String {
    let mut out = String::new();
    write_element(element, visibility, &mut out);
    out
}

fn write_element(element: &Element, visibility: &VisibilityMap, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);

    let mut classes: Vec<&str> = element.classes.iter().map(String::as_str).collect();
    if let Some(name) = element.get_attr("data-tech").filter(|_| element.has_class("tech-item")) {
        match visibility.state(name) {
            ItemState::HIGHLIGHTED => classes.push("highlighted"),
            ItemState::DIMMED => classes.push("dimmed"),
            _ => {}
        }
    }
    if !classes.is_empty() {
        push_attr(out, "class", &classes.join(" "));
    }
    for (name, value) in &element.attrs {
        push_attr(out, name, value);
    }
    out.push('>');

    if VOID_TAGS.contains(&element.tag) {
        return;
    }

    for child in &element.children {
        match child {
            Node::Text(text) => out.push_str(&escape(text)),
            Node::Element(e) => write_element(e, visibility, out),
        }
    }

    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
