//! Markup serialization (HTML fragment serialization rules).

use super::{Element, Node};
use crate::namespace::{well_known_prefix, XHTML_NS};

/// Markup elements that never have an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Markup elements whose text children are emitted verbatim
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

pub(crate) fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(e) => write_element(e, out),
        Node::Text(t) => escape_text(&t.data, out),
        Node::Comment(c) => {
            out.push_str("<!--");
            out.push_str(&c.data);
            out.push_str("-->");
        }
        Node::Fragment(f) => {
            for child in f.child_nodes() {
                write_node(child, out);
            }
        }
    }
}

pub(crate) fn write_element(element: &Element, out: &mut String) {
    let name = element.qualified_name();
    out.push('<');
    out.push_str(&name);
    for attr in element.attributes() {
        out.push(' ');
        match attr.namespace_uri().and_then(well_known_prefix) {
            Some("xmlns") if attr.local_name() == "xmlns" => out.push_str("xmlns"),
            Some(prefix) => {
                out.push_str(prefix);
                out.push(':');
                out.push_str(attr.local_name());
            }
            None => out.push_str(&attr.qualified_name()),
        }
        out.push_str("=\"");
        escape_attribute(attr.value(), out);
        out.push('"');
    }
    out.push('>');

    if is_html_named(element, VOID_ELEMENTS) {
        return;
    }
    write_children(element, out);
    out.push_str("</");
    out.push_str(&name);
    out.push('>');
}

pub(crate) fn write_children(element: &Element, out: &mut String) {
    let raw = is_html_named(element, RAW_TEXT_ELEMENTS);
    for child in element.child_nodes() {
        match child {
            Node::Text(t) if raw => out.push_str(&t.data),
            other => write_node(other, out),
        }
    }
}

fn is_html_named(element: &Element, names: &[&str]) -> bool {
    element.namespace_uri() == Some(XHTML_NS) && names.contains(&element.local_name())
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}
