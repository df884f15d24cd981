//! Parsing trusted markup into nodes.
//!
//! Markup inserted into the markup (XHTML) namespace goes through the HTML5
//! fragment algorithm with a `body` context, so void tags, named entities
//! and unquoted attributes behave the way a browser's `innerHTML` would.
//! Inline `<svg>` keeps its own namespace.
//!
//! Any other context is parsed as a well-formed XML fragment inside a
//! synthetic root that declares the context namespace as the default
//! namespace, so `<circle/>` inserted into an SVG element becomes an SVG
//! `circle`.

use html5ever::tendril::TendrilSink;
use html5ever::{LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use super::{Element, Node};
use crate::error::ElemResult;
use crate::namespace::{well_known_prefix, XHTML_NS, XLINK_NS};

/// Synthetic root tag wrapping the fragment (allows multiple top-level nodes)
const WRAPPER: &str = "__elem_root__";

/// Parse `markup` in the context of `namespace` into a list of top-level nodes.
pub fn parse_fragment(markup: &str, namespace: Option<&str>) -> ElemResult<Vec<Node>> {
    let nodes = match namespace {
        Some(XHTML_NS) => parse_html(markup)?,
        _ => parse_xml(markup, namespace)?,
    };
    tracing::trace!(count = nodes.len(), namespace = ?namespace, "parsed trusted markup");
    Ok(nodes)
}

// ─── HTML context ───

fn parse_html(markup: &str) -> ElemResult<Vec<Node>> {
    let context = QualName::new(None, Namespace::from(XHTML_NS), LocalName::from("body"));
    let dom = html5ever::parse_fragment(RcDom::default(), Default::default(), context, Vec::new(), false)
        .one(markup);

    // the fragment's nodes hang off a synthetic <html> root
    let document = dom.document.children.borrow();
    let Some(root) = document.first() else {
        return Ok(Vec::new());
    };

    let mut nodes = Vec::new();
    for child in root.children.borrow().iter() {
        if let Some(node) = convert_html_node(child)? {
            nodes.push(node);
        }
    }
    Ok(nodes)
}

fn convert_html_node(handle: &Handle) -> ElemResult<Option<Node>> {
    match &handle.data {
        RcNodeData::Element { name, attrs, .. } => {
            let namespace = (!name.ns.is_empty()).then(|| name.ns.to_string());
            let mut element = Element::new_ns(namespace.as_deref(), &name.local)?;

            for attr in attrs.borrow().iter() {
                let attr_ns = (!attr.name.ns.is_empty()).then(|| attr.name.ns.to_string());
                let prefix = match &attr.name.prefix {
                    Some(prefix) => Some(prefix.to_string()),
                    None => attr_ns.as_deref().and_then(well_known_prefix).map(str::to_string),
                };
                element.put_attribute(
                    attr_ns,
                    prefix,
                    attr.name.local.to_string(),
                    attr.value.to_string(),
                );
            }

            for child in handle.children.borrow().iter() {
                if let Some(converted) = convert_html_node(child)? {
                    element.append_child(converted);
                }
            }
            Ok(Some(Node::Element(element)))
        }
        RcNodeData::Text { contents } => Ok(Some(Node::text(contents.borrow().to_string()))),
        RcNodeData::Comment { contents } => Ok(Some(Node::comment(contents.to_string()))),
        RcNodeData::Document
        | RcNodeData::Doctype { .. }
        | RcNodeData::ProcessingInstruction { .. } => Ok(None),
    }
}

// ─── XML context ───

fn wrap(markup: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(ns) => format!(
            r#"<{0} xmlns="{1}" xmlns:xlink="{2}">{3}</{0}>"#,
            WRAPPER,
            escape_uri(ns),
            XLINK_NS,
            markup
        ),
        None => format!(r#"<{0} xmlns:xlink="{1}">{2}</{0}>"#, WRAPPER, XLINK_NS, markup),
    }
}

fn escape_uri(uri: &str) -> String {
    uri.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

fn parse_xml(markup: &str, namespace: Option<&str>) -> ElemResult<Vec<Node>> {
    let wrapped = wrap(markup, namespace);
    let doc = roxmltree::Document::parse(&wrapped)?;

    let mut nodes = Vec::new();
    for child in doc.root_element().children() {
        if let Some(node) = convert_xml_node(child)? {
            nodes.push(node);
        }
    }
    Ok(nodes)
}

fn convert_xml_node(node: roxmltree::Node) -> ElemResult<Option<Node>> {
    if node.is_element() {
        let tag = node.tag_name();
        let mut element = Element::new_ns(tag.namespace(), tag.name())?;

        for attr in node.attributes() {
            let namespace = attr.namespace();
            element.put_attribute(
                namespace.map(str::to_string),
                namespace.and_then(well_known_prefix).map(str::to_string),
                attr.name().to_string(),
                attr.value().to_string(),
            );
        }

        for child in node.children() {
            if let Some(converted) = convert_xml_node(child)? {
                element.append_child(converted);
            }
        }
        Ok(Some(Node::Element(element)))
    } else if node.is_text() {
        Ok(Some(Node::text(node.text().unwrap_or_default())))
    } else if node.is_comment() {
        Ok(Some(Node::comment(node.text().unwrap_or_default())))
    } else {
        // processing instructions are dropped
        Ok(None)
    }
}
