//! Turning heterogeneous child input into appended nodes.

use crate::dom::markup::parse_fragment;
use crate::dom::Node;
use crate::error::ElemResult;
use crate::value::{number_to_string, Value};

/// What a single child value turns into
#[derive(Debug, Clone, PartialEq)]
pub enum ChildItem {
    /// Literal text, escaped on output
    Text(String),
    /// Trusted markup, parsed into nodes
    Html(String),
    Node(Node),
    /// Booleans, nulls, objects, handlers and nested arrays
    Ignored,
}

impl ChildItem {
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Trusted(t) => ChildItem::Html(t.into_inner()),
            Value::Str(s) => ChildItem::Text(s),
            Value::Number(n) => ChildItem::Text(number_to_string(n)),
            Value::Node(n) => ChildItem::Node(n),
            Value::Null
            | Value::Bool(_)
            | Value::Handler(_)
            | Value::Array(_)
            | Value::Object(_) => ChildItem::Ignored,
        }
    }
}

/// Append `children` to `parent` in order.
///
/// A single value is treated as a one-item list. Only one level of list is
/// unpacked: a list inside the list is ignored like any other unrecognized
/// value.
///
/// Trusted markup is parsed in the parent element's namespace. When the
/// parent is a fragment, `namespace` (the creating factory's) is used.
pub fn normalize_children(
    parent: &mut Node,
    children: Value,
    namespace: Option<&str>,
) -> ElemResult<()> {
    let items = match children {
        Value::Null => return Ok(()),
        Value::Array(items) => items,
        other => vec![other],
    };

    for item in items {
        match ChildItem::classify(item) {
            ChildItem::Text(text) => parent.append_child(Node::text(text))?,
            ChildItem::Html(markup) => {
                let context = parent.markup_namespace(namespace).map(str::to_string);
                for node in parse_fragment(&markup, context.as_deref())? {
                    parent.append_child(node)?;
                }
            }
            ChildItem::Node(node) => parent.append_child(node)?,
            ChildItem::Ignored => tracing::trace!("skipping unrecognized child value"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{SVG_NS, XHTML_NS};
    use crate::value::{Props, Trusted};

    fn div() -> Node {
        Node::element_ns(Some(XHTML_NS), "div").unwrap()
    }

    #[test]
    fn test_classification() {
        assert_eq!(ChildItem::classify("a".into()), ChildItem::Text("a".into()));
        assert_eq!(ChildItem::classify(0.into()), ChildItem::Text("0".into()));
        assert_eq!(
            ChildItem::classify(Trusted::new("<i/>").into()),
            ChildItem::Html("<i/>".into())
        );
        assert_eq!(ChildItem::classify(true.into()), ChildItem::Ignored);
        assert_eq!(ChildItem::classify(Props::new().into()), ChildItem::Ignored);
        assert_eq!(ChildItem::classify(Value::Array(vec![])), ChildItem::Ignored);
    }

    #[test]
    fn test_null_appends_nothing() {
        let mut node = div();
        normalize_children(&mut node, Value::Null, None).unwrap();
        assert!(node.child_nodes().is_empty());
    }

    #[test]
    fn test_empty_string_and_zero_still_append() {
        let mut node = div();
        normalize_children(&mut node, Value::from(vec![Value::from(""), Value::from(0)]), None).unwrap();
        let values: Vec<_> = node.child_nodes().iter().map(|n| n.node_value()).collect();
        assert_eq!(values, vec![Some(""), Some("0")]);
    }

    #[test]
    fn test_nested_arrays_are_not_flattened() {
        let mut node = div();
        let nested = Value::from(vec![Value::from("a"), Value::from(vec!["b", "c"])]);
        normalize_children(&mut node, nested, None).unwrap();
        assert_eq!(node.child_nodes().len(), 1);
        assert_eq!(node.text_content(), "a");
    }

    #[test]
    fn test_trusted_markup_is_parsed() {
        let mut node = div();
        normalize_children(&mut node, Trusted::new("x<em>y</em>").into(), None).unwrap();
        assert_eq!(node.child_nodes().len(), 2);
        assert_eq!(node.children().next().unwrap().local_name(), "em");
    }

    #[test]
    fn test_fragment_markup_uses_context_namespace() {
        let mut fragment = Node::fragment();
        normalize_children(&mut fragment, Trusted::new("<circle r=\"4\"/>").into(), Some(SVG_NS))
            .unwrap();
        let circle = fragment.children().next().unwrap();
        assert_eq!(circle.namespace_uri(), Some(SVG_NS));
    }

    #[test]
    fn test_element_namespace_wins_over_context() {
        let mut node = div();
        normalize_children(&mut node, Trusted::new("<em>y</em>").into(), Some(SVG_NS)).unwrap();
        assert_eq!(node.children().next().unwrap().namespace_uri(), Some(XHTML_NS));
    }
}
