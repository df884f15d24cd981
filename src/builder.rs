//! Element construction and namespace-bound factories.

use std::borrow::Cow;

use crate::children::normalize_children;
use crate::config::FactoryConfig;
use crate::descriptor::{Descriptor, DEFAULT_TAG};
use crate::dom::{Element, Node};
use crate::error::ElemResult;
use crate::namespace::{SVG_NS, XHTML_NS};
use crate::props::apply_properties;
use crate::value::{Props, Value};

/// First argument of a factory call: a descriptor string, or a list of
/// children to gather into a fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Head {
    Descriptor(String),
    Group(Vec<Value>),
}

impl From<&str> for Head {
    fn from(s: &str) -> Self {
        Head::Descriptor(s.to_string())
    }
}

impl From<String> for Head {
    fn from(s: String) -> Self {
        Head::Descriptor(s)
    }
}

impl From<&String> for Head {
    fn from(s: &String) -> Self {
        Head::Descriptor(s.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Head {
    fn from(items: Vec<T>) -> Self {
        Head::Group(items.into_iter().map(Into::into).collect())
    }
}

/// Creates elements in one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factory {
    namespace: Cow<'static, str>,
    default_tag: Cow<'static, str>,
}

/// Markup elements
pub const HTML: Factory = Factory::bound(XHTML_NS);

/// Vector graphics elements
pub const SVG: Factory = Factory::bound(SVG_NS);

impl Factory {
    const fn bound(namespace: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(namespace),
            default_tag: Cow::Borrowed(DEFAULT_TAG),
        }
    }

    /// Factory for an arbitrary namespace. An empty URI means no namespace.
    pub fn ns(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Cow::Owned(namespace.into()),
            default_tag: Cow::Borrowed(DEFAULT_TAG),
        }
    }

    pub fn from_config(config: FactoryConfig) -> Self {
        Self {
            namespace: Cow::Owned(config.namespace),
            default_tag: Cow::Owned(config.default_tag),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    /// Build a node from a head, a property bag and children.
    ///
    /// When `props` is not a bag (a string, node, list, number, ...) it is
    /// taken as the children instead and `children` is ignored.
    pub fn create(
        &self,
        head: impl Into<Head>,
        props: impl Into<Value>,
        children: impl Into<Value>,
    ) -> ElemResult<Node> {
        build(
            &self.namespace,
            &self.default_tag,
            head.into(),
            props.into(),
            children.into(),
        )
    }

    /// `create(head, null, null)`
    pub fn el(&self, head: impl Into<Head>) -> ElemResult<Node> {
        self.create(head, Value::Null, Value::Null)
    }

    /// `create(head, arg, null)`: `arg` is a property bag or the children
    pub fn with(&self, head: impl Into<Head>, arg: impl Into<Value>) -> ElemResult<Node> {
        self.create(head, arg, Value::Null)
    }
}

impl Default for Factory {
    fn default() -> Self {
        HTML
    }
}

/// Create one element (or a fragment) in `namespace`.
pub fn build(
    namespace: &str,
    default_tag: &str,
    head: Head,
    props: Value,
    children: Value,
) -> ElemResult<Node> {
    let (mut props, children) = match props {
        Value::Object(props) => (props, children),
        Value::Null => (Props::new(), children),
        other => (Props::new(), other),
    };

    let descriptor = match head {
        Head::Group(items) => {
            tracing::debug!(items = items.len(), "building fragment");
            let mut fragment = Node::fragment();
            let context = (!namespace.is_empty()).then_some(namespace);
            normalize_children(&mut fragment, Value::Array(items), context)?;
            return Ok(fragment);
        }
        Head::Descriptor(descriptor) => descriptor,
    };

    let parsed = Descriptor::parse_with_default(&descriptor, default_tag);
    tracing::debug!(
        descriptor = %descriptor,
        tag = %parsed.tag,
        namespace = %namespace,
        "building element"
    );

    let namespace = (!namespace.is_empty()).then_some(namespace);
    let mut element = Element::new_ns(namespace, &parsed.tag)?;

    if let Some(id) = &parsed.id {
        element.set_id(id);
    }
    if let Some(class_name) = parsed.class_name() {
        element.set_class_name(&class_name);
    }
    // bracket attributes only fill in what the bag doesn't set
    for (name, value) in parsed.attributes {
        if !props.contains_key(&name) {
            props.insert(name, value);
        }
    }
    apply_properties(&mut element, props)?;

    let mut node = Node::Element(element);
    normalize_children(&mut node, children, namespace)?;
    Ok(node)
}
