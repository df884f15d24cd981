//! In-memory node model the element helper builds into.
//!
//! Nodes own their children outright: appending moves a node into its new
//! parent, so a node can never sit in two places at once.

pub mod attr;
pub mod event;
pub mod markup;
pub mod reflect;
pub mod serialize;
pub mod style;

pub use attr::Attr;
pub use event::{Event, EventHandler};
pub use style::StyleDeclaration;

use indexmap::IndexMap;

use crate::error::{ElemError, ElemResult};
use crate::namespace::XHTML_NS;
use crate::value::Value;

/// Any node that can appear in a tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(Text),
    Comment(Comment),
    Fragment(Fragment),
}

impl Node {
    pub fn text(data: impl Into<String>) -> Self {
        Node::Text(Text { data: data.into() })
    }

    pub fn comment(data: impl Into<String>) -> Self {
        Node::Comment(Comment { data: data.into() })
    }

    pub fn fragment() -> Self {
        Node::Fragment(Fragment::default())
    }

    /// Create an element, validating its qualified name
    pub fn element_ns(namespace: Option<&str>, qualified_name: &str) -> ElemResult<Self> {
        Element::new_ns(namespace, qualified_name).map(Node::Element)
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self, Node::Fragment(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_fragment(&self) -> Option<&Fragment> {
        match self {
            Node::Fragment(f) => Some(f),
            _ => None,
        }
    }

    /// `DIV`, `circle`, `#text`, `#comment`, `#document-fragment`
    pub fn node_name(&self) -> String {
        match self {
            Node::Element(e) => e.tag_name(),
            Node::Text(_) => "#text".to_string(),
            Node::Comment(_) => "#comment".to_string(),
            Node::Fragment(_) => "#document-fragment".to_string(),
        }
    }

    /// Character data of text and comment nodes
    pub fn node_value(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(&t.data),
            Node::Comment(c) => Some(&c.data),
            _ => None,
        }
    }

    pub fn child_nodes(&self) -> &[Node] {
        match self {
            Node::Element(e) => &e.children,
            Node::Fragment(f) => &f.children,
            Node::Text(_) | Node::Comment(_) => &[],
        }
    }

    /// Element children only
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.child_nodes().iter().filter_map(Node::as_element)
    }

    /// Append `child`, taking ownership. Fragments are emptied into the
    /// parent rather than nested.
    pub fn append_child(&mut self, child: Node) -> ElemResult<()> {
        match self {
            Node::Element(e) => {
                e.append_child(child);
                Ok(())
            }
            Node::Fragment(f) => {
                f.append_child(child);
                Ok(())
            }
            other => Err(ElemError::HierarchyRequest {
                reason: format!("{} nodes cannot have children", other.node_name()),
            }),
        }
    }

    /// Namespace that trusted markup appended to this node is parsed in.
    /// Elements use their own namespace; fragments have none and take
    /// `context` instead.
    pub(crate) fn markup_namespace<'a>(&'a self, context: Option<&'a str>) -> Option<&'a str> {
        match self {
            Node::Element(e) => e.namespace_uri(),
            _ => context,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Text(t) => t.data.clone(),
            Node::Comment(c) => c.data.clone(),
            Node::Element(_) | Node::Fragment(_) => {
                let mut out = String::new();
                collect_text(self.child_nodes(), &mut out);
                out
            }
        }
    }

    /// Serialize this node (and its subtree) to markup
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        serialize::write_node(self, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(&t.data),
            Node::Element(_) | Node::Fragment(_) => collect_text(node.child_nodes(), out),
            Node::Comment(_) => {}
        }
    }
}

fn push_child(children: &mut Vec<Node>, child: Node) {
    match child {
        Node::Fragment(f) => children.extend(f.children),
        other => children.push(other),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub data: String,
}

/// Lightweight container for grouping nodes without an enclosing element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    children: Vec<Node>,
}

impl Fragment {
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    pub fn append_child(&mut self, child: Node) {
        push_child(&mut self.children, child);
    }

    pub fn into_children(self) -> Vec<Node> {
        self.children
    }
}

/// An element in some namespace
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    namespace: Option<String>,
    prefix: Option<String>,
    local_name: String,
    attributes: Vec<Attr>,
    style: StyleDeclaration,
    /// Values assigned directly as properties (event handlers and friends)
    properties: IndexMap<String, Value>,
    children: Vec<Node>,
}

impl Element {
    pub fn new_ns(namespace: Option<&str>, qualified_name: &str) -> ElemResult<Self> {
        let (prefix, local_name) = attr::validate_and_extract(namespace, qualified_name)?;
        Ok(Self {
            namespace: namespace.map(str::to_string),
            prefix,
            local_name,
            attributes: Vec::new(),
            style: StyleDeclaration::new(),
            properties: IndexMap::new(),
            children: Vec::new(),
        })
    }

    // ─── Naming ──────────────────────────────────────────────────────────────

    pub fn namespace_uri(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.local_name),
            None => self.local_name.clone(),
        }
    }

    /// Qualified name, upper-cased for markup elements
    pub fn tag_name(&self) -> String {
        if self.is_html() {
            self.qualified_name().to_ascii_uppercase()
        } else {
            self.qualified_name()
        }
    }

    pub fn is_html(&self) -> bool {
        self.namespace.as_deref() == Some(XHTML_NS)
    }

    // ─── Attributes ──────────────────────────────────────────────────────────

    pub fn attributes(&self) -> &[Attr] {
        &self.attributes
    }

    /// First attribute whose qualified name is `name`
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        let name = self.normalize_attribute_name(name);
        self.attributes
            .iter()
            .find(|a| a.qualified_name() == name)
            .map(Attr::value)
    }

    pub fn get_attribute_ns(&self, namespace: Option<&str>, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.matches(namespace, local_name))
            .map(Attr::value)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    /// Set an attribute by qualified name. Names on markup elements are
    /// lower-cased.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> ElemResult<()> {
        attr::validate_name(name)?;
        let name = self.normalize_attribute_name(name);
        let existing = self
            .attributes
            .iter()
            .position(|a| a.qualified_name() == name);
        match existing {
            Some(index) => {
                let (namespace, local) = {
                    let a = &self.attributes[index];
                    (a.namespace_uri().map(str::to_string), a.local_name().to_string())
                };
                self.put_attribute(namespace, None, local, value.to_string());
            }
            None => self.put_attribute(None, None, name, value.to_string()),
        }
        Ok(())
    }

    /// Set an attribute in `namespace`, validating the name/namespace pair
    pub fn set_attribute_ns(
        &mut self,
        namespace: Option<&str>,
        qualified_name: &str,
        value: &str,
    ) -> ElemResult<()> {
        let (prefix, local) = attr::validate_and_extract(namespace, qualified_name)?;
        self.put_attribute(
            namespace.map(str::to_string),
            prefix,
            local,
            value.to_string(),
        );
        Ok(())
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let name = self.normalize_attribute_name(name);
        let index = self
            .attributes
            .iter()
            .position(|a| a.qualified_name() == name)?;
        let removed = self.attributes.remove(index);
        if removed.matches(None, "style") {
            self.style = StyleDeclaration::new();
        }
        Some(removed.value().to_string())
    }

    /// Store an already validated attribute. Keeps an existing attribute's
    /// prefix and position.
    pub(crate) fn put_attribute(
        &mut self,
        namespace: Option<String>,
        prefix: Option<String>,
        local_name: String,
        value: String,
    ) {
        if namespace.is_none() && local_name == "style" {
            self.style = StyleDeclaration::parse(&value);
        }
        match self
            .attributes
            .iter_mut()
            .find(|a| a.matches(namespace.as_deref(), &local_name))
        {
            Some(existing) => existing.set_value(value),
            None => self
                .attributes
                .push(Attr::new(namespace, prefix, local_name, value)),
        }
    }

    fn normalize_attribute_name(&self, name: &str) -> String {
        if self.is_html() {
            name.to_ascii_lowercase()
        } else {
            name.to_string()
        }
    }

    // ─── Reflected attributes ────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        self.get_attribute_ns(None, "id").unwrap_or("")
    }

    pub fn set_id(&mut self, id: &str) {
        self.put_attribute(None, None, "id".to_string(), id.to_string());
    }

    pub fn class_name(&self) -> &str {
        self.get_attribute_ns(None, "class").unwrap_or("")
    }

    pub fn set_class_name(&mut self, class_name: &str) {
        self.put_attribute(None, None, "class".to_string(), class_name.to_string());
    }

    pub fn class_list(&self) -> Vec<&str> {
        self.class_name().split_whitespace().collect()
    }

    // ─── Style ───────────────────────────────────────────────────────────────

    pub fn style(&self) -> &StyleDeclaration {
        &self.style
    }

    /// Assign one style rule and re-serialize the `style` attribute
    pub fn set_style_property(&mut self, name: &str, value: &str) {
        self.style.set_property(name, value);
        self.sync_style_attribute();
    }

    /// Replace the whole inline style from css text
    pub fn set_css_text(&mut self, css_text: &str) {
        self.style.set_css_text(css_text);
        self.sync_style_attribute();
    }

    fn sync_style_attribute(&mut self) {
        let css_text = self.style.css_text();
        match self.attributes.iter_mut().find(|a| a.matches(None, "style")) {
            Some(existing) => existing.set_value(css_text),
            None if !css_text.is_empty() => self.attributes.push(Attr::new(
                None,
                None,
                "style".to_string(),
                css_text,
            )),
            None => {}
        }
    }

    // ─── Properties ──────────────────────────────────────────────────────────

    /// Read a property: directly assigned values first, then the reflected
    /// `id`, `className` and boolean properties.
    pub fn property(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.properties.get(name) {
            return Some(value.clone());
        }
        match name {
            "id" => Some(Value::Str(self.id().to_string())),
            "className" => Some(Value::Str(self.class_name().to_string())),
            _ if self.reflects_boolean(name) => Some(Value::Bool(
                self.get_attribute_ns(None, &reflect::attribute_name(name))
                    .is_some(),
            )),
            _ => None,
        }
    }

    /// Assign a property. Reflected properties update their attribute, any
    /// other name is stored on the element as is.
    pub fn set_property(&mut self, name: &str, value: Value) {
        match name {
            "id" | "className" if value.as_text().is_some() => {
                let text = value.as_text().unwrap_or_default();
                if name == "id" {
                    self.set_id(&text);
                } else {
                    self.set_class_name(&text);
                }
            }
            _ if self.reflects_boolean(name) => {
                let attribute = reflect::attribute_name(name);
                if value.is_truthy() {
                    self.put_attribute(None, None, attribute, String::new());
                } else if let Some(index) =
                    self.attributes.iter().position(|a| a.matches(None, &attribute))
                {
                    self.attributes.remove(index);
                }
            }
            _ => {
                self.properties.insert(name.to_string(), value);
            }
        }
    }

    /// Whether the property `name` currently holds a boolean
    pub fn is_boolean_property(&self, name: &str) -> bool {
        match self.properties.get(name) {
            Some(value) => matches!(value, Value::Bool(_)),
            None => self.reflects_boolean(name),
        }
    }

    fn reflects_boolean(&self, name: &str) -> bool {
        reflect::is_boolean_property(self.namespace_uri(), &self.local_name, name)
    }

    // ─── Events ──────────────────────────────────────────────────────────────

    /// Invoke the handler stored at `on<kind>`. Returns whether one ran.
    pub fn dispatch_event(&self, event: &Event) -> bool {
        match self.properties.get(&format!("on{}", event.kind())) {
            Some(Value::Handler(handler)) => {
                handler.call(event);
                true
            }
            _ => false,
        }
    }

    // ─── Tree ────────────────────────────────────────────────────────────────

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Element children only
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn append_child(&mut self, child: Node) {
        push_child(&mut self.children, child);
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    pub fn inner_markup(&self) -> String {
        let mut out = String::new();
        serialize::write_children(self, &mut out);
        out
    }

    pub fn outer_markup(&self) -> String {
        let mut out = String::new();
        serialize::write_element(self, &mut out);
        out
    }
}
