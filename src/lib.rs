//! # NullTrace Element Helper
//!
//! Builds nodes from compact, selector-like descriptors.
//!
//! ## Features
//! - `tag#id.class[attr=value][flag]` descriptor parsing
//! - Property bags with event handler, style, class and `xlink:` handling
//! - Children from strings, numbers, nodes or trusted markup, in one call
//! - Namespace-bound factories (markup, vector graphics, or any other URI)
//!
//! ## Example
//! ```ignore
//! use nulltrace_elem::{create, svg, trust, Props};
//!
//! let button = create(
//!     "button#save.primary[type=submit]",
//!     Props::new().with("class", "wide").with("disabled", ()),
//!     "Save",
//! )?;
//!
//! let icon = svg().with("use", Props::new().with("xlink:href", "#disk"))?;
//! let note = create("p.note", trust("Saved <em>just now</em>"), ())?;
//! ```

pub mod builder;
pub mod children;
pub mod config;
pub mod descriptor;
pub mod dom;
pub mod error;
pub mod namespace;
pub mod props;
pub mod value;

// --- Core types ---
pub use builder::{Factory, Head, HTML, SVG};
pub use children::ChildItem;
pub use config::FactoryConfig;
pub use descriptor::{parse_descriptor, Descriptor};
pub use dom::{Element, Event, EventHandler, Node};
pub use error::{ElemError, ElemResult};
pub use value::{Props, Trusted, Value};

/// Create a node in the markup namespace.
///
/// `props` may be omitted by passing the children in its place.
pub fn create(
    head: impl Into<Head>,
    props: impl Into<Value>,
    children: impl Into<Value>,
) -> ElemResult<Node> {
    HTML.create(head, props, children)
}

/// Factory bound to `namespace_uri`
pub fn ns(namespace_uri: impl Into<String>) -> Factory {
    Factory::ns(namespace_uri)
}

/// Factory bound to the vector graphics namespace
pub fn svg() -> Factory {
    SVG
}

/// Mark `value` as markup to insert unescaped
pub fn trust(value: impl std::fmt::Display) -> Trusted {
    Trusted::new(value)
}
