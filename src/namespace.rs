//! Namespace URIs used for node creation and attribute assignment.

/// Default namespace for markup elements
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Vector graphics namespace
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Link attributes (`xlink:href` and friends)
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

pub const XMLNS_NS: &str = "http://www.w3.org/2000/xmlns/";

/// Conventional prefix for a well-known attribute namespace.
pub fn well_known_prefix(namespace: &str) -> Option<&'static str> {
    match namespace {
        XLINK_NS => Some("xlink"),
        XML_NS => Some("xml"),
        XMLNS_NS => Some("xmlns"),
        _ => None,
    }
}
