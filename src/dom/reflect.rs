//! Boolean IDL properties that reflect a presence attribute.
//!
//! Only markup (XHTML) elements carry these; property names are matched
//! exactly, attribute names are the lower-cased property name.

use crate::namespace::XHTML_NS;

const GLOBAL: &[&str] = &["hidden", "inert", "autofocus"];

const BY_ELEMENT: &[(&str, &[&str])] = &[
    (
        "input",
        &[
            "disabled",
            "checked",
            "multiple",
            "required",
            "readOnly",
            "formNoValidate",
        ],
    ),
    ("button", &["disabled", "formNoValidate"]),
    ("select", &["disabled", "multiple", "required"]),
    ("textarea", &["disabled", "required", "readOnly"]),
    ("option", &["disabled", "selected"]),
    ("optgroup", &["disabled"]),
    ("fieldset", &["disabled"]),
    ("form", &["noValidate"]),
    ("details", &["open"]),
    ("dialog", &["open"]),
    ("audio", &["autoplay", "controls", "loop", "muted"]),
    ("video", &["autoplay", "controls", "loop", "muted", "playsInline"]),
    ("script", &["async", "defer", "noModule"]),
    ("img", &["isMap"]),
    ("iframe", &["allowFullscreen"]),
    ("ol", &["reversed"]),
    ("track", &["default"]),
];

/// Whether `property` is a reflected boolean on an element with the given
/// namespace and local name.
pub fn is_boolean_property(namespace: Option<&str>, local_name: &str, property: &str) -> bool {
    if namespace != Some(XHTML_NS) {
        return false;
    }
    if GLOBAL.contains(&property) {
        return true;
    }
    let local_name = local_name.to_ascii_lowercase();
    BY_ELEMENT
        .iter()
        .find(|(tag, _)| *tag == local_name)
        .is_some_and(|(_, props)| props.contains(&property))
}

/// Attribute backing a reflected property
pub fn attribute_name(property: &str) -> String {
    property.to_ascii_lowercase()
}
