//! Applying a property bag to a freshly created element.

use crate::dom::Element;
use crate::error::ElemResult;
use crate::namespace::XLINK_NS;
use crate::value::{Props, Value};

/// Apply each entry of `props` to `element`, in bag order.
///
/// - `on*` keys are assigned as properties (event handlers pass through)
/// - `style` with a nested bag sets one style rule per entry
/// - `class` / `className` append to the existing class value
/// - everything else becomes an attribute; `xlink*` keys land in the
///   XLink namespace
///
/// Attribute name errors from the element are returned as is.
pub fn apply_properties(element: &mut Element, props: Props) -> ElemResult<()> {
    for (key, value) in props {
        match value {
            value if key.starts_with("on") => element.set_property(&key, value),
            Value::Object(rules) if key == "style" => apply_style_rules(element, rules),
            value if key == "class" || key == "className" => append_class(element, &value),
            value => set_attribute(element, &key, value)?,
        }
    }
    Ok(())
}

fn apply_style_rules(element: &mut Element, rules: Props) {
    for (rule, value) in rules {
        let text = value.as_text().unwrap_or_default();
        element.set_style_property(&rule, &text);
    }
}

fn append_class(element: &mut Element, value: &Value) {
    let Some(extra) = value.as_text() else {
        return;
    };
    let current = element.class_name();
    let combined = if current.is_empty() {
        extra
    } else {
        format!("{} {}", current, extra)
    };
    element.set_class_name(&combined);
}

fn set_attribute(element: &mut Element, key: &str, value: Value) -> ElemResult<()> {
    let text = match value {
        Value::Null => {
            // bare attributes: boolean properties get their own name, the rest ""
            if element.is_boolean_property(key) {
                key.to_string()
            } else {
                String::new()
            }
        }
        other => match other.as_text() {
            Some(text) => text,
            None => {
                element.set_property(key, other);
                return Ok(());
            }
        },
    };

    let namespace = if key.starts_with("xlink") {
        Some(XLINK_NS)
    } else {
        None
    };
    element.set_attribute_ns(namespace, key, &text)
}
