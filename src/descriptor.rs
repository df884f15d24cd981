//! Selector-like element descriptors: `tag#id.class1.class2[attr=value][flag]`.

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Tag used when a descriptor does not start with one
pub const DEFAULT_TAG: &str = "div";

/// The parsed form of a descriptor string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Bracket attributes in descriptor order. `None` marks a bare `[name]`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, Option<String>>,
}

impl Descriptor {
    /// Parse with `div` as the fallback tag
    pub fn parse(descriptor: &str) -> Self {
        Self::parse_with_default(descriptor, DEFAULT_TAG)
    }

    /// Parse a descriptor. Never fails: anything that doesn't match simply
    /// leaves the corresponding field unset.
    ///
    /// Bracket attributes are stripped before looking for `#id` and `.class`,
    /// so `a[href=x.com/#top]` has no id and no class. Scanning the whole
    /// string instead would pick up `com` as a class and `top` as the id.
    pub fn parse_with_default(descriptor: &str, default_tag: &str) -> Self {
        let tag = tag_regex()
            .find(descriptor)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| default_tag.to_string());

        let mut attributes = IndexMap::new();
        for caps in attr_regex().captures_iter(descriptor) {
            let name = caps[1].to_string();
            let value = caps.get(2).map(|v| v.as_str().to_string());
            // first occurrence wins
            attributes.entry(name).or_insert(value);
        }

        // ids and classes are only looked for outside of bracket values
        let selector = attr_regex().replace_all(descriptor, "");

        let id = id_regex()
            .captures(&selector)
            .map(|caps| caps[1].to_string());

        let classes = class_regex()
            .captures_iter(&selector)
            .map(|caps| caps[1].to_string())
            .collect();

        Descriptor {
            tag,
            id,
            classes,
            attributes,
        }
    }

    /// Classes joined the way they land in the `class` attribute.
    pub fn class_name(&self) -> Option<String> {
        if self.classes.is_empty() {
            None
        } else {
            Some(self.classes.join(" "))
        }
    }
}

/// Parse a descriptor string into tag, id, classes and bracket attributes.
pub fn parse_descriptor(descriptor: &str) -> Descriptor {
    Descriptor::parse(descriptor)
}

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_\-]+").unwrap())
}

fn id_regex() -> &'static Regex {
    static ID_REGEX: OnceLock<Regex> = OnceLock::new();
    ID_REGEX.get_or_init(|| Regex::new(r"#([A-Za-z0-9_\-]+)").unwrap())
}

fn class_regex() -> &'static Regex {
    static CLASS_REGEX: OnceLock<Regex> = OnceLock::new();
    CLASS_REGEX.get_or_init(|| Regex::new(r"\.([A-Za-z0-9_\-]+)").unwrap())
}

fn attr_regex() -> &'static Regex {
    static ATTR_REGEX: OnceLock<Regex> = OnceLock::new();
    ATTR_REGEX.get_or_init(|| Regex::new(r"\[([A-Za-z0-9_:\-]+)(?:=([^\[\]]*))?\]").unwrap())
}
