//! Attributes and name validation.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{ElemError, ElemResult};
use crate::namespace::{XMLNS_NS, XML_NS};

/// A single attribute, identified by namespace and local name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    namespace: Option<String>,
    prefix: Option<String>,
    local_name: String,
    value: String,
}

impl Attr {
    pub(crate) fn new(
        namespace: Option<String>,
        prefix: Option<String>,
        local_name: String,
        value: String,
    ) -> Self {
        Self {
            namespace,
            prefix,
            local_name,
            value,
        }
    }

    pub fn namespace_uri(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// `prefix:local` or just `local`
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.local_name),
            None => self.local_name.clone(),
        }
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub(crate) fn matches(&self, namespace: Option<&str>, local_name: &str) -> bool {
        self.namespace.as_deref() == namespace && self.local_name == local_name
    }
}

/// Check a plain attribute name (colons allowed anywhere).
pub fn validate_name(name: &str) -> ElemResult<()> {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = NAME_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z_:\x{C0}-\x{10FFFF}][A-Za-z0-9_:.\-\x{B7}\x{C0}-\x{10FFFF}]*$")
            .unwrap()
    });
    if re.is_match(name) {
        Ok(())
    } else {
        Err(ElemError::InvalidCharacter {
            name: name.to_string(),
        })
    }
}

/// Validate a qualified name against a namespace and split it into
/// `(prefix, local_name)`.
pub fn validate_and_extract(
    namespace: Option<&str>,
    qualified_name: &str,
) -> ElemResult<(Option<String>, String)> {
    static QNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = QNAME_REGEX.get_or_init(|| {
        let part = r"[A-Za-z_\x{C0}-\x{10FFFF}][A-Za-z0-9_.\-\x{B7}\x{C0}-\x{10FFFF}]*";
        Regex::new(&format!("^{0}(?::{0})?$", part)).unwrap()
    });
    if !re.is_match(qualified_name) {
        return Err(ElemError::InvalidCharacter {
            name: qualified_name.to_string(),
        });
    }

    let (prefix, local) = match qualified_name.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, qualified_name),
    };

    let namespace_error = || ElemError::Namespace {
        name: qualified_name.to_string(),
        namespace: namespace.map(str::to_string),
    };

    if prefix.is_some() && namespace.is_none() {
        return Err(namespace_error());
    }
    if prefix == Some("xml") && namespace != Some(XML_NS) {
        return Err(namespace_error());
    }
    let is_xmlns = qualified_name == "xmlns" || prefix == Some("xmlns");
    if is_xmlns != (namespace == Some(XMLNS_NS)) {
        return Err(namespace_error());
    }

    Ok((prefix.map(str::to_string), local.to_string()))
}
