use serde::{Deserialize, Serialize};

use crate::descriptor::DEFAULT_TAG;
use crate::error::ElemResult;
use crate::namespace::XHTML_NS;

/// Settings for a [`Factory`](crate::Factory)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactoryConfig {
    /// Namespace elements are created in
    pub namespace: String,
    /// Tag used when a descriptor has none
    pub default_tag: String,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            namespace: XHTML_NS.to_string(),
            default_tag: DEFAULT_TAG.to_string(),
        }
    }
}

impl FactoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from YAML; missing keys keep their defaults
    pub fn from_yaml(yaml: &str) -> ElemResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
