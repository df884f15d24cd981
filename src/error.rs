use thiserror::Error;

pub type ElemResult<T> = Result<T, ElemError>;

/// Failures raised by the node model.
///
/// The element helper never produces its own errors: everything here comes
/// from node creation, attribute assignment or markup parsing and is passed
/// through to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElemError {
    #[error("Invalid character in name '{name}'")]
    InvalidCharacter { name: String },

    #[error("Name '{name}' is not allowed in namespace {}", .namespace.as_deref().unwrap_or("(none)"))]
    Namespace {
        name: String,
        namespace: Option<String>,
    },

    #[error("Hierarchy request error: {reason}")]
    HierarchyRequest { reason: String },

    #[error("Markup parse error: {0}")]
    Markup(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<roxmltree::Error> for ElemError {
    fn from(err: roxmltree::Error) -> Self {
        ElemError::Markup(err.to_string())
    }
}

impl From<serde_yaml::Error> for ElemError {
    fn from(err: serde_yaml::Error) -> Self {
        ElemError::Config(err.to_string())
    }
}
