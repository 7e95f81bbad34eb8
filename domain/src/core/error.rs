//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A named attribute could not be resolved on a logger handle or target.
    #[error("'{target}' has no attribute '{attribute}'")]
    AttributeResolution { target: String, attribute: String },

    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),
}

impl DomainError {
    pub fn attribute_resolution(target: impl Into<String>, attribute: impl Into<String>) -> Self {
        DomainError::AttributeResolution {
            target: target.into(),
            attribute: attribute.into(),
        }
    }

    /// Check if this error is a failed attribute lookup
    pub fn is_attribute_resolution(&self) -> bool {
        matches!(self, DomainError::AttributeResolution { .. })
    }
}
