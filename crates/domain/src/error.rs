//! Domain error types.

use thiserror::Error;

/// Errors raised while interpreting domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A string did not name any variant of a closed vocabulary.
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl DomainError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        DomainError::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}
