//! Property store errors.

use pf_core::PfError;
use thiserror::Error;

/// Result type for property operations.
pub type PhaseResult<T> = Result<T, PhaseError>;

/// Errors that can occur while storing or resolving properties.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhaseError {
    /// Key lacks a `pore.` or `throat.` prefix, or has an empty name.
    #[error("Malformed property key '{key}' (expected 'pore.<name>' or 'throat.<name>')")]
    BadKey { key: String },

    /// A field's length disagrees with the entity count it is keyed by.
    #[error("Shape mismatch for '{key}': expected {expected} values, got {actual}")]
    ShapeMismatch {
        key: String,
        expected: usize,
        actual: usize,
    },

    /// Property is not present in the store.
    #[error("Property '{key}' not found")]
    NotFound { key: String },

    /// Fallback key must live in the other domain.
    #[error("Fallback for '{key}' must be in the other domain, got '{fallback}'")]
    SameDomainFallback { key: String, fallback: String },
}

impl From<PhaseError> for PfError {
    fn from(err: PhaseError) -> Self {
        match err {
            PhaseError::BadKey { .. } | PhaseError::SameDomainFallback { .. } => {
                PfError::InvalidArg {
                    what: err.to_string(),
                }
            }
            PhaseError::ShapeMismatch { .. } | PhaseError::NotFound { .. } => PfError::Invariant {
                what: err.to_string(),
            },
        }
    }
}
