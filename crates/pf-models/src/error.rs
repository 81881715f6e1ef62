//! Error types for conduit model evaluation.

use pf_core::ThroatId;
use pf_core::error::PfError;
use pf_network::NetworkError;
use pf_phase::PhaseError;
use thiserror::Error;

/// Errors that can occur while evaluating or registering models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Required property '{key}' is not available (neither native nor interpolated)")]
    MissingProperty { key: String },

    #[error("Shape mismatch for {what}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("Phase '{phase}' and geometry '{geometry}' belong to different networks")]
    NetworkMismatch { phase: String, geometry: String },

    #[error("Throat {throat} is not covered by geometry '{geometry}'")]
    UncoveredThroat { throat: ThroatId, geometry: String },

    #[error("No model registered under '{propname}'")]
    UnknownModel { propname: String },

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Property error: {0}")]
    Phase(PhaseError),
}

pub type ModelResult<T> = Result<T, ModelError>;

impl From<PhaseError> for ModelError {
    fn from(e: PhaseError) -> Self {
        match e {
            PhaseError::ShapeMismatch {
                key,
                expected,
                actual,
            } => ModelError::ShapeMismatch {
                what: key,
                expected,
                actual,
            },
            other => ModelError::Phase(other),
        }
    }
}

impl From<ModelError> for PfError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Network(inner) => inner.into(),
            ModelError::Phase(inner) => inner.into(),
            ModelError::UnknownModel { .. } => PfError::InvalidArg {
                what: e.to_string(),
            },
            ModelError::MissingProperty { .. }
            | ModelError::ShapeMismatch { .. }
            | ModelError::NetworkMismatch { .. }
            | ModelError::UncoveredThroat { .. } => PfError::Invariant {
                what: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ModelError::MissingProperty {
            key: "throat.viscosity".into(),
        };
        assert!(err.to_string().contains("throat.viscosity"));
    }

    #[test]
    fn phase_shape_mismatch_is_lifted() {
        let err: ModelError = PhaseError::ShapeMismatch {
            key: "pore.viscosity".into(),
            expected: 3,
            actual: 2,
        }
        .into();
        assert!(matches!(err, ModelError::ShapeMismatch { expected: 3, .. }));
    }

    #[test]
    fn error_conversion() {
        let err = ModelError::UnknownModel {
            propname: "throat.g".into(),
        };
        let pf: PfError = err.into();
        assert!(matches!(pf, PfError::InvalidArg { .. }));

        let err = ModelError::UncoveredThroat {
            throat: ThroatId::from_index(4),
            geometry: "left".into(),
        };
        assert!(err.to_string().contains("'left'"));
        assert!(matches!(PfError::from(err), PfError::Invariant { .. }));
    }
}
