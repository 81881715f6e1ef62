//! pf-project: case file format, validation and evaluation.

pub mod assemble;
pub mod schema;
pub mod validate;

pub use assemble::{Assembly, CaseReport, ModelOutput, assemble, evaluate};
pub use schema::*;
pub use validate::{ValidationError, validate_case};

use pf_core::PfError;
use pf_models::ModelError;
use pf_network::NetworkError;
use pf_phase::PhaseError;
use tracing::info;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Build error: {what}")]
    Build { what: String },

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Property error: {0}")]
    Phase(#[from] PhaseError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ProjectError> for PfError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::Network(inner) => inner.into(),
            ProjectError::Phase(inner) => inner.into(),
            ProjectError::Model(inner) => inner.into(),
            other => PfError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Case> {
    let content = std::fs::read_to_string(path)?;
    let case: Case = serde_yaml::from_str(&content)?;
    validate_case(&case)?;
    info!(path = %path.display(), case = %case.name, "case loaded");
    Ok(case)
}

pub fn save_yaml(path: &std::path::Path, case: &Case) -> ProjectResult<()> {
    validate_case(case)?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Case> {
    let content = std::fs::read_to_string(path)?;
    let case: Case = serde_json::from_str(&content)?;
    validate_case(&case)?;
    info!(path = %path.display(), case = %case.name, "case loaded");
    Ok(case)
}

pub fn save_json(path: &std::path::Path, case: &Case) -> ProjectResult<()> {
    validate_case(case)?;
    let content = serde_json::to_string_pretty(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a case, choosing the format from the file extension (`.json`, else YAML).
pub fn load(path: &std::path::Path) -> ProjectResult<Case> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_conversion() {
        let err = ProjectError::Validation(ValidationError::UnsupportedVersion { version: 9 });
        let pf: PfError = err.into();
        assert!(matches!(pf, PfError::InvalidArg { .. }));

        let err = ProjectError::Model(ModelError::MissingProperty {
            key: "throat.viscosity".into(),
        });
        assert!(matches!(PfError::from(err), PfError::Invariant { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load(std::path::Path::new("/nonexistent/case.yaml")).unwrap_err();
        assert!(matches!(err, ProjectError::Io(_)));
    }
}
