//! Workspace-wide error type that every crate error converts into.

use thiserror::Error;

pub type PfResult<T> = Result<T, PfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PfError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = PfError::Invariant {
            what: "throat 7 joins a pore to itself".into(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Invariant violated"));
        assert!(msg.contains("throat 7"));
    }
}
