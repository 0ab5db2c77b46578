//! Domain errors for the quorum decision engine.

use thiserror::Error;

/// Domain-level errors that can occur during a decision cycle.
///
/// None of these escape `make_decision`: the engine recovers every variant
/// into a degraded decision at its outer boundary.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{role} collaborator failed: {message}")]
    CollaboratorFailed { role: &'static str, message: String },

    #[error("Coordination failed: {0}")]
    CoordinationFailed(String),
}

impl DomainError {
    /// Tag an upstream collaborator failure with its role name.
    pub fn collaborator(role: &'static str, err: &anyhow::Error) -> Self {
        Self::CollaboratorFailed {
            role,
            message: format!("{err:#}"),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaborator_error_names_role() {
        let err = DomainError::collaborator("priority", &anyhow::anyhow!("boom"));
        assert_eq!(err.to_string(), "priority collaborator failed: boom");
    }

    #[test]
    fn test_collaborator_error_includes_cause_chain() {
        let cause = anyhow::anyhow!("inner").context("outer");
        let err = DomainError::collaborator("risks", &cause);
        let text = err.to_string();
        assert!(text.contains("outer"));
        assert!(text.contains("inner"));
    }
}
