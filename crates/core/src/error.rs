//! Domain error model.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures raised by the building blocks
/// themselves. Callers decide whether to retry, aggregate or report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier string was not a well-formed UUID.
    #[error("ID must be a valid UUID")]
    InvalidUuid,

    /// A value failed a validation rule.
    ///
    /// Displays exactly the rule message so it can be surfaced unmodified.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::new(msg))
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// The rule message if this is a validation failure.
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            DomainError::Validation(err) => Some(err.message()),
            _ => None,
        }
    }
}
