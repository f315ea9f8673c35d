//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, storage).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument is absent, malformed or has the wrong length
    #[error("Validation error: {0}")]
    Validation(String),

    /// A numeric argument is outside its permitted range
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// The aggregate's current status does not allow the operation
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create an out-of-range error
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        DomainError::OutOfRange(msg.into())
    }

    /// Create an invalid state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        DomainError::InvalidState(msg.into())
    }

    /// Whether the caller supplied bad input (range errors included).
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_) | DomainError::OutOfRange(_))
    }

    /// Whether the aggregate refused the operation because of its status.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, DomainError::InvalidState(_))
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_errors_count_as_validation() {
        assert!(DomainError::out_of_range("duration").is_validation());
        assert!(DomainError::validation("email").is_validation());
        assert!(!DomainError::invalid_state("cancelled").is_validation());
        assert!(DomainError::invalid_state("cancelled").is_invalid_state());
    }

    #[test]
    fn test_display_includes_kind() {
        let err = DomainError::invalid_state("cannot pay a scheduled appointment");
        assert_eq!(
            err.to_string(),
            "Invalid state: cannot pay a scheduled appointment"
        );
    }
}
