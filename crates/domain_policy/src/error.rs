//! Policy domain errors
//!
//! This module defines all error types that can occur within the
//! policy records domain.

use core_kernel::{PolicyId, PortError};
use thiserror::Error;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A required field is missing or blank, or an amount is out of range
    #[error("Validation error: {0}")]
    Validation(String),

    /// No record exists with the given id
    #[error("Insurance policy not found with id: {0}")]
    NotFound(PolicyId),

    /// Another record already uses the policy number
    #[error("Duplicate policy number: {0}")]
    DuplicatePolicyNumber(String),

    /// The persistence layer failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PolicyError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PolicyError::Validation(message.into())
    }

    /// Checks if this error indicates a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(self, PolicyError::NotFound(_))
    }

    /// Checks if this error is a uniqueness constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, PolicyError::DuplicatePolicyNumber(_))
    }
}

impl From<PortError> for PolicyError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::Conflict { message } => PolicyError::DuplicatePolicyNumber(message),
            PortError::Validation { message, .. } => PolicyError::Validation(message),
            other => PolicyError::Storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_becomes_constraint_violation() {
        let err: PolicyError = PortError::conflict("P-100").into();
        assert!(err.is_constraint_violation());
        assert!(err.to_string().contains("P-100"));
    }

    #[test]
    fn test_connection_failure_becomes_storage() {
        let err: PolicyError = PortError::connection("pool timed out").into();
        assert!(matches!(err, PolicyError::Storage(_)));
    }

    #[test]
    fn test_not_found_message_names_id() {
        let err = PolicyError::NotFound(PolicyId::new(7));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Insurance policy not found with id: 7");
    }
}
