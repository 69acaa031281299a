//! Unified error types for the domain layer

use thiserror::Error;

use crate::value_objects::GenerationStage;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The caller supplied creative inputs that cannot be compiled
    /// (missing or unknown language selector, out-of-range slider, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// State transition not allowed
    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition {
        from: GenerationStage,
        to: GenerationStage,
    },
}

impl DomainError {
    /// Creates an invalid input error.
    ///
    /// Use this when a request cannot be turned into [`crate::CreativeInputs`]:
    /// - The language selector is absent
    /// - The language selector is not one of the supported values
    /// - A tone slider is outside `0..=5`
    ///
    /// # Example
    /// ```ignore
    /// let Some(language) = payload.language else {
    ///     return Err(DomainError::invalid_input("language is required"));
    /// };
    /// ```
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(from: GenerationStage, to: GenerationStage) -> Self {
        Self::InvalidStateTransition { from, to }
    }

    /// Whether the error was caused by the caller's input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_error() {
        let err = DomainError::invalid_input("language is required");
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Invalid input: language is required");
    }

    #[test]
    fn test_invalid_state_transition_error() {
        let err = DomainError::invalid_state_transition(
            GenerationStage::Succeeded,
            GenerationStage::AwaitingProvider,
        );
        assert!(!err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Invalid state transition: succeeded -> awaiting_provider"
        );
    }
}
