//! Domain Layer - Core Entity Trait
//!
//! Every record held by the store has a unique, copyable identifier.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// A submitted draft broke a creation rule
    Validation(String),
    InvalidInput(String),
    /// The operation is not allowed in the current dialog state
    InvalidState(String),
}

impl DomainError {
    /// Message without the category prefix, as shown to the operator
    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::InvalidState(msg) => msg,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_category_prefix() {
        let err = DomainError::InvalidInput("unknown item type: gadget".to_string());
        assert_eq!(err.to_string(), "Invalid input: unknown item type: gadget");
        assert_eq!(err.message(), "unknown item type: gadget");
    }
}
