//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{CreditError, QuotaError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Credit(#[from] CreditError),

    #[error(transparent)]
    Quota(#[from] QuotaError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    /// Shorthand for a not-found error on the named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
