//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input text or URL failed validation
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Unknown contact-lookup category
    #[error("Unknown contact category: {0}")]
    UnknownContactCategory(String),

    /// Image attachment is not usable (bad encoding or unsupported type)
    #[error("Invalid image attachment: {0}")]
    InvalidImageAttachment(String),
}
