//! Image attachment for multimodal model queries

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A single image attached to a model query
///
/// The payload stays base64-encoded end to end; decoding is left to the
/// gateway wire format, which wants base64 anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    /// MIME type, e.g. `image/png`
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl ImageAttachment {
    /// Create an attachment, validating the MIME type and payload shape
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Result<Self, DomainError> {
        let mime_type = mime_type.into();
        let data = data.into();

        if !mime_type.starts_with("image/") {
            return Err(DomainError::InvalidImageAttachment(format!(
                "unsupported MIME type: {mime_type}"
            )));
        }
        if data.trim().is_empty() {
            return Err(DomainError::InvalidImageAttachment(
                "empty image payload".to_string(),
            ));
        }

        Ok(Self { mime_type, data })
    }
}
