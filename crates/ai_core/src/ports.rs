//! Port definitions for the language-model gateway

use async_trait::async_trait;
use domain::ImageAttachment;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// Request for a single model call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Natural-language instruction
    pub instruction: String,
    /// Optional attached image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAttachment>,
}

impl InferenceRequest {
    /// Create a text-only request
    pub fn text(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            image: None,
        }
    }

    /// Attach an image to this request
    #[must_use]
    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }
}

/// Response from a model call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceResponse {
    /// Generated content, verbatim
    pub content: String,
    /// Model that generated the response
    pub model: String,
}

/// Port for language-model gateway implementations
#[async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Make exactly one model call; all-or-nothing
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError>;

    /// Check if the model API is reachable with the configured credential
    async fn health_check(&self) -> Result<bool, InferenceError>;

    /// Get the configured model name
    fn default_model(&self) -> &str;
}
