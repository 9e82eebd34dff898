//! Inference port - Interface for the language-model gateway

use async_trait::async_trait;
use domain::ImageAttachment;

use crate::error::ApplicationError;

/// Result of an inference call
#[derive(Debug, Clone)]
pub struct InferenceResult {
    /// Generated response content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Latency in milliseconds
    pub latency_ms: u64,
}

/// Port for language-model operations
///
/// One synchronous call per request; no retries, no streaming, no
/// partial results.
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Generate text for an instruction
    async fn generate(&self, instruction: &str) -> Result<InferenceResult, ApplicationError>;

    /// Generate text for an instruction with an attached image
    async fn generate_with_image(
        &self,
        instruction: &str,
        image: &ImageAttachment,
    ) -> Result<InferenceResult, ApplicationError>;

    /// Check if the model backend is reachable
    async fn is_healthy(&self) -> bool;

    /// Get the name of the configured model
    fn current_model(&self) -> String;
}
