//! Gemini inference adapter - Implements InferencePort using ai_core

use std::time::Instant;

use ai_core::{GeminiInferenceEngine, InferenceConfig, InferenceEngine, InferenceRequest};
use application::{
    error::ApplicationError,
    ports::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use domain::ImageAttachment;
use secrecy::SecretString;
use tracing::{debug, instrument};

/// Adapter for the Gemini generateContent API
#[derive(Debug)]
pub struct GeminiInferenceAdapter {
    engine: GeminiInferenceEngine,
}

impl GeminiInferenceAdapter {
    /// Create a new adapter; the credential stays inside the engine
    pub fn new(config: InferenceConfig, api_key: SecretString) -> Result<Self, ApplicationError> {
        let engine = GeminiInferenceEngine::new(config, api_key)
            .map_err(|e| ApplicationError::Inference(e.to_string()))?;

        Ok(Self { engine })
    }

    /// Convert ai_core error to application error
    fn map_error(e: ai_core::InferenceError) -> ApplicationError {
        match e {
            ai_core::InferenceError::ConnectionFailed(msg) => {
                ApplicationError::ExternalService(format!("Gemini connection failed: {msg}"))
            },
            ai_core::InferenceError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Inference timeout after {ms}ms"))
            },
            other => ApplicationError::Inference(other.to_string()),
        }
    }

    async fn run(&self, request: InferenceRequest) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();

        let response = self
            .engine
            .generate(request)
            .await
            .map_err(Self::map_error)?;

        #[allow(clippy::cast_possible_truncation)]
        let latency_ms = start.elapsed().as_millis() as u64;

        debug!(
            model = %response.model,
            latency_ms = latency_ms,
            "Inference completed"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            latency_ms,
        })
    }
}

#[async_trait]
impl InferencePort for GeminiInferenceAdapter {
    #[instrument(skip(self, instruction), fields(instruction_len = instruction.len()))]
    async fn generate(&self, instruction: &str) -> Result<InferenceResult, ApplicationError> {
        self.run(InferenceRequest::text(instruction)).await
    }

    #[instrument(skip(self, instruction, image), fields(mime_type = %image.mime_type))]
    async fn generate_with_image(
        &self,
        instruction: &str,
        image: &ImageAttachment,
    ) -> Result<InferenceResult, ApplicationError> {
        self.run(InferenceRequest::text(instruction).with_image(image.clone()))
            .await
    }

    async fn is_healthy(&self) -> bool {
        self.engine.health_check().await.unwrap_or(false)
    }

    fn current_model(&self) -> String {
        self.engine.default_model().to_string()
    }
}
