//! Model-backed analysis service
//!
//! Routes every task through the single gateway contract: build the
//! instruction, make one call, hand back whatever came out. Gateway
//! failures are converted to in-band error text here and never escape.

use std::{fmt, sync::Arc};

use domain::{AnalysisTask, ImageAttachment, ModelAnalysis};
use tracing::{debug, instrument, warn};

use crate::{
    ports::InferencePort,
    services::prompts,
};

/// Service executing analysis tasks against the language model
pub struct AnalysisService {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for AnalysisService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisService").finish_non_exhaustive()
    }
}

impl AnalysisService {
    /// Create a new analysis service
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Run one task, optionally with an image attachment
    ///
    /// Always returns a displayable [`ModelAnalysis`]; a failed call
    /// yields degraded content embedding the failure detail.
    #[instrument(skip(self, image), fields(task = task.kind(), has_image = image.is_some()))]
    pub async fn analyze(
        &self,
        task: &AnalysisTask,
        image: Option<&ImageAttachment>,
    ) -> ModelAnalysis {
        let instruction = prompts::instruction(task);

        let result = match image {
            Some(attachment) => self.inference.generate_with_image(&instruction, attachment).await,
            None => self.inference.generate(&instruction).await,
        };

        match result {
            Ok(result) => {
                debug!(model = %result.model, latency_ms = result.latency_ms, "Analysis completed");
                ModelAnalysis::completed(result.content, result.model)
            }
            Err(e) => {
                warn!(task = task.kind(), error = %e, "Analysis failed, returning degraded text");
                ModelAnalysis::degraded(format!("エラーが発生しました: {e}"))
            }
        }
    }

    /// Check if the model backend is reachable
    pub async fn is_healthy(&self) -> bool {
        self.inference.is_healthy().await
    }

    /// Name of the configured model
    pub fn current_model(&self) -> String {
        self.inference.current_model()
    }
}
