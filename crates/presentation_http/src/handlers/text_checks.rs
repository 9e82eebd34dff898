//! Text-based check handlers: fraud analysis and Japanese naturalness
//!
//! The fraud check also runs the regex contact extractor over the input,
//! so one call returns both the analysis and any contacts found.

use axum::{Json, extract::State, response::IntoResponse, response::Response};
use domain::{AnalysisTask, ContactBundle, ModelAnalysis};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, handlers::common::require_analysis, state::AppState};

/// Text check request body
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    /// Text to analyze
    pub text: String,
}

impl TextRequest {
    fn trimmed(&self) -> Result<&str, ApiError> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return Err(ApiError::BadRequest("Text cannot be empty".to_string()));
        }
        Ok(trimmed)
    }
}

/// Text fraud check response body
#[derive(Debug, Serialize)]
pub struct TextCheckResponse {
    /// Contact information found by the regex extractor
    pub contacts: ContactBundle,
    /// Model fraud analysis
    pub analysis: ModelAnalysis,
}

/// Handle a text fraud check
#[instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn check_text(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Response, ApiError> {
    let analysis_service = match require_analysis(&state) {
        Ok(service) => service,
        Err(landing) => return Ok(landing),
    };

    let text = request.trimmed()?;
    let contacts = state.contact_extractor.extract(text);
    let analysis = analysis_service
        .analyze(
            &AnalysisTask::TextFraud {
                text: text.to_string(),
            },
            None,
        )
        .await;

    Ok(Json(TextCheckResponse { contacts, analysis }).into_response())
}

/// Naturalness check response body
#[derive(Debug, Serialize)]
pub struct NaturalnessResponse {
    /// Model naturalness analysis
    pub analysis: ModelAnalysis,
}

/// Handle a Japanese naturalness check
#[instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn check_naturalness(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Response, ApiError> {
    let analysis_service = match require_analysis(&state) {
        Ok(service) => service,
        Err(landing) => return Ok(landing),
    };

    let text = request.trimmed()?;
    let analysis = analysis_service
        .analyze(
            &AnalysisTask::Naturalness {
                text: text.to_string(),
            },
            None,
        )
        .await;

    Ok(Json(NaturalnessResponse { analysis }).into_response())
}
