//! Image-based check handlers: screenshot fraud analysis and OCR
//!
//! Both take a base64-encoded image in the JSON body. The OCR flow only
//! extracts text; the client feeds it into the text check if wanted.

use axum::{Json, extract::State, response::IntoResponse, response::Response};
use domain::{AnalysisTask, ImageAttachment, ModelAnalysis};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, handlers::common::require_analysis, state::AppState};

/// Image upload request body
#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    /// Image MIME type, e.g. `image/png`
    pub mime_type: String,
    /// Base64-encoded image data
    pub data: String,
}

impl ImageRequest {
    fn into_attachment(self) -> Result<ImageAttachment, ApiError> {
        ImageAttachment::new(self.mime_type, self.data)
            .map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

/// Screenshot analysis response body
#[derive(Debug, Serialize)]
pub struct ScreenshotResponse {
    /// Model fraud analysis of the image
    pub analysis: ModelAnalysis,
}

/// Handle a screenshot fraud analysis
#[instrument(skip(state, request), fields(mime_type = %request.mime_type, data_len = request.data.len()))]
pub async fn check_screenshot(
    State(state): State<AppState>,
    Json(request): Json<ImageRequest>,
) -> Result<Response, ApiError> {
    let analysis_service = match require_analysis(&state) {
        Ok(service) => service,
        Err(landing) => return Ok(landing),
    };

    let attachment = request.into_attachment()?;
    let analysis = analysis_service
        .analyze(&AnalysisTask::ScreenshotFraud, Some(&attachment))
        .await;

    Ok(Json(ScreenshotResponse { analysis }).into_response())
}

/// OCR response body
#[derive(Debug, Serialize)]
pub struct OcrResponse {
    /// Extracted text, verbatim from the model
    pub text: String,
    /// Model that extracted it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// True when extraction failed and `text` carries the failure note
    pub degraded: bool,
}

/// Handle an OCR text extraction
#[instrument(skip(state, request), fields(mime_type = %request.mime_type, data_len = request.data.len()))]
pub async fn extract_text(
    State(state): State<AppState>,
    Json(request): Json<ImageRequest>,
) -> Result<Response, ApiError> {
    let analysis_service = match require_analysis(&state) {
        Ok(service) => service,
        Err(landing) => return Ok(landing),
    };

    let attachment = request.into_attachment()?;
    let analysis = analysis_service
        .analyze(&AnalysisTask::OcrExtract, Some(&attachment))
        .await;

    Ok(Json(OcrResponse {
        text: analysis.content,
        model: analysis.model,
        degraded: analysis.degraded,
    })
    .into_response())
}
