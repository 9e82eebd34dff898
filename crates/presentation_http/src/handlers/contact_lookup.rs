//! Contact reputation lookup handler
//!
//! Asks the model about a phone number, email address, company name or
//! website. The response always carries the advisory disclaimer: the
//! lookup is a starting point, not a verdict.

use axum::{Json, extract::State, response::IntoResponse, response::Response};
use domain::{AnalysisTask, ContactCategory, ModelAnalysis};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, handlers::common::require_analysis, state::AppState};

const DISCLAIMER: &str =
    "⚠️ この結果は参考情報です。最終的な判断は必ず複数の情報源で確認してください。";

/// Contact lookup request body
#[derive(Debug, Deserialize)]
pub struct ContactLookupRequest {
    /// Category: phone, email, company or website
    pub category: String,
    /// The contact to look up
    pub query: String,
}

/// Contact lookup response body
#[derive(Debug, Serialize)]
pub struct ContactLookupResponse {
    /// Parsed category
    pub category: ContactCategory,
    /// Japanese label for the category
    pub category_label: String,
    /// The contact that was looked up
    pub query: String,
    /// Model reputation analysis
    pub analysis: ModelAnalysis,
    /// Advisory disclaimer, always present
    pub disclaimer: String,
}

/// Handle a contact reputation lookup
#[instrument(skip(state, request), fields(category = %request.category))]
pub async fn lookup_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactLookupRequest>,
) -> Result<Response, ApiError> {
    let analysis_service = match require_analysis(&state) {
        Ok(service) => service,
        Err(landing) => return Ok(landing),
    };

    let category: ContactCategory = request
        .category
        .parse()
        .map_err(|e: domain::DomainError| ApiError::BadRequest(e.to_string()))?;

    let query = request.query.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest("Query cannot be empty".to_string()));
    }

    let analysis = analysis_service
        .analyze(
            &AnalysisTask::ContactLookup {
                category,
                query: query.to_string(),
            },
            None,
        )
        .await;

    Ok(Json(ContactLookupResponse {
        category,
        category_label: category.label_ja().to_string(),
        query: query.to_string(),
        analysis,
        disclaimer: DISCLAIMER.to_string(),
    })
    .into_response())
}
