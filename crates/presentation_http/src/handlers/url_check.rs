//! URL check handler
//!
//! Runs the heuristic scorer first, then the model's URL-risk analysis.
//! The heuristic never fails; an empty URL yields a zero score with a
//! single warning and the model call is skipped.

use axum::{Json, extract::State, response::IntoResponse, response::Response};
use domain::{AnalysisTask, ModelAnalysis, Verdict};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::ApiError,
    handlers::common::{require_analysis, score_label},
    state::AppState,
};

/// URL check request body
#[derive(Debug, Deserialize)]
pub struct UrlCheckRequest {
    /// URL to assess
    pub url: String,
}

/// URL check response body
#[derive(Debug, Serialize)]
pub struct UrlCheckResponse {
    /// Heuristic score, 0-100
    pub score: u8,
    /// Score band
    pub verdict: Verdict,
    /// Display line for the score
    pub score_label: String,
    /// Detected problems, in check order
    pub warnings: Vec<String>,
    /// Present when the heuristic found nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Model analysis, skipped for un-analyzable input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ModelAnalysis>,
}

/// Handle a URL check
#[instrument(skip(state, request), fields(url_len = request.url.len()))]
pub async fn check_url(
    State(state): State<AppState>,
    Json(request): Json<UrlCheckRequest>,
) -> Result<Response, ApiError> {
    let analysis_service = match require_analysis(&state) {
        Ok(service) => service,
        Err(landing) => return Ok(landing),
    };

    let assessment = state.url_inspection.inspect(&request.url).await;

    let analysis = if request.url.trim().is_empty() {
        None
    } else {
        let task = AnalysisTask::UrlRisk {
            url: request.url.trim().to_string(),
        };
        Some(analysis_service.analyze(&task, None).await)
    };

    let score = assessment.score;
    let warnings = assessment.warnings;
    let note = warnings
        .is_empty()
        .then(|| "✅ 基本的なチェックで問題は検出されませんでした".to_string());

    Ok(Json(UrlCheckResponse {
        score,
        verdict: Verdict::from_score(score),
        score_label: score_label(score),
        warnings,
        note,
        analysis,
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes() {
        let request: UrlCheckRequest = serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();
        assert_eq!(request.url, "https://example.com");
    }

    #[test]
    fn clean_response_carries_note_instead_of_warnings() {
        let response = UrlCheckResponse {
            score: 100,
            verdict: Verdict::Safe,
            score_label: score_label(100),
            warnings: Vec::new(),
            note: Some("✅ 基本的なチェックで問題は検出されませんでした".to_string()),
            analysis: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["verdict"], "safe");
        assert!(json["warnings"].as_array().unwrap().is_empty());
        assert!(json["note"].as_str().unwrap().starts_with('✅'));
        assert!(json.get("analysis").is_none());
    }

    #[test]
    fn degraded_analysis_serializes_flag() {
        let response = UrlCheckResponse {
            score: 35,
            verdict: Verdict::from_score(35),
            score_label: score_label(35),
            warnings: vec!["⚠️ 無効なURL形式".to_string()],
            note: None,
            analysis: Some(ModelAnalysis::degraded("エラーが発生しました: timeout")),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["verdict"], "danger");
        assert_eq!(json["analysis"]["degraded"], true);
    }
}
