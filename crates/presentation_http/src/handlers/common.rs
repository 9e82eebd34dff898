//! Shared handler helpers

use std::sync::Arc;

use application::AnalysisService;
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use domain::Verdict;

use crate::{handlers::landing, state::AppState};

/// Credential gate for check endpoints
///
/// Without a credential every check endpoint serves the informational
/// landing payload instead of running its flow.
pub fn require_analysis(state: &AppState) -> Result<Arc<AnalysisService>, Response> {
    state
        .analysis
        .clone()
        .ok_or_else(|| Json(landing::payload(false)).into_response())
}

/// Operator-facing score line, colored by verdict band
#[must_use]
pub fn score_label(score: u8) -> String {
    match Verdict::from_score(score) {
        Verdict::Safe => format!("🟢 安全度: {score}/100"),
        Verdict::Caution => format!("🟡 安全度: {score}/100"),
        Verdict::Danger => format!("🔴 安全度: {score}/100"),
    }
}
