//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub inference: ServiceStatus,
}

/// Status of the model backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub configured: bool,
    pub healthy: bool,
    pub model: Option<String>,
}

/// Readiness check - is the server ready to accept requests?
///
/// Without a credential the server is still ready: it serves the landing
/// payload and the heuristic never needs the model backend.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let (configured, healthy, model) = match &state.analysis {
        Some(analysis) => {
            let healthy = analysis.is_healthy().await;
            let model = healthy.then(|| analysis.current_model());
            (true, healthy, model)
        },
        None => (false, false, None),
    };

    let ready = !configured || healthy;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            inference: ServiceStatus {
                configured,
                healthy,
                model,
            },
        }),
    )
}
