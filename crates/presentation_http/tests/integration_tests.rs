//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{
    AnalysisService, ContactExtractor, UrlInspectionService,
    error::ApplicationError,
    ports::{CertificatePort, CertificateProbeError, InferencePort, InferenceResult},
};
use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use domain::CertificateStatus;
use presentation_http::{routes::create_router, state::AppState};
use serde_json::json;

/// Mock inference backend for testing
struct MockInference {
    response: String,
    healthy: bool,
    model: String,
}

impl MockInference {
    fn new() -> Self {
        Self {
            response: "模擬分析結果".to_string(),
            healthy: true,
            model: "mock-model".to_string(),
        }
    }

    fn unhealthy() -> Self {
        Self {
            response: String::new(),
            healthy: false,
            model: "mock-model".to_string(),
        }
    }

    fn failing() -> Self {
        Self {
            response: String::new(),
            healthy: true,
            model: "mock-model".to_string(),
        }
    }
}

#[async_trait]
impl InferencePort for MockInference {
    async fn generate(&self, _instruction: &str) -> Result<InferenceResult, ApplicationError> {
        if self.response.is_empty() {
            return Err(ApplicationError::ExternalService(
                "backend unavailable".to_string(),
            ));
        }
        Ok(InferenceResult {
            content: self.response.clone(),
            model: self.model.clone(),
            latency_ms: 100,
        })
    }

    async fn generate_with_image(
        &self,
        instruction: &str,
        _image: &domain::ImageAttachment,
    ) -> Result<InferenceResult, ApplicationError> {
        self.generate(instruction).await
    }

    async fn is_healthy(&self) -> bool {
        self.healthy
    }

    fn current_model(&self) -> String {
        self.model.clone()
    }
}

/// Mock certificate probe returning a valid certificate
struct MockCertificateProbe;

#[async_trait]
impl CertificatePort for MockCertificateProbe {
    async fn probe(&self, _host: &str) -> Result<CertificateStatus, CertificateProbeError> {
        Ok(CertificateStatus::from_not_after(
            Utc::now() + Duration::days(90),
            Utc::now(),
        ))
    }
}

fn state_with_inference(inference: MockInference) -> AppState {
    let port: Arc<dyn InferencePort> = Arc::new(inference);
    let probe: Arc<dyn CertificatePort> = Arc::new(MockCertificateProbe);
    AppState {
        url_inspection: Arc::new(UrlInspectionService::new(probe)),
        contact_extractor: Arc::new(ContactExtractor::new()),
        analysis: Some(Arc::new(AnalysisService::new(port))),
    }
}

fn state_without_credential() -> AppState {
    let probe: Arc<dyn CertificatePort> = Arc::new(MockCertificateProbe);
    AppState {
        url_inspection: Arc::new(UrlInspectionService::new(probe)),
        contact_extractor: Arc::new(ContactExtractor::new()),
        analysis: None,
    }
}

fn create_test_server() -> TestServer {
    TestServer::new(create_router(state_with_inference(MockInference::new())))
        .expect("Failed to create test server")
}

// ============ Landing & Health Endpoint Tests ============

#[tokio::test]
async fn landing_endpoint_lists_features() {
    let server = create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["credential_configured"], true);
    assert_eq!(body["features"].as_array().expect("features").len(), 5);
    assert_eq!(body["advisory"]["hotlines"][0]["contact"], "188");
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn readiness_endpoint_returns_ready_when_healthy() {
    let server = create_test_server();

    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["inference"]["healthy"], true);
    assert_eq!(body["inference"]["model"], "mock-model");
}

#[tokio::test]
async fn readiness_endpoint_returns_unavailable_when_unhealthy() {
    let state = state_with_inference(MockInference::unhealthy());
    let server = TestServer::new(create_router(state)).expect("Failed to create test server");

    let response = server.get("/ready").await;

    response.assert_status_service_unavailable();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], false);
}

#[tokio::test]
async fn readiness_without_credential_is_still_ready() {
    let server =
        TestServer::new(create_router(state_without_credential())).expect("test server");

    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["inference"]["configured"], false);
}

// ============ URL Check Tests ============

#[tokio::test]
async fn url_check_clean_https_scores_full() {
    let server = create_test_server();

    let response = server
        .post("/v1/checks/url")
        .json(&json!({"url": "https://example.com"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["score"], 100);
    assert_eq!(body["verdict"], "safe");
    assert!(body["warnings"].as_array().expect("warnings").is_empty());
    assert_eq!(body["analysis"]["content"], "模擬分析結果");
}

#[tokio::test]
async fn url_check_http_is_penalized() {
    let server = create_test_server();

    let response = server
        .post("/v1/checks/url")
        .json(&json!({"url": "http://example.com"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["score"], 80);
    assert_eq!(body["verdict"], "safe");
    let warnings = body["warnings"].as_array().expect("warnings");
    assert!(warnings.iter().any(|w| {
        w.as_str().is_some_and(|s| s.contains("HTTPSではありません"))
    }));
}

#[tokio::test]
async fn url_check_empty_input_scores_zero_without_analysis() {
    let server = create_test_server();

    let response = server
        .post("/v1/checks/url")
        .json(&json!({"url": ""}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["score"], 0);
    assert_eq!(body["verdict"], "danger");
    assert!(body.get("analysis").is_none());
}

#[tokio::test]
async fn url_check_degrades_when_model_fails() {
    let state = state_with_inference(MockInference::failing());
    let server = TestServer::new(create_router(state)).expect("test server");

    let response = server
        .post("/v1/checks/url")
        .json(&json!({"url": "https://example.com"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["score"], 100);
    assert_eq!(body["analysis"]["degraded"], true);
    assert!(body["analysis"]["content"]
        .as_str()
        .expect("content")
        .contains("エラーが発生しました"));
}

// ============ Image Check Tests ============

#[tokio::test]
async fn screenshot_check_returns_analysis() {
    let server = create_test_server();

    let response = server
        .post("/v1/checks/screenshot")
        .json(&json!({"mime_type": "image/png", "data": "aGVsbG8="}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["analysis"]["content"], "模擬分析結果");
    assert_eq!(body["analysis"]["degraded"], false);
}

#[tokio::test]
async fn screenshot_check_rejects_non_image() {
    let server = create_test_server();

    let response = server
        .post("/v1/checks/screenshot")
        .json(&json!({"mime_type": "application/pdf", "data": "aGVsbG8="}))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn ocr_returns_extracted_text() {
    let server = create_test_server();

    let response = server
        .post("/v1/checks/ocr")
        .json(&json!({"mime_type": "image/jpeg", "data": "aGVsbG8="}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["text"], "模擬分析結果");
    assert_eq!(body["degraded"], false);
}

// ============ Text Check Tests ============

#[tokio::test]
async fn text_check_extracts_contacts_and_analyzes() {
    let server = create_test_server();

    let response = server
        .post("/v1/checks/text")
        .json(&json!({
            "text": "至急090-1234-5678に電話するか、support@example.com に連絡してください"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["contacts"]["phone_numbers"][0], "090-1234-5678");
    assert_eq!(body["contacts"]["email_addresses"][0], "support@example.com");
    assert_eq!(body["analysis"]["content"], "模擬分析結果");
}

#[tokio::test]
async fn text_check_rejects_empty_text() {
    let server = create_test_server();

    let response = server
        .post("/v1/checks/text")
        .json(&json!({"text": "   "}))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn naturalness_check_returns_analysis() {
    let server = create_test_server();

    let response = server
        .post("/v1/checks/naturalness")
        .json(&json!({"text": "お客様の口座が凍結されるでしょう"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["analysis"]["content"], "模擬分析結果");
}

// ============ Contact Lookup Tests ============

#[tokio::test]
async fn contact_lookup_carries_disclaimer() {
    let server = create_test_server();

    let response = server
        .post("/v1/checks/contact")
        .json(&json!({"category": "phone", "query": "090-1234-5678"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["category"], "phone");
    assert_eq!(body["category_label"], "電話番号");
    assert!(body["disclaimer"]
        .as_str()
        .expect("disclaimer")
        .contains("参考情報"));
}

#[tokio::test]
async fn contact_lookup_rejects_unknown_category() {
    let server = create_test_server();

    let response = server
        .post("/v1/checks/contact")
        .json(&json!({"category": "fax", "query": "03-1234-5678"}))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn contact_lookup_rejects_empty_query() {
    let server = create_test_server();

    let response = server
        .post("/v1/checks/contact")
        .json(&json!({"category": "email", "query": ""}))
        .await;

    response.assert_status_bad_request();
}

// ============ Credential Gating Tests ============

#[tokio::test]
async fn check_endpoints_serve_landing_without_credential() {
    let server =
        TestServer::new(create_router(state_without_credential())).expect("test server");

    let response = server
        .post("/v1/checks/url")
        .json(&json!({"url": "https://example.com"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["credential_configured"], false);
    assert!(body["credential_notice"].is_string());
    assert!(body.get("score").is_none());
}

#[tokio::test]
async fn landing_reports_missing_credential() {
    let server =
        TestServer::new(create_router(state_without_credential())).expect("test server");

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["credential_configured"], false);
}
