//! Integration tests for the Gemini inference engine using WireMock
//!
//! These tests mock the generateContent HTTP API to verify client behavior
//! without requiring a real Gemini credential.

use ai_core::{GeminiInferenceEngine, InferenceConfig, InferenceRequest};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

// =============================================================================
// Test Helpers
// =============================================================================

fn config_for_mock(base_url: &str) -> InferenceConfig {
    InferenceConfig {
        base_url: base_url.to_string(),
        default_model: "test-model".to_string(),
        timeout_ms: 5000,
        temperature: 0.4,
        max_output_tokens: 256,
    }
}

fn engine_for_mock(base_url: &str) -> GeminiInferenceEngine {
    GeminiInferenceEngine::new(config_for_mock(base_url), SecretString::from("test-api-key"))
        .expect("Failed to create engine")
}

/// Sample generateContent success response
fn generate_success_response() -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            {
                "content": {
                    "parts": [
                        {"text": "このURLは危険性が高いと判断されます。"}
                    ],
                    "role": "model"
                },
                "finishReason": "STOP"
            }
        ],
        "modelVersion": "test-model"
    })
}

/// Response whose candidate text is split across multiple parts
fn multi_part_response() -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            {
                "content": {
                    "parts": [
                        {"text": "前半。"},
                        {"text": "後半。"}
                    ],
                    "role": "model"
                }
            }
        ]
    })
}

/// Response with a safety block and no candidates
fn blocked_response() -> serde_json::Value {
    serde_json::json!({
        "promptFeedback": {
            "blockReason": "SAFETY"
        }
    })
}

// =============================================================================
// Generate Tests
// =============================================================================

mod generate_tests {
    use super::*;
    use ai_core::InferenceEngine;

    #[tokio::test]
    async fn generate_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/test-model:generateContent"))
            .and(header("x-goog-api-key", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(generate_success_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let engine = engine_for_mock(&mock_server.uri());
        let response = engine
            .generate(InferenceRequest::text("このURLを調査してください"))
            .await;

        assert!(response.is_ok());
        let response = response.unwrap();
        assert_eq!(response.model, "test-model");
        assert!(response.content.contains("危険性"));
    }

    #[tokio::test]
    async fn generate_concatenates_candidate_parts() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/test-model:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(multi_part_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let engine = engine_for_mock(&mock_server.uri());
        let response = engine
            .generate(InferenceRequest::text("分析してください"))
            .await
            .unwrap();

        assert_eq!(response.content, "前半。後半。");
    }

    #[tokio::test]
    async fn generate_sends_instruction_and_generation_config() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/test-model:generateContent"))
            .and(body_partial_json(serde_json::json!({
                "contents": [{"parts": [{"text": "テスト指示"}]}],
                "generationConfig": {"maxOutputTokens": 256}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(generate_success_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let engine = engine_for_mock(&mock_server.uri());
        let response = engine.generate(InferenceRequest::text("テスト指示")).await;

        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn generate_with_image_sends_inline_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/test-model:generateContent"))
            .and(body_partial_json(serde_json::json!({
                "contents": [{"parts": [
                    {"text": "画像を分析"},
                    {"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}}
                ]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(generate_success_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let image = domain::ImageAttachment::new("image/png", "aGVsbG8=").unwrap();
        let engine = engine_for_mock(&mock_server.uri());
        let response = engine
            .generate(InferenceRequest::text("画像を分析").with_image(image))
            .await;

        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn generate_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/test-model:generateContent"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let engine = engine_for_mock(&mock_server.uri());
        let response = engine.generate(InferenceRequest::text("Hello")).await;

        assert!(response.is_err());
        assert!(response.unwrap_err().to_string().contains("Rate limit"));
    }

    #[tokio::test]
    async fn generate_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/test-model:generateContent"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let engine = engine_for_mock(&mock_server.uri());
        let response = engine.generate(InferenceRequest::text("Hello")).await;

        assert!(response.is_err());
        let err = response.unwrap_err();
        assert!(err.to_string().contains("500") || err.to_string().contains("Server"));
    }

    #[tokio::test]
    async fn generate_invalid_json_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/test-model:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let engine = engine_for_mock(&mock_server.uri());
        let response = engine.generate(InferenceRequest::text("Hello")).await;

        assert!(response.is_err());
    }

    #[tokio::test]
    async fn generate_no_candidates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/test-model:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let engine = engine_for_mock(&mock_server.uri());
        let response = engine.generate(InferenceRequest::text("Hello")).await;

        assert!(response.is_err());
        assert!(response.unwrap_err().to_string().contains("Invalid response"));
    }

    #[tokio::test]
    async fn generate_prompt_blocked() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/test-model:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(blocked_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let engine = engine_for_mock(&mock_server.uri());
        let response = engine.generate(InferenceRequest::text("Hello")).await;

        assert!(response.is_err());
        assert!(response.unwrap_err().to_string().contains("SAFETY"));
    }
}

// =============================================================================
// Health Check Tests
// =============================================================================

mod health_tests {
    use super::*;
    use ai_core::InferenceEngine;

    #[tokio::test]
    async fn health_check_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .and(header("x-goog-api-key", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "models": [{"name": "models/test-model"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let engine = engine_for_mock(&mock_server.uri());
        let healthy = engine.health_check().await;

        assert!(healthy.is_ok());
        assert!(healthy.unwrap());
    }

    #[tokio::test]
    async fn health_check_bad_credential() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&mock_server)
            .await;

        let engine = engine_for_mock(&mock_server.uri());
        let healthy = engine.health_check().await;

        assert!(healthy.is_ok());
        assert!(!healthy.unwrap());
    }

    #[tokio::test]
    async fn health_check_unreachable_server() {
        // Port 9 is the discard port; nothing listens there
        let engine = engine_for_mock("http://127.0.0.1:9");
        let healthy = engine.health_check().await;

        assert!(healthy.is_ok());
        assert!(!healthy.unwrap());
    }

    #[test]
    fn default_model_getter() {
        let engine = engine_for_mock("http://localhost:1234");
        assert_eq!(engine.default_model(), "test-model");
    }
}
