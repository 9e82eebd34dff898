//! AI Core - Language-model gateway
//!
//! Wraps the Gemini generateContent API behind the [`InferenceEngine`]
//! trait: one instruction (plus an optional image) in, generated text or
//! an error out. No retries, no streaming.

pub mod config;
pub mod error;
pub mod gemini;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use gemini::GeminiInferenceEngine;
pub use ports::{InferenceEngine, InferenceRequest, InferenceResponse};
