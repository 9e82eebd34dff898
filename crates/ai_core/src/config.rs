//! Configuration for the language-model gateway
//!
//! The API credential is deliberately not part of this struct: it is
//! session-scoped, handed to the engine at construction time and never
//! serialized.

use serde::{Deserialize, Serialize};

/// Configuration for the Gemini gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the generateContent API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model to use
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Temperature for sampling
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

const fn default_timeout_ms() -> u64 {
    60000 // the upstream API has no bound of its own; we impose one
}

const fn default_temperature() -> f32 {
    0.4
}

const fn default_max_output_tokens() -> u32 {
    2048
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_ms: default_timeout_ms(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}
