//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the Gemini inference
//! adapter and the TLS certificate probe. Also owns application
//! configuration loading.

pub mod adapters;
pub mod config;

pub use adapters::{GeminiInferenceAdapter, TlsCertificateAdapter};
pub use config::{AppConfig, Environment, ProbeConfig, ServerConfig};
