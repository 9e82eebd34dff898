//! Adapters implementing application-layer ports

mod gemini_inference_adapter;
mod tls_certificate_adapter;

pub use gemini_inference_adapter::GeminiInferenceAdapter;
pub use tls_certificate_adapter::TlsCertificateAdapter;
