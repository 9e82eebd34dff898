//! Ports (interfaces) implemented by infrastructure adapters

mod certificate_port;
mod inference_port;

pub use certificate_port::{CertificatePort, CertificateProbeError};
pub use inference_port::{InferencePort, InferenceResult};
