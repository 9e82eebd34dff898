//! Domain entities

mod certificate;
mod contact_bundle;
mod model_analysis;
mod safety_assessment;

pub use certificate::CertificateStatus;
pub use contact_bundle::ContactBundle;
pub use model_analysis::ModelAnalysis;
pub use safety_assessment::{SafetyAssessment, Verdict};
