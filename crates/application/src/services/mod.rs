//! Application services

mod analysis_service;
mod contact_extractor;
pub mod prompts;
mod url_inspection;

pub use analysis_service::AnalysisService;
pub use contact_extractor::ContactExtractor;
pub use url_inspection::UrlInspectionService;
