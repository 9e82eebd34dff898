//! Application state shared across handlers

use std::sync::Arc;

use application::{AnalysisService, ContactExtractor, UrlInspectionService};

/// Shared application state
///
/// All services are immutable behind `Arc`; requests share nothing else.
/// `analysis` is `None` when no Gemini credential was supplied for this
/// session, which switches every check endpoint to the landing payload.
#[derive(Clone)]
pub struct AppState {
    /// Heuristic URL scorer
    pub url_inspection: Arc<UrlInspectionService>,
    /// Regex contact extractor
    pub contact_extractor: Arc<ContactExtractor>,
    /// Model-backed analysis, present only with a credential
    pub analysis: Option<Arc<AnalysisService>>,
}
