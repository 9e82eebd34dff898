//! Analysis tasks routed through the language-model gateway
//!
//! Each task carries its typed parameters; the instruction wording lives
//! with the prompt templates in the application layer so the task set
//! stays testable independent of phrasing.

use serde::{Deserialize, Serialize};

use super::contact_category::ContactCategory;

/// One of the model-backed analysis flows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum AnalysisTask {
    /// Judge whether a URL is likely a scam or phishing site
    UrlRisk { url: String },
    /// Judge an uploaded screenshot for fraud indicators
    ScreenshotFraud,
    /// Extract text from an uploaded image
    OcrExtract,
    /// Judge free text for fraud indicators
    TextFraud { text: String },
    /// Judge whether Japanese text reads as native or machine-translated
    Naturalness { text: String },
    /// Look up the reputation of a contact (phone, email, company, site)
    ContactLookup {
        category: ContactCategory,
        query: String,
    },
}

impl AnalysisTask {
    /// Stable identifier for logging and metrics
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UrlRisk { .. } => "url_risk",
            Self::ScreenshotFraud => "screenshot_fraud",
            Self::OcrExtract => "ocr_extract",
            Self::TextFraud { .. } => "text_fraud",
            Self::Naturalness { .. } => "naturalness",
            Self::ContactLookup { .. } => "contact_lookup",
        }
    }

    /// Whether this task requires an image attachment
    #[must_use]
    pub const fn needs_image(&self) -> bool {
        matches!(self, Self::ScreenshotFraud | Self::OcrExtract)
    }
}
