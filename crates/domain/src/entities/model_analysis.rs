//! Output of a language-model analysis

use serde::{Deserialize, Serialize};

/// Text produced by the language-model gateway for one task
///
/// A failed gateway call still yields a `ModelAnalysis`: the failure
/// detail is embedded in `content` and `degraded` is set, so callers
/// always have something to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAnalysis {
    /// Generated text, or a user-facing error description
    pub content: String,

    /// Model that produced the text, when the call succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// True when `content` is an error description instead of analysis
    #[serde(default)]
    pub degraded: bool,
}

impl ModelAnalysis {
    /// Successful analysis text from the given model
    pub fn completed(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: Some(model.into()),
            degraded: false,
        }
    }

    /// In-band failure description shown in place of the analysis
    pub fn degraded(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: None,
            degraded: true,
        }
    }
}
