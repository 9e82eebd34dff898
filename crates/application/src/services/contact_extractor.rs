//! Contact extraction from free text
//!
//! Pulls phone numbers, email addresses and embedded URLs out of a text
//! blob with a fixed set of patterns. Matches are de-duplicated per
//! category and a category appears in the result only when it matched.

use std::sync::LazyLock;

use domain::ContactBundle;
use regex::Regex;
use tracing::{debug, instrument};

// Domestic hyphenated numbers, domestic numbers without separators, the
// +81 international form and the 090/080/070 mobile prefixes. The union
// deliberately overlaps; the set removes duplicates.
#[allow(clippy::unwrap_used)] // patterns are literals, checked by tests
static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"0\d{1,4}-\d{1,4}-\d{4}",
        r"0\d{9,10}",
        r"\+81\d{9,10}",
        r"090-\d{4}-\d{4}",
        r"080-\d{4}-\d{4}",
        r"070-\d{4}-\d{4}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

#[allow(clippy::unwrap_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Final label must be at least two letters
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

#[allow(clippy::unwrap_used)]
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+").unwrap());

/// Stateless contact extraction service
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactExtractor;

impl ContactExtractor {
    /// Create a new extractor
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Extract all contact information from `text`
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn extract(&self, text: &str) -> ContactBundle {
        let mut bundle = ContactBundle::default();

        for pattern in PHONE_PATTERNS.iter() {
            for m in pattern.find_iter(text) {
                bundle.phone_numbers.insert(m.as_str().to_string());
            }
        }

        for m in EMAIL_PATTERN.find_iter(text) {
            bundle.email_addresses.insert(m.as_str().to_string());
        }

        for m in URL_PATTERN.find_iter(text) {
            bundle.urls.insert(m.as_str().to_string());
        }

        debug!(matches = bundle.len(), "Contacts extracted");
        bundle
    }
}
