//! Contact information extracted from free text

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// De-duplicated contact matches from one text blob, grouped by category
///
/// Ordered sets keep the output deterministic; a category is serialized
/// only when it has at least one match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBundle {
    /// Phone numbers (domestic and international forms)
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub phone_numbers: BTreeSet<String>,

    /// Email addresses
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub email_addresses: BTreeSet<String>,

    /// Embedded http/https URLs
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub urls: BTreeSet<String>,
}

impl ContactBundle {
    /// Whether no category produced a match
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phone_numbers.is_empty() && self.email_addresses.is_empty() && self.urls.is_empty()
    }

    /// Total number of distinct matches across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.phone_numbers.len() + self.email_addresses.len() + self.urls.len()
    }
}
