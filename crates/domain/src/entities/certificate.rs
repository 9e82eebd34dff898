//! TLS certificate status reported by the probe

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of inspecting a host's TLS certificate
///
/// Probe failures (timeout, refused connection, handshake or parse
/// errors) are not represented here; they stay in the probe's own error
/// type and are collapsed to "cannot confirm" by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CertificateStatus {
    /// Certificate retrieved and its expiry is in the future
    Valid { not_after: DateTime<Utc> },
    /// Certificate retrieved but its expiry is in the past
    Expired { not_after: DateTime<Utc> },
}

impl CertificateStatus {
    /// Classify an expiry timestamp against a reference instant
    #[must_use]
    pub fn from_not_after(not_after: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if not_after < now {
            Self::Expired { not_after }
        } else {
            Self::Valid { not_after }
        }
    }

    /// Whether the certificate has expired
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }

    /// The certificate's expiry timestamp
    #[must_use]
    pub const fn not_after(&self) -> DateTime<Utc> {
        match self {
            Self::Valid { not_after } | Self::Expired { not_after } => *not_after,
        }
    }
}
