//! Heuristic URL safety checks
//!
//! Scores a URL by applying independent deductions for shape problems,
//! suspicious host patterns and certificate findings. The score is
//! advisory; callers forward the URL to the language model for an
//! independent judgment regardless of the outcome here.

use std::sync::{Arc, LazyLock};

use domain::{CertificateStatus, SafetyAssessment};
use regex::Regex;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::ports::CertificatePort;

/// Deduction for a URL with missing scheme or host
const MALFORMED_PENALTY: u8 = 30;
/// Deduction for a non-https scheme
const INSECURE_SCHEME_PENALTY: u8 = 20;
/// Deduction for a suspicious host pattern (applied at most once)
const SUSPICIOUS_HOST_PENALTY: u8 = 25;
/// Deduction when the certificate cannot be confirmed
const UNCONFIRMED_CERT_PENALTY: u8 = 15;
/// Deduction for an expired certificate
const EXPIRED_CERT_PENALTY: u8 = 40;

// Host shapes common in phishing campaigns: raw IP addresses, chains of
// hyphenated labels and long digit runs.
#[allow(clippy::unwrap_used)] // patterns are literals, checked by tests
static SUSPICIOUS_HOST_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+",
        r"[a-z0-9]+-[a-z0-9]+-[a-z0-9]+\.",
        r"[0-9]{8,}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Scheme and host recovered from the input, with empty strings standing
/// in for whatever could not be parsed
#[derive(Debug)]
struct UrlShape {
    scheme: String,
    host: String,
}

fn parse_shape(url: &str) -> UrlShape {
    match Url::parse(url) {
        Ok(parsed) => UrlShape {
            scheme: parsed.scheme().to_string(),
            host: parsed.host_str().unwrap_or_default().to_string(),
        },
        // Unparseable input still gets the remaining checks, run against
        // empty components
        Err(_) => UrlShape {
            scheme: String::new(),
            host: String::new(),
        },
    }
}

/// Service running the heuristic URL checks
pub struct UrlInspectionService {
    certificates: Arc<dyn CertificatePort>,
}

impl std::fmt::Debug for UrlInspectionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlInspectionService").finish_non_exhaustive()
    }
}

impl UrlInspectionService {
    /// Create a new inspection service backed by the given probe
    pub fn new(certificates: Arc<dyn CertificatePort>) -> Self {
        Self { certificates }
    }

    /// Run every check against a URL and return the assessment
    ///
    /// Never fails: probe errors degrade the score, and an input that
    /// cannot be evaluated at all yields a zero score with a single
    /// generic warning.
    #[instrument(skip(self))]
    pub async fn inspect(&self, url: &str) -> SafetyAssessment {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return SafetyAssessment::failed("❌ URLチェックエラー: URLが空です");
        }

        let shape = parse_shape(trimmed);
        let mut assessment = SafetyAssessment::new();

        if shape.scheme.is_empty() || shape.host.is_empty() {
            assessment.deduct(MALFORMED_PENALTY, "⚠️ 無効なURL形式");
        }

        if shape.scheme != "https" {
            assessment.deduct(INSECURE_SCHEME_PENALTY, "⚠️ HTTPSではありません");
        }

        // First matching pattern only; the sub-patterns overlap and a
        // host should not be punished twice for the same shape
        if SUSPICIOUS_HOST_PATTERNS.iter().any(|p| p.is_match(&shape.host)) {
            assessment.deduct(
                SUSPICIOUS_HOST_PENALTY,
                format!("⚠️ 疑わしいドメイン形式: {}", shape.host),
            );
        }

        self.check_certificate(&shape.host, &mut assessment).await;

        debug!(score = assessment.score, warnings = assessment.warnings.len(), "URL inspected");
        assessment
    }

    /// Fold the certificate probe result into the assessment
    ///
    /// Every probe failure collapses to the same "cannot confirm"
    /// deduction here; the probe's own error enum stays internal.
    async fn check_certificate(&self, host: &str, assessment: &mut SafetyAssessment) {
        if host.is_empty() {
            assessment.deduct(UNCONFIRMED_CERT_PENALTY, "⚠️ SSL証明書の確認ができません");
            return;
        }

        match self.certificates.probe(host).await {
            Ok(CertificateStatus::Valid { .. }) => {}
            Ok(CertificateStatus::Expired { .. }) => {
                assessment.deduct(EXPIRED_CERT_PENALTY, "⚠️ SSL証明書が期限切れ");
            }
            Err(e) => {
                warn!(host = %host, error = %e, "Certificate probe failed");
                assessment.deduct(UNCONFIRMED_CERT_PENALTY, "⚠️ SSL証明書の確認ができません");
            }
        }
    }
}
