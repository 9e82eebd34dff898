//! Certificate port - Interface for the TLS certificate probe

use async_trait::async_trait;
use domain::CertificateStatus;
use thiserror::Error;

/// Ways the certificate probe can fail
///
/// Kept closed and specific for diagnosability; the scoring boundary
/// collapses every variant to a single "cannot confirm" outcome.
#[derive(Debug, Error)]
pub enum CertificateProbeError {
    /// Connection or handshake did not complete within the bound
    #[error("Certificate probe timed out after {0}ms")]
    Timeout(u64),

    /// TCP connection to port 443 was refused or failed
    #[error("Connection failed: {0}")]
    ConnectionRefused(String),

    /// TLS handshake failed
    #[error("TLS handshake failed: {0}")]
    HandshakeFailed(String),

    /// Peer certificate missing or its validity could not be parsed
    #[error("Certificate parse failed: {0}")]
    ParseFailed(String),
}

/// Port for retrieving a host's TLS certificate status
#[async_trait]
pub trait CertificatePort: Send + Sync {
    /// Connect to `host` on the standard TLS port and classify the peer
    /// certificate's expiry
    async fn probe(&self, host: &str) -> Result<CertificateStatus, CertificateProbeError>;
}
