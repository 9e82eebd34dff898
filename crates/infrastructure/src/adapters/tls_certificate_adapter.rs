//! TLS certificate adapter - Implements CertificatePort via a live handshake
//!
//! Connects to the host, completes a TLS handshake and reads the expiry
//! date out of the presented leaf certificate. Certificate chain validation
//! is deliberately disabled: an expired or otherwise invalid certificate
//! must still be observable, that is the whole point of the probe.

use std::time::Duration;

use application::ports::{CertificatePort, CertificateProbeError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::CertificateStatus;
use tokio::net::TcpStream;
use tracing::{debug, instrument};
use x509_parser::prelude::*;

use crate::config::ProbeConfig;

/// Probes TLS endpoints for certificate expiry
#[derive(Debug, Clone)]
pub struct TlsCertificateAdapter {
    config: ProbeConfig,
}

impl TlsCertificateAdapter {
    /// Create a new probe with the given configuration
    #[must_use]
    pub const fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    async fn handshake(&self, host: &str) -> Result<CertificateStatus, CertificateProbeError> {
        let connector = native_tls::TlsConnector::builder()
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true)
            .build()
            .map_err(|e| CertificateProbeError::HandshakeFailed(e.to_string()))?;
        let connector = tokio_native_tls::TlsConnector::from(connector);

        let stream = TcpStream::connect((host, self.config.port))
            .await
            .map_err(|e| CertificateProbeError::ConnectionRefused(e.to_string()))?;

        let tls_stream = connector
            .connect(host, stream)
            .await
            .map_err(|e| CertificateProbeError::HandshakeFailed(e.to_string()))?;

        let cert = tls_stream
            .get_ref()
            .peer_certificate()
            .map_err(|e| CertificateProbeError::ParseFailed(e.to_string()))?
            .ok_or_else(|| {
                CertificateProbeError::ParseFailed("no peer certificate presented".to_string())
            })?;

        let der = cert
            .to_der()
            .map_err(|e| CertificateProbeError::ParseFailed(e.to_string()))?;

        not_after_from_der(&der).map(|not_after| {
            let status = CertificateStatus::from_not_after(not_after, Utc::now());
            debug!(host = %host, not_after = %not_after, expired = status.is_expired(), "Certificate probed");
            status
        })
    }
}

/// Extract the expiry date from a DER-encoded certificate
fn not_after_from_der(der: &[u8]) -> Result<DateTime<Utc>, CertificateProbeError> {
    let (_, cert) = parse_x509_certificate(der)
        .map_err(|e| CertificateProbeError::ParseFailed(e.to_string()))?;

    let timestamp = cert.validity().not_after.timestamp();
    DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
        CertificateProbeError::ParseFailed(format!("expiry timestamp out of range: {timestamp}"))
    })
}

#[async_trait]
impl CertificatePort for TlsCertificateAdapter {
    #[instrument(skip(self), fields(port = self.config.port))]
    async fn probe(&self, host: &str) -> Result<CertificateStatus, CertificateProbeError> {
        let bound = Duration::from_millis(self.config.timeout_ms);
        tokio::time::timeout(bound, self.handshake(host))
            .await
            .map_err(|_| CertificateProbeError::Timeout(self.config.timeout_ms))?
    }
}
