//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `probe`: TLS certificate probe settings
//!
//! The Gemini credential is loaded from the environment only, lives in
//! memory as a [`SecretString`] for the lifetime of the process, and is
//! never serialized or persisted.

mod probe;
mod server;

use std::fmt;

use ai_core::InferenceConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use probe::ProbeConfig;
pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Environment variable holding the Gemini credential
pub const API_KEY_ENV: &str = "SCAMLENS_GEMINI_API_KEY";

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - relaxed security warnings
    #[default]
    Development,
    /// Production environment - strict security validation
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Top-level application configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini gateway configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// TLS certificate probe configuration
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Gemini API credential (sensitive - environment only, never written)
    #[serde(default, skip_serializing)]
    pub gemini_api_key: Option<SecretString>,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("environment", &self.environment)
            .field("server", &self.server)
            .field("inference", &self.inference)
            .field("probe", &self.probe)
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            inference: InferenceConfig::default(),
            probe: ProbeConfig::default(),
            gemini_api_key: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Sources, later overriding earlier:
    /// 1. Built-in defaults
    /// 2. `config.toml` in the working directory, if present
    /// 3. `SCAMLENS_*` environment variables (e.g. `SCAMLENS_SERVER_PORT`)
    ///
    /// The credential is read from [`API_KEY_ENV`] afterwards so it can
    /// never land in a config file.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("SCAMLENS")
                    .separator("_")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.gemini_api_key = read_api_key_from_env();
        Ok(config)
    }

    /// Whether a Gemini credential is available for this session
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

fn read_api_key_from_env() -> Option<SecretString> {
    match std::env::var(API_KEY_ENV) {
        Ok(value) if !value.trim().is_empty() => {
            debug!("Loaded Gemini credential from environment");
            Some(SecretString::from(value))
        },
        _ => None,
    }
}
