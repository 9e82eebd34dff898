//! Application layer for scamlens
//!
//! Orchestrates the heuristic checks and the language-model gateway
//! behind ports, hexagonal style: the services here know nothing about
//! HTTP, sockets or the Gemini wire format.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{AnalysisService, ContactExtractor, UrlInspectionService};
