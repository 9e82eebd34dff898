//! Domain layer for scamlens
//!
//! Contains the core vocabulary of the scam-assessment domain: safety
//! assessments, contact bundles, certificate status, analysis tasks and
//! domain errors. This layer has no knowledge of HTTP, TLS sockets or
//! the language-model API.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
