//! HTTP presentation layer
//!
//! Exposes the check flows over a small JSON API plus the informational
//! landing view. Route and handler structure follows the layered
//! architecture: handlers translate between HTTP and application services.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, set_expose_internal_errors};
pub use routes::create_router;
pub use state::AppState;
