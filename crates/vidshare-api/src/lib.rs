//! vidshare API library
//!
//! This crate provides the HTTP handlers, middleware, and application setup.

// Module declarations
mod api_doc;
mod handlers;
mod middleware;
mod validation;

// Public modules
pub mod error;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use api_doc::get_openapi_spec;
pub use error::HttpAppError;
