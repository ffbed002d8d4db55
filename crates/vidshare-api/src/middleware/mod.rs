pub mod cors;
pub mod redact;

pub use cors::cors_middleware;
pub use redact::redact_error_details;
