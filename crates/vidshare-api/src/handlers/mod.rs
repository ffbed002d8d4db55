pub mod config;
pub mod fallback;
pub mod health;
pub mod openapi;
pub mod upload;
pub mod videos;
