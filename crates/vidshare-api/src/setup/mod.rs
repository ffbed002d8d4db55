//! Application setup and initialization
//!
//! Startup order: validate configuration, initialize tracing, bind storage,
//! build state and routes.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use vidshare_core::Config;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first so configuration failures are logged
    crate::telemetry::init_telemetry(&config.environment);

    // Validate configuration - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;
    tracing::info!("Configuration loaded and validated successfully");

    let storage = storage::setup_storage(&config).await?;

    let state = AppState::new(config, storage);

    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
