//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p vidshare-api`.

#![allow(dead_code)]

pub mod fixtures;
pub mod storage;

use axum_test::{TestServer, TestServerConfig, Transport};
use std::sync::Arc;
use tempfile::TempDir;
use vidshare_api::setup::routes;
use vidshare_api::state::AppState;
use vidshare_core::{Config, StorageBackend};
use vidshare_storage::{MemoryStorage, Storage};

pub const PUBLIC_BASE_URL: &str = "https://pub-test.r2.dev";
pub const INDEX_HTML: &str = "<!doctype html><title>vidshare</title>";

/// Test application: server plus the resources it owns.
pub struct TestApp {
    pub server: TestServer,
    /// Present when the app runs over the in-memory backend
    pub memory: Option<Arc<MemoryStorage>>,
    pub _static_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Number of objects written to the in-memory backend
    pub async fn stored_objects(&self) -> usize {
        match &self.memory {
            Some(memory) => memory.len().await,
            None => 0,
        }
    }
}

/// Base configuration for tests with a temporary static directory.
pub fn test_config(static_dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.static_dir = static_dir.path().display().to_string();
    config
}

fn static_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index.html");
    dir
}

fn build(config: Config, storage: Option<Arc<dyn Storage>>) -> TestServer {
    let state = AppState::new(config, storage);
    let app = routes::setup_routes(state);
    // Real HTTP transport, matching how clients reach the server
    let server_config = TestServerConfig {
        transport: Some(Transport::HttpRandomPort),
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(app.into_make_service(), server_config)
        .expect("Failed to create test server")
}

/// App over a fresh in-memory backend with default limits.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {})
}

/// App over a fresh in-memory backend, with configuration tweaks.
pub fn setup_test_app_with(customize: impl FnOnce(&mut Config)) -> TestApp {
    let dir = static_dir();
    let mut config = test_config(&dir);
    config.storage.backend = Some(StorageBackend::Memory);
    customize(&mut config);

    let memory = Arc::new(MemoryStorage::new("memory", PUBLIC_BASE_URL));
    let storage: Arc<dyn Storage> = memory.clone();

    TestApp {
        server: build(config, Some(storage)),
        memory: Some(memory),
        _static_dir: dir,
    }
}

/// App started without any storage backend.
pub fn setup_test_app_without_storage() -> TestApp {
    let dir = static_dir();
    let config = test_config(&dir);

    TestApp {
        server: build(config, None),
        memory: None,
        _static_dir: dir,
    }
}

/// App over a caller-supplied backend.
pub fn setup_test_app_with_storage(storage: Arc<dyn Storage>) -> TestApp {
    setup_test_app_with_storage_and(storage, |_| {})
}

/// App over a caller-supplied backend, with configuration tweaks.
pub fn setup_test_app_with_storage_and(
    storage: Arc<dyn Storage>,
    customize: impl FnOnce(&mut Config),
) -> TestApp {
    let dir = static_dir();
    let mut config = test_config(&dir);
    customize(&mut config);

    TestApp {
        server: build(config, Some(storage)),
        memory: None,
        _static_dir: dir,
    }
}
