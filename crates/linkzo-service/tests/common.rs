//! Common test utilities for linkzo integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use linkzo_service::{create_router, AppState, ServiceConfig};
use linkzo_store::SqliteStore;

/// Admin key used by harnesses built with [`TestHarness::with_admin_key`].
pub const ADMIN_KEY: &str = "test-admin-key";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Direct handle on the store behind the server.
    pub store: Arc<SqliteStore>,
    /// Temporary directory for the database and public files (kept alive for test duration).
    pub temp_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with a fresh database and open admin endpoints.
    pub async fn new() -> Self {
        Self::build(None).await
    }

    /// Create a harness whose admin endpoints require [`ADMIN_KEY`].
    pub async fn with_admin_key() -> Self {
        Self::build(Some(ADMIN_KEY.to_string())).await
    }

    async fn build(admin_api_key: Option<String>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let public_dir = temp_dir.path().join("public");
        std::fs::create_dir(&public_dir).expect("Failed to create public dir");
        std::fs::write(public_dir.join("index.html"), "<h1>Linkzo</h1>").unwrap();
        std::fs::write(public_dir.join("admin.html"), "<h1>Linkzo Admin</h1>").unwrap();
        std::fs::write(public_dir.join("script.js"), "console.log('linkzo');").unwrap();

        let database_path = temp_dir.path().join("linkzo.db");
        let store = Arc::new(
            SqliteStore::open(&database_path)
                .await
                .expect("Failed to open store"),
        );

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            database_path,
            public_dir,
            admin_api_key,
            ..ServiceConfig::default()
        };

        let state = AppState::new(store.clone(), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            store,
            temp_dir,
        }
    }
}
