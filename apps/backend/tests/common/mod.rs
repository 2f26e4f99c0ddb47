//! Common test utilities and fixtures for integration tests.
//!
//! The service is stateless, so every test builds its own router in memory.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use workout_log_backend::config::Config;
use workout_log_backend::{app, AppState};

/// Test context wrapping a router built from a test configuration.
pub struct TestContext {
    pub config: Config,
    app: Router,
}

impl TestContext {
    /// Create a context with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a context with a small input limit, for size checks.
    pub fn with_max_input_bytes(max_input_bytes: usize) -> Self {
        Self::with_config(Config {
            max_input_bytes,
            ..Config::default()
        })
    }

    pub fn with_config(config: Config) -> Self {
        let app = app(AppState::new(config.clone()));
        Self { config, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start an in-memory test server.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
