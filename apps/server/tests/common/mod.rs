//! Common test utilities and fixtures for integration tests.
//!
//! Every TestContext owns a fresh in-memory library, so tests are
//! independent and need no external services.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;
use chrono::Utc;

use lexiflow_core::{GlobalSettings, Topic, Word};
use lexiflow_server::{router, AppState};

/// Test context containing application state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a new test context with default grading settings.
    pub fn new() -> Self {
        Self::with_settings(GlobalSettings::default())
    }

    /// Create a new test context with the given global settings.
    pub fn with_settings(settings: GlobalSettings) -> Self {
        let state = AppState::in_memory(settings);
        let app = router(state.clone());
        Self { state, app }
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.app.clone()).expect("Failed to start test server")
    }

    /// Create a topic directly in the library.
    pub fn create_topic(&self, name: &str) -> Topic {
        self.state
            .library
            .add_topic(name, Utc::now())
            .expect("Failed to create topic")
    }

    /// Create a word directly in the library.
    pub fn create_word(&self, topic: &Topic, term: &str, translation: &str, alternates: &[&str]) -> Word {
        let word = Word::new(
            topic.id,
            term,
            translation,
            alternates.iter().map(|a| a.to_string()).collect(),
        )
        .expect("Invalid test word");
        self.state
            .library
            .add_word(word)
            .expect("Failed to create word")
    }
}
