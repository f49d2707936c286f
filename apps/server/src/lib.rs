pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use lexiflow_core::{GlobalSettings, Library};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::sessions::SessionRegistry;
use crate::services::settings::SettingsService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<Library>,
    pub settings: Arc<SettingsService>,
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    /// State backed by in-memory storage.
    pub fn in_memory(settings: GlobalSettings) -> Self {
        Self::with_registry(settings, SessionRegistry::default())
    }

    /// In-memory state whose sessions expire after `session_ttl` of inactivity.
    pub fn from_config(config: &Config) -> Self {
        Self::with_registry(
            config.grading.clone(),
            SessionRegistry::new(config.session_ttl),
        )
    }

    fn with_registry(settings: GlobalSettings, sessions: SessionRegistry) -> Self {
        Self {
            library: Arc::new(Library::in_memory()),
            settings: Arc::new(SettingsService::new(settings)),
            sessions: Arc::new(sessions),
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Grading
        .route("/api/grade", post(routes::grade::grade))
        // Topic routes
        .route(
            "/api/topics",
            get(routes::topics::list).post(routes::topics::create),
        )
        .route("/api/topics/:id", delete(routes::topics::delete))
        // Word routes
        .route(
            "/api/topics/:id/words",
            get(routes::words::list).post(routes::words::create),
        )
        .route("/api/topics/:id/import", post(routes::words::import))
        .route("/api/words/:id", delete(routes::words::delete))
        // Settings routes
        .route("/api/settings", get(routes::settings::get_all))
        .route("/api/settings/global", put(routes::settings::update_global))
        .route(
            "/api/settings/topic/:id",
            put(routes::settings::update_topic).delete(routes::settings::delete_topic),
        )
        // Session routes
        .route("/api/sessions", post(routes::sessions::start))
        .route("/api/sessions/:id", get(routes::sessions::get))
        .route("/api/sessions/:id/answer", post(routes::sessions::answer))
        .route("/api/sessions/:id/finish", post(routes::sessions::finish))
        // History
        .route("/api/games", get(routes::games::list))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        grading = ?config.grading,
        session_ttl_minutes = config.session_ttl.num_minutes(),
        "Initializing in-memory library..."
    );
    let state = AppState::from_config(&config);

    let app = router(state);
    let addr = config.addr();

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
