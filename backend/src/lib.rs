//! Halal Compliance Dashboard - Backend
//!
//! Certificate vault, supplier compliance view, supplier intake with
//! approvals, audit pack export, reminder log and ROI estimate, served over
//! HTTP from an in-memory demo session.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::SeedData;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use error::{AppError, AppResult};
use services::{Session, SessionSettings, SharedSession};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub session: SharedSession,
    pub config: Arc<Config>,
}

impl AppState {
    /// Start a fresh session from the seed with the configured defaults
    pub fn new(seed: SeedData, config: Config) -> AppResult<Self> {
        let expiring_window = config
            .expiring_window()
            .map_err(|e| AppError::Configuration(e.to_string()))?;
        let settings = SessionSettings {
            plan: config.dashboard.default_plan,
            expiring_window,
        };

        Ok(Self {
            session: Session::new(seed, settings).shared(),
            config: Arc::new(config),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Halal Compliance Dashboard API v1.0"
}

/// Liveness check
async fn health_check() -> &'static str {
    "OK"
}
