//! Route definitions for the Halal Compliance Dashboard

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/dashboard", get(handlers::get_dashboard))
        .route(
            "/settings",
            get(handlers::get_settings).put(handlers::update_settings),
        )
        .route("/reset", post(handlers::reset_session))
        .nest("/certificates", certificate_routes())
        .nest("/suppliers", supplier_routes())
        .nest("/intake", intake_routes())
        .route("/approvals", get(handlers::approval_log))
        .route(
            "/reminders",
            get(handlers::list_reminders).post(handlers::log_reminder),
        )
        .route("/audit-pack", post(handlers::export_audit_pack))
        .route("/roi", post(handlers::estimate_roi))
}

/// Certificate vault routes
fn certificate_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_certificates))
        .route("/:id", get(handlers::get_certificate))
}

/// Supplier compliance routes
fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_supplier_compliance))
        .route("/urgent", get(handlers::list_urgent_suppliers))
}

/// Supplier intake routes (Core plan)
fn intake_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/guess",
            get(handlers::placeholder_fields).post(handlers::guess_fields),
        )
        .route(
            "/submissions",
            get(handlers::list_pending).post(handlers::submit),
        )
        .route(
            "/submissions/latest/approve",
            post(handlers::approve_latest),
        )
        .route("/submissions/latest/reject", post(handlers::reject_latest))
        .route("/submissions/:id/approve", post(handlers::approve))
        .route("/submissions/:id/reject", post(handlers::reject))
}
