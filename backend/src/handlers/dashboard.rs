//! HTTP handlers for the dashboard, session settings and reset

use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::AppResult;
use crate::services::certificate::{CertificateService, DashboardView};
use crate::services::session::{SessionService, SessionSettings, UpdateSettingsInput};
use crate::AppState;

/// Headline counts and alerts
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    let service = CertificateService::new(state.session);
    Json(service.dashboard(Utc::now().date_naive()).await)
}

/// Current plan and expiring window
pub async fn get_settings(State(state): State<AppState>) -> Json<SessionSettings> {
    let service = SessionService::new(state.session);
    Json(service.get_settings().await)
}

/// Change plan and/or expiring window
pub async fn update_settings(
    State(state): State<AppState>,
    Json(input): Json<UpdateSettingsInput>,
) -> AppResult<Json<SessionSettings>> {
    let service = SessionService::new(state.session);
    let settings = service.update_settings(input).await?;
    Ok(Json(settings))
}

/// Reset demo data to the seed
pub async fn reset_session(State(state): State<AppState>) -> Json<SessionSettings> {
    let service = SessionService::new(state.session);
    Json(service.reset().await)
}
