//! HTTP handlers for the reminder centre

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use shared::ReminderLogEntry;

use crate::error::AppResult;
use crate::services::reminder::{LogReminderInput, ReminderService};
use crate::AppState;

/// Log a reminder
pub async fn log_reminder(
    State(state): State<AppState>,
    Json(input): Json<LogReminderInput>,
) -> AppResult<(StatusCode, Json<ReminderLogEntry>)> {
    let service = ReminderService::new(state.session);
    let entry = service.log_reminder(input, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Reminder log, newest first
pub async fn list_reminders(State(state): State<AppState>) -> AppResult<Json<Vec<ReminderLogEntry>>> {
    let service = ReminderService::new(state.session);
    Ok(Json(service.list().await?))
}
