//! HTTP handlers for supplier intake and approvals

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use shared::{ApprovalLogEntry, Submission, SubmissionForm};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::intake::{Decision, GuessInput, IntakePrefill, IntakeService};
use crate::AppState;

// ============================================================================
// Form Pre-fill
// ============================================================================

/// Pre-fill the intake form from an uploaded file name
pub async fn guess_fields(
    State(state): State<AppState>,
    Json(input): Json<GuessInput>,
) -> AppResult<Json<IntakePrefill>> {
    let service = IntakeService::new(state.session);
    let prefill = service.guess(input, Utc::now()).await?;
    Ok(Json(prefill))
}

/// The form shown before any upload
pub async fn placeholder_fields(State(state): State<AppState>) -> AppResult<Json<IntakePrefill>> {
    let service = IntakeService::new(state.session);
    let prefill = service.placeholder(Utc::now()).await?;
    Ok(Json(prefill))
}

// ============================================================================
// Submissions
// ============================================================================

/// Submit a confirmed form for approval
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<SubmissionForm>,
) -> AppResult<(StatusCode, Json<Submission>)> {
    let service = IntakeService::new(state.session);
    let submission = service.submit(form, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

/// Pending submissions, newest first
pub async fn list_pending(State(state): State<AppState>) -> AppResult<Json<Vec<Submission>>> {
    let service = IntakeService::new(state.session);
    Ok(Json(service.list_pending().await?))
}

// ============================================================================
// Approval
// ============================================================================

/// Approve a submission by ID
pub async fn approve(
    State(state): State<AppState>,
    Path(submission_id): Path<Uuid>,
) -> AppResult<Json<Decision>> {
    let service = IntakeService::new(state.session);
    Ok(Json(service.approve(submission_id, Utc::now()).await?))
}

/// Reject a submission by ID
pub async fn reject(
    State(state): State<AppState>,
    Path(submission_id): Path<Uuid>,
) -> AppResult<Json<Decision>> {
    let service = IntakeService::new(state.session);
    Ok(Json(service.reject(submission_id, Utc::now()).await?))
}

/// Approve the newest submission
pub async fn approve_latest(State(state): State<AppState>) -> AppResult<Json<Decision>> {
    let service = IntakeService::new(state.session);
    Ok(Json(service.approve_latest(Utc::now()).await?))
}

/// Reject the newest submission
pub async fn reject_latest(State(state): State<AppState>) -> AppResult<Json<Decision>> {
    let service = IntakeService::new(state.session);
    Ok(Json(service.reject_latest(Utc::now()).await?))
}

/// Approvals log, newest first
pub async fn approval_log(State(state): State<AppState>) -> AppResult<Json<Vec<ApprovalLogEntry>>> {
    let service = IntakeService::new(state.session);
    Ok(Json(service.approval_log().await?))
}
