//! HTTP handlers for exports and the ROI estimate

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use shared::{validate_roi_inputs, RoiEstimate, RoiInputs};

use crate::error::AppResult;
use crate::services::audit_pack::{AuditPackService, ExportInput, AUDIT_PACK_FILE_NAME};
use crate::AppState;

/// Download an audit pack zip for the selected certificates
pub async fn export_audit_pack(
    State(state): State<AppState>,
    Json(input): Json<ExportInput>,
) -> AppResult<impl IntoResponse> {
    let service = AuditPackService::new(state.session);
    let bytes = service.export(input, Utc::now().date_naive()).await?;

    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", AUDIT_PACK_FILE_NAME),
        ),
    ];
    Ok((headers, bytes))
}

/// Estimate annual cost and savings for each plan
pub async fn estimate_roi(Json(input): Json<RoiInputs>) -> AppResult<Json<RoiEstimate>> {
    validate_roi_inputs(&input)?;
    Ok(Json(RoiEstimate::calculate(&input)))
}
