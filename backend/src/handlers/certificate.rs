//! HTTP handlers for the certificate vault and supplier compliance view

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use shared::{CertificateRow, SupplierCompliance};

use crate::error::AppResult;
use crate::services::certificate::CertificateService;
use crate::AppState;

// ============================================================================
// Certificate Vault
// ============================================================================

/// List certificates, most urgent first
pub async fn list_certificates(State(state): State<AppState>) -> Json<Vec<CertificateRow>> {
    let service = CertificateService::new(state.session);
    Json(service.list_certificates(Utc::now().date_naive()).await)
}

/// Get a certificate by ID
pub async fn get_certificate(
    State(state): State<AppState>,
    Path(certificate_id): Path<String>,
) -> AppResult<Json<CertificateRow>> {
    let service = CertificateService::new(state.session);
    let row = service
        .get_certificate(&certificate_id, Utc::now().date_naive())
        .await?;
    Ok(Json(row))
}

// ============================================================================
// Supplier Compliance
// ============================================================================

/// Worst status per supplier
pub async fn list_supplier_compliance(
    State(state): State<AppState>,
) -> Json<Vec<SupplierCompliance>> {
    let service = CertificateService::new(state.session);
    Json(service.supplier_compliance(Utc::now().date_naive()).await)
}

/// Suppliers with expiring or expired certificates
pub async fn list_urgent_suppliers(State(state): State<AppState>) -> Json<Vec<String>> {
    let service = CertificateService::new(state.session);
    Json(service.urgent_suppliers(Utc::now().date_naive()).await)
}
