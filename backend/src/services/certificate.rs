//! Certificate vault, dashboard and supplier compliance views

use chrono::NaiveDate;
use serde::Serialize;
use shared::{
    supplier_compliance, urgent_rows, urgent_suppliers, CertificateRow, CertificateSummary,
    SupplierCompliance,
};

use crate::error::{AppError, AppResult};
use crate::services::session::{SessionSettings, SharedSession};

/// Service for reading certificates and their derived status
#[derive(Clone)]
pub struct CertificateService {
    session: SharedSession,
}

/// Everything above the fold: settings, headline counts and alerts
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub settings: SessionSettings,
    pub summary: CertificateSummary,
    /// Expiring and expired certificates, most urgent first
    pub alerts: Vec<CertificateRow>,
}

impl CertificateService {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }

    /// All certificates, most urgent first
    pub async fn list_certificates(&self, today: NaiveDate) -> Vec<CertificateRow> {
        self.session.read().await.rows(today)
    }

    /// Get a certificate by id
    pub async fn get_certificate(&self, certificate_id: &str, today: NaiveDate) -> AppResult<CertificateRow> {
        self.session
            .read()
            .await
            .rows(today)
            .into_iter()
            .find(|r| r.certificate_id == certificate_id)
            .ok_or_else(|| AppError::NotFound(format!("Certificate {}", certificate_id)))
    }

    pub async fn dashboard(&self, today: NaiveDate) -> DashboardView {
        let session = self.session.read().await;
        let rows = session.rows(today);
        DashboardView {
            settings: session.settings,
            summary: CertificateSummary::from_rows(&rows),
            alerts: urgent_rows(&rows),
        }
    }

    /// Worst status per supplier
    pub async fn supplier_compliance(&self, today: NaiveDate) -> Vec<SupplierCompliance> {
        let session = self.session.read().await;
        supplier_compliance(&session.suppliers, &session.rows(today))
    }

    /// Suppliers that need chasing
    pub async fn urgent_suppliers(&self, today: NaiveDate) -> Vec<String> {
        urgent_suppliers(&self.session.read().await.rows(today))
    }
}
