//! Certificate models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::{days_until, status_from_expiry, ExpiringWindow};

/// A supplier certificate held in the vault
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Certificate {
    pub id: String,
    pub supplier: String,
    pub material: String,
    pub cert_body: String,
    pub country: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    /// Legacy label carried by the seed and set to `VALID` on approval.
    /// Never read for status decisions; see [`CertificateRow`].
    #[serde(default = "legacy_status")]
    pub status: String,
    pub file_name: String,
}

fn legacy_status() -> String {
    LEGACY_STATUS_ON_CREATE.to_string()
}

/// Literal status written onto newly approved certificates
pub const LEGACY_STATUS_ON_CREATE: &str = "VALID";

/// Format a sequential certificate id, `CERT-001`, `CERT-002`, ...
pub fn certificate_id_for(existing_count: usize) -> String {
    format!("CERT-{:03}", existing_count + 1)
}

/// Expiry status of a single certificate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateStatus {
    // Declaration order is severity order: Valid < Expiring < Expired
    Valid,
    Expiring,
    Expired,
}

impl CertificateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateStatus::Valid => "VALID",
            CertificateStatus::Expiring => "EXPIRING",
            CertificateStatus::Expired => "EXPIRED",
        }
    }

    /// Whether the certificate needs attention (expiring or expired)
    pub fn is_urgent(&self) -> bool {
        matches!(self, CertificateStatus::Expiring | CertificateStatus::Expired)
    }
}

impl std::fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A certificate with its status derived for a given day and window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CertificateRow {
    pub certificate_id: String,
    pub supplier: String,
    pub material: String,
    pub cert_body: String,
    pub country: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub days_until_expiry: i64,
    pub status: CertificateStatus,
    pub file_name: String,
}

impl CertificateRow {
    pub fn from_certificate(cert: &Certificate, today: NaiveDate, window: ExpiringWindow) -> Self {
        Self {
            certificate_id: cert.id.clone(),
            supplier: cert.supplier.clone(),
            material: cert.material.clone(),
            cert_body: cert.cert_body.clone(),
            country: cert.country.clone(),
            issue_date: cert.issue_date,
            expiry_date: cert.expiry_date,
            days_until_expiry: days_until(cert.expiry_date, today),
            status: status_from_expiry(cert.expiry_date, today, window),
            file_name: cert.file_name.clone(),
        }
    }
}

/// Build the vault view: one row per certificate, most urgent first.
///
/// The sort is stable, so certificates expiring on the same day keep their
/// insertion order.
pub fn certificate_rows(
    certificates: &[Certificate],
    today: NaiveDate,
    window: ExpiringWindow,
) -> Vec<CertificateRow> {
    let mut rows: Vec<CertificateRow> = certificates
        .iter()
        .map(|c| CertificateRow::from_certificate(c, today, window))
        .collect();
    rows.sort_by_key(|r| r.days_until_expiry);
    rows
}

/// Headline counts shown above the vault
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CertificateSummary {
    pub total: usize,
    pub valid: usize,
    pub expiring: usize,
    pub expired: usize,
}

impl CertificateSummary {
    pub fn from_rows(rows: &[CertificateRow]) -> Self {
        rows.iter().fold(
            Self {
                total: rows.len(),
                ..Self::default()
            },
            |mut acc, row| {
                match row.status {
                    CertificateStatus::Valid => acc.valid += 1,
                    CertificateStatus::Expiring => acc.expiring += 1,
                    CertificateStatus::Expired => acc.expired += 1,
                }
                acc
            },
        )
    }
}

/// Rows that need attention, in vault order
pub fn urgent_rows(rows: &[CertificateRow]) -> Vec<CertificateRow> {
    rows.iter().filter(|r| r.status.is_urgent()).cloned().collect()
}
