//! Supplier models

use serde::{Deserialize, Serialize};

use super::certificate::CertificateStatus;

/// A supplier from the static reference list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Supplier {
    pub name: String,
    pub category: String,
    pub country: String,
}

/// Overall compliance of a supplier across its certificates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    Valid,
    Expiring,
    Expired,
    /// No certificate on file
    Missing,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Valid => "VALID",
            ComplianceStatus::Expiring => "EXPIRING",
            ComplianceStatus::Expired => "EXPIRED",
            ComplianceStatus::Missing => "MISSING",
        }
    }
}

impl From<CertificateStatus> for ComplianceStatus {
    fn from(status: CertificateStatus) -> Self {
        match status {
            CertificateStatus::Valid => ComplianceStatus::Valid,
            CertificateStatus::Expiring => ComplianceStatus::Expiring,
            CertificateStatus::Expired => ComplianceStatus::Expired,
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One line of the supplier compliance view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplierCompliance {
    pub supplier: String,
    pub category: String,
    pub country: String,
    pub status: ComplianceStatus,
    /// Smallest days-until-expiry among the supplier's certificates
    pub nearest_expiry_days: Option<i64>,
}
