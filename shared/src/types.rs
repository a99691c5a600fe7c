//! Common types used across the dashboard

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Demo tier being shown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Certificate storage, expiry alerts and audit downloads
    Basic,
    /// Adds supplier intake, approvals log and reminders
    #[default]
    Core,
}

impl Plan {
    pub fn display_name(&self) -> &'static str {
        match self {
            Plan::Basic => "Basic",
            Plan::Core => "Core",
        }
    }

    /// Placeholder annual price (USD)
    pub fn annual_price(&self) -> Decimal {
        match self {
            Plan::Basic => Decimal::from(1500),
            Plan::Core => Decimal::from(3000),
        }
    }

    pub fn allows(&self, feature: Feature) -> bool {
        match feature {
            Feature::CertificateVault | Feature::SupplierView | Feature::AuditPack => true,
            Feature::SupplierIntake | Feature::ApprovalsLog | Feature::ReminderCentre => {
                matches!(self, Plan::Core)
            }
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Dashboard features gated by plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    CertificateVault,
    SupplierView,
    AuditPack,
    SupplierIntake,
    ApprovalsLog,
    ReminderCentre,
}

impl Feature {
    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::CertificateVault => "Certificate vault",
            Feature::SupplierView => "Supplier compliance view",
            Feature::AuditPack => "Audit pack export",
            Feature::SupplierIntake => "Supplier intake",
            Feature::ApprovalsLog => "Approvals log",
            Feature::ReminderCentre => "Reminder centre",
        }
    }
}
