//! Approval and reminder log models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Certificate id recorded for rejections, where no certificate was assigned
pub const PENDING_CERTIFICATE_ID: &str = "(pending)";

/// Decision recorded in the approval log
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalAction {
    Approved,
    Rejected,
}

impl ApprovalAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalAction::Approved => "APPROVED",
            ApprovalAction::Rejected => "REJECTED",
        }
    }
}

/// Approval log entry (newest first)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApprovalLogEntry {
    pub time: DateTime<Utc>,
    pub action: ApprovalAction,
    pub supplier: String,
    pub material: String,
    pub certificate_id: String,
    pub note: String,
}

/// Why a supplier is being chased
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReminderReason {
    MissingCertificate,
    CertificateExpiringSoon,
    CertificateExpired,
    AuditEvidenceRequest,
}

impl ReminderReason {
    pub fn label(&self) -> &'static str {
        match self {
            ReminderReason::MissingCertificate => "Missing certificate",
            ReminderReason::CertificateExpiringSoon => "Certificate expiring soon",
            ReminderReason::CertificateExpired => "Certificate expired",
            ReminderReason::AuditEvidenceRequest => "Audit evidence request",
        }
    }
}

impl std::fmt::Display for ReminderReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Channel a reminder would go out on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReminderChannel {
    Email,
    #[default]
    #[serde(rename = "whatsapp")]
    WhatsApp,
    Sms,
}

impl ReminderChannel {
    pub fn label(&self) -> &'static str {
        match self {
            ReminderChannel::Email => "Email",
            ReminderChannel::WhatsApp => "WhatsApp",
            ReminderChannel::Sms => "SMS",
        }
    }
}

impl std::fmt::Display for ReminderChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Reminder log entry (newest first)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReminderLogEntry {
    pub time: DateTime<Utc>,
    pub supplier: String,
    pub reason: ReminderReason,
    pub channel: ReminderChannel,
}
