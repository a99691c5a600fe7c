//! Supplier submission models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::intake::CertificateGuess;

/// File name recorded when the supplier submits without an upload
pub const DEMO_FILE_NAME: &str = "(demo) supplier_certificate.pdf";

/// A supplier-provided certificate candidate awaiting compliance review
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub supplier: String,
    pub country: String,
    pub material: String,
    pub cert_body: String,
    pub certificate_no: String,
    pub expiry_date: NaiveDate,
    pub file_name: String,
    pub state: SubmissionState,
    pub note: String,
}

/// Lifecycle of a submission. Approved and rejected are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionState {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Pending => "PENDING",
            SubmissionState::Approved => "APPROVED",
            SubmissionState::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The editable intake form a supplier confirms before submitting.
///
/// `expiry_date` stays a string until submission so a malformed edit can be
/// reported back instead of failing deserialization. It is the only field
/// that can refuse a submission; empty text fields are queued as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionForm {
    pub supplier: String,
    pub country: String,
    pub material: String,
    pub cert_body: String,
    pub certificate_no: String,
    pub expiry_date: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub note: String,
}

impl SubmissionForm {
    /// Pre-fill a form from a filename guess
    pub fn from_guess(guess: &CertificateGuess, file_name: Option<String>) -> Self {
        Self {
            supplier: guess.supplier.clone(),
            country: guess.country.clone(),
            material: guess.material.clone(),
            cert_body: guess.cert_body.clone(),
            certificate_no: guess.certificate_no.clone(),
            expiry_date: guess.expiry_date.format("%Y-%m-%d").to_string(),
            file_name,
            note: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&SubmissionState::Pending).unwrap(), "\"PENDING\"");
        assert_eq!(SubmissionState::Rejected.to_string(), "REJECTED");
    }

    #[test]
    fn test_form_from_empty_guess_keeps_blanks() {
        let guess = crate::intake::guess_from_filename(
            "cert.pdf",
            &[],
            chrono::NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
        );
        let form = SubmissionForm::from_guess(&guess, Some("cert.pdf".to_string()));
        assert_eq!(form.supplier, "");
        assert_eq!(form.expiry_date, "2027-10-17");
    }
}
