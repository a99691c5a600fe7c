//! Supplier intake and compliance approval
//!
//! Supports:
//! - Pre-filling the intake form from an uploaded file name
//! - Supplier submission into the pending queue (newest first)
//! - Approve / reject by submission id, or on the newest submission
//! - Approvals log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{
    certificate_id_for, guess_from_filename, validate_submission, ApprovalAction,
    ApprovalLogEntry, Certificate, CertificateGuess, Feature, Submission, SubmissionForm,
    SubmissionState, DEMO_FILE_NAME, LEGACY_STATUS_ON_CREATE, PENDING_CERTIFICATE_ID,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::session::{Session, SharedSession};

/// Note recorded on rejections
pub const REJECTION_NOTE: &str = "Rejected (demo)";

/// Intake service for supplier submissions
#[derive(Clone)]
pub struct IntakeService {
    session: SharedSession,
}

/// Input for guessing form fields from an upload
#[derive(Debug, Deserialize)]
pub struct GuessInput {
    pub file_name: String,
}

/// Pre-filled form plus the raw guess it came from
#[derive(Debug, Clone, Serialize)]
pub struct IntakePrefill {
    pub guess: CertificateGuess,
    pub form: SubmissionForm,
}

/// Result of approving or rejecting a submission
#[derive(Debug, Clone, Serialize)]
pub struct Decision {
    pub submission: Submission,
    /// Set only on approval
    pub certificate: Option<Certificate>,
    pub log_entry: ApprovalLogEntry,
}

impl IntakeService {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }

    // ========================================================================
    // Form pre-fill
    // ========================================================================

    /// Guess form fields from an uploaded file name
    pub async fn guess(&self, input: GuessInput, now: DateTime<Utc>) -> AppResult<IntakePrefill> {
        let session = self.session.read().await;
        session.require(Feature::SupplierIntake)?;

        let guess = guess_from_filename(&input.file_name, &session.supplier_names(), now.date_naive());
        tracing::debug!(file_name = %input.file_name, supplier = %guess.supplier, "Guessed intake fields");

        Ok(IntakePrefill {
            form: SubmissionForm::from_guess(&guess, Some(input.file_name)),
            guess,
        })
    }

    /// The form shown before any upload
    pub async fn placeholder(&self, now: DateTime<Utc>) -> AppResult<IntakePrefill> {
        let session = self.session.read().await;
        session.require(Feature::SupplierIntake)?;

        let guess = CertificateGuess::placeholder(&session.supplier_names(), now.date_naive());
        Ok(IntakePrefill {
            form: SubmissionForm::from_guess(&guess, None),
            guess,
        })
    }

    // ========================================================================
    // Submissions
    // ========================================================================

    /// Submit a confirmed form for compliance approval
    pub async fn submit(&self, form: SubmissionForm, now: DateTime<Utc>) -> AppResult<Submission> {
        let mut session = self.session.write().await;
        session.require(Feature::SupplierIntake)?;

        let expiry_date = validate_submission(&form).map_err(|e| {
            tracing::warn!(field = %e.field(), "Rejected submission form: {}", e);
            e
        })?;

        let submission = Submission {
            id: Uuid::new_v4(),
            submitted_at: now,
            supplier: form.supplier,
            country: form.country,
            material: form.material,
            cert_body: form.cert_body,
            certificate_no: form.certificate_no,
            expiry_date,
            file_name: form
                .file_name
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| DEMO_FILE_NAME.to_string()),
            state: SubmissionState::Pending,
            note: form.note,
        };

        session.submissions.insert(0, submission.clone());
        tracing::info!(
            submission_id = %submission.id,
            supplier = %submission.supplier,
            "Submission queued for approval"
        );
        Ok(submission)
    }

    /// Pending submissions, newest first
    pub async fn list_pending(&self) -> AppResult<Vec<Submission>> {
        let session = self.session.read().await;
        session.require(Feature::SupplierIntake)?;
        Ok(session.submissions.clone())
    }

    // ========================================================================
    // Approval
    // ========================================================================

    /// Approve a submission, adding it to the vault as a new certificate
    pub async fn approve(&self, submission_id: Uuid, now: DateTime<Utc>) -> AppResult<Decision> {
        let mut session = self.session.write().await;
        session.require(Feature::SupplierIntake)?;
        approve_in(&mut session, submission_id, now)
    }

    /// Reject a submission
    pub async fn reject(&self, submission_id: Uuid, now: DateTime<Utc>) -> AppResult<Decision> {
        let mut session = self.session.write().await;
        session.require(Feature::SupplierIntake)?;
        reject_in(&mut session, submission_id, now)
    }

    /// Approve the newest submission
    pub async fn approve_latest(&self, now: DateTime<Utc>) -> AppResult<Decision> {
        let mut session = self.session.write().await;
        session.require(Feature::SupplierIntake)?;
        let id = latest_id(&session)?;
        approve_in(&mut session, id, now)
    }

    /// Reject the newest submission
    pub async fn reject_latest(&self, now: DateTime<Utc>) -> AppResult<Decision> {
        let mut session = self.session.write().await;
        session.require(Feature::SupplierIntake)?;
        let id = latest_id(&session)?;
        reject_in(&mut session, id, now)
    }

    /// Approvals log, newest first
    pub async fn approval_log(&self) -> AppResult<Vec<ApprovalLogEntry>> {
        let session = self.session.read().await;
        session.require(Feature::ApprovalsLog)?;
        Ok(session.approval_log.clone())
    }
}

fn latest_id(session: &Session) -> AppResult<Uuid> {
    session
        .submissions
        .first()
        .map(|s| s.id)
        .ok_or_else(|| AppError::NotFound("Pending submission".to_string()))
}

/// Remove a submission from the queue, moving it to `next`.
///
/// The queue only ever holds pending submissions, so a decided one is
/// simply not found.
fn take_pending(session: &mut Session, submission_id: Uuid, next: SubmissionState) -> AppResult<Submission> {
    let index = session
        .submissions
        .iter()
        .position(|s| s.id == submission_id)
        .ok_or_else(|| AppError::NotFound(format!("Submission {}", submission_id)))?;

    let mut submission = session.submissions.remove(index);
    submission.state = next;
    Ok(submission)
}

fn approve_in(session: &mut Session, submission_id: Uuid, now: DateTime<Utc>) -> AppResult<Decision> {
    let submission = take_pending(session, submission_id, SubmissionState::Approved)?;

    let certificate = Certificate {
        id: certificate_id_for(session.certificates.len()),
        supplier: submission.supplier.clone(),
        material: submission.material.clone(),
        cert_body: submission.cert_body.clone(),
        country: submission.country.clone(),
        issue_date: now.date_naive(),
        expiry_date: submission.expiry_date,
        status: LEGACY_STATUS_ON_CREATE.to_string(),
        file_name: submission.file_name.clone(),
    };
    session.certificates.push(certificate.clone());

    let log_entry = ApprovalLogEntry {
        time: now,
        action: ApprovalAction::Approved,
        supplier: submission.supplier.clone(),
        material: submission.material.clone(),
        certificate_id: certificate.id.clone(),
        note: format!(
            "Approved from supplier intake. CertNo={}",
            submission.certificate_no
        ),
    };
    session.approval_log.insert(0, log_entry.clone());

    tracing::info!(
        submission_id = %submission.id,
        certificate_id = %certificate.id,
        supplier = %submission.supplier,
        "Submission approved"
    );

    Ok(Decision {
        submission,
        certificate: Some(certificate),
        log_entry,
    })
}

fn reject_in(session: &mut Session, submission_id: Uuid, now: DateTime<Utc>) -> AppResult<Decision> {
    let submission = take_pending(session, submission_id, SubmissionState::Rejected)?;

    let log_entry = ApprovalLogEntry {
        time: now,
        action: ApprovalAction::Rejected,
        supplier: submission.supplier.clone(),
        material: submission.material.clone(),
        certificate_id: PENDING_CERTIFICATE_ID.to_string(),
        note: REJECTION_NOTE.to_string(),
    };
    session.approval_log.insert(0, log_entry.clone());

    tracing::info!(
        submission_id = %submission.id,
        supplier = %submission.supplier,
        "Submission rejected"
    );

    Ok(Decision {
        submission,
        certificate: None,
        log_entry,
    })
}
