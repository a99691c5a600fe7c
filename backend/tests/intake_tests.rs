//! Supplier intake and approval tests
//!
//! Tests for the intake state machine including:
//! - Approval appends a certificate with the next sequential id
//! - Rejection leaves the vault untouched
//! - Malformed forms never mutate the session
//! - Intake is gated to the Core plan

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use halal_compliance_backend::error::AppError;
use halal_compliance_backend::services::intake::{GuessInput, REJECTION_NOTE};
use halal_compliance_backend::services::{
    IntakeService, Session, SessionSettings, SharedSession,
};
use proptest::prelude::*;
use shared::{
    ApprovalAction, Feature, Plan, SeedData, SubmissionForm, SubmissionState, DEMO_FILE_NAME,
    PENDING_CERTIFICATE_ID,
};

const SEED: &str = include_str!("../data/demo_seed.json");

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
}

fn session_with_plan(plan: Plan) -> SharedSession {
    let seed = SeedData::from_json(SEED).unwrap();
    let settings = SessionSettings {
        plan,
        ..SessionSettings::default()
    };
    Session::new(seed, settings).shared()
}

fn form(supplier: &str, expiry_date: &str) -> SubmissionForm {
    SubmissionForm {
        supplier: supplier.to_string(),
        country: "UAE".to_string(),
        material: "Gelatin Powder".to_string(),
        cert_body: "ESMA".to_string(),
        certificate_no: "HA-2026-1234".to_string(),
        expiry_date: expiry_date.to_string(),
        file_name: Some("pearl_gelatin.pdf".to_string()),
        note: String::new(),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Approving appends CERT-{n+1} and logs APPROVED at the front
    #[tokio::test]
    async fn test_approve_adds_certificate() {
        let session = session_with_plan(Plan::Core);
        let service = IntakeService::new(session.clone());
        let before = session.read().await.certificates.len();

        let submission = service.submit(form("Pearl Gelatin", "2027-06-30"), now()).await.unwrap();
        let decision = service.approve(submission.id, now()).await.unwrap();

        let state = session.read().await;
        assert_eq!(state.certificates.len(), before + 1);
        let certificate = decision.certificate.unwrap();
        assert_eq!(certificate.id, format!("CERT-{:03}", before + 1));
        assert_eq!(certificate.issue_date, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        assert_eq!(certificate.expiry_date, NaiveDate::from_ymd_opt(2027, 6, 30).unwrap());
        assert_eq!(certificate.status, "VALID");
        assert_eq!(state.certificates.last().unwrap().id, certificate.id);

        assert_eq!(decision.submission.state, SubmissionState::Approved);
        assert!(state.submissions.is_empty());

        let entry = &state.approval_log[0];
        assert_eq!(entry.action, ApprovalAction::Approved);
        assert_eq!(entry.certificate_id, certificate.id);
        assert_eq!(entry.note, "Approved from supplier intake. CertNo=HA-2026-1234");
    }

    /// Rejecting records a pending placeholder and leaves the vault alone
    #[tokio::test]
    async fn test_reject_leaves_vault_unchanged() {
        let session = session_with_plan(Plan::Core);
        let service = IntakeService::new(session.clone());
        let before = session.read().await.certificates.len();

        let submission = service.submit(form("ACME Foods", "2027-01-01"), now()).await.unwrap();
        let decision = service.reject(submission.id, now()).await.unwrap();

        let state = session.read().await;
        assert_eq!(state.certificates.len(), before);
        assert!(decision.certificate.is_none());
        assert!(state.submissions.is_empty());
        assert_eq!(state.approval_log[0].action, ApprovalAction::Rejected);
        assert_eq!(state.approval_log[0].certificate_id, PENDING_CERTIFICATE_ID);
        assert_eq!(state.approval_log[0].note, REJECTION_NOTE);
    }

    /// A malformed expiry date is reported and nothing changes
    #[tokio::test]
    async fn test_bad_date_does_not_mutate() {
        let session = session_with_plan(Plan::Core);
        let service = IntakeService::new(session.clone());

        let result = service.submit(form("ACME Foods", "31/01/2027"), now()).await;

        match result {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, "expiry_date"),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(session.read().await.submissions.is_empty());
    }

    /// Blank supplier and material are queued; only the date can refuse a form
    #[tokio::test]
    async fn test_blank_fields_are_queued() {
        let session = session_with_plan(Plan::Core);
        let service = IntakeService::new(session.clone());
        let mut input = form("", "2027-01-01");
        input.material = String::new();

        let submission = service.submit(input, now()).await.unwrap();

        assert_eq!(submission.state, SubmissionState::Pending);
        assert_eq!(submission.supplier, "");
        assert_eq!(submission.material, "");
        assert_eq!(session.read().await.submissions.len(), 1);
    }

    /// With no known suppliers the unedited guess still submits
    #[tokio::test]
    async fn test_unedited_guess_without_suppliers_submits() {
        let mut seed = SeedData::from_json(SEED).unwrap();
        seed.suppliers.clear();
        let session = Session::new(seed, SessionSettings::default()).shared();
        let service = IntakeService::new(session);

        let prefill = service
            .guess(
                GuessInput {
                    file_name: "cert.pdf".to_string(),
                },
                now(),
            )
            .await
            .unwrap();
        assert_eq!(prefill.form.supplier, "");

        let submission = service.submit(prefill.form, now()).await.unwrap();
        assert_eq!(submission.state, SubmissionState::Pending);
    }

    /// Missing file names fall back to the demo placeholder
    #[tokio::test]
    async fn test_submit_defaults_file_name() {
        let service = IntakeService::new(session_with_plan(Plan::Core));
        let mut input = form("ACME Foods", "2027-01-01");
        input.file_name = None;

        let submission = service.submit(input, now()).await.unwrap();
        assert_eq!(submission.file_name, DEMO_FILE_NAME);
        assert_eq!(submission.state, SubmissionState::Pending);
    }

    /// Newest submissions come first and `latest` acts on them
    #[tokio::test]
    async fn test_latest_acts_on_newest() {
        let session = session_with_plan(Plan::Core);
        let service = IntakeService::new(session.clone());

        let older = service.submit(form("ACME Foods", "2027-01-01"), now()).await.unwrap();
        let newer = service.submit(form("Desert Dairy", "2027-02-01"), now()).await.unwrap();

        let pending = service.list_pending().await.unwrap();
        assert_eq!(pending[0].id, newer.id);
        assert_eq!(pending[1].id, older.id);

        let decision = service.approve_latest(now()).await.unwrap();
        assert_eq!(decision.submission.id, newer.id);

        let pending = service.list_pending().await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, older.id);
    }

    /// `latest` with an empty queue is not found
    #[tokio::test]
    async fn test_latest_on_empty_queue() {
        let service = IntakeService::new(session_with_plan(Plan::Core));
        assert!(matches!(
            service.reject_latest(now()).await,
            Err(AppError::NotFound(_))
        ));
    }

    /// A decided submission cannot be decided again
    #[tokio::test]
    async fn test_double_approval_fails() {
        let session = session_with_plan(Plan::Core);
        let service = IntakeService::new(session.clone());

        let submission = service.submit(form("ACME Foods", "2027-01-01"), now()).await.unwrap();
        service.approve(submission.id, now()).await.unwrap();
        let count = session.read().await.certificates.len();

        assert!(matches!(
            service.approve(submission.id, now()).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(session.read().await.certificates.len(), count);
    }

    /// Basic plan cannot use intake or the approvals log
    #[tokio::test]
    async fn test_basic_plan_is_restricted() {
        let service = IntakeService::new(session_with_plan(Plan::Basic));

        assert!(matches!(
            service.submit(form("ACME Foods", "2027-01-01"), now()).await,
            Err(AppError::PlanRestricted(Feature::SupplierIntake))
        ));
        assert!(matches!(
            service.approval_log().await,
            Err(AppError::PlanRestricted(Feature::ApprovalsLog))
        ));
    }

    /// The guess is turned into an editable form
    #[tokio::test]
    async fn test_guess_prefills_form() {
        let service = IntakeService::new(session_with_plan(Plan::Core));
        let prefill = service
            .guess(
                GuessInput {
                    file_name: "Desert Dairy riyadh 15-08-2027.pdf".to_string(),
                },
                now(),
            )
            .await
            .unwrap();

        assert_eq!(prefill.guess.supplier, "Desert Dairy");
        assert_eq!(prefill.form.country, "KSA");
        assert_eq!(prefill.form.expiry_date, "2027-08-15");
        assert_eq!(
            prefill.form.file_name.as_deref(),
            Some("Desert Dairy riyadh 15-08-2027.pdf")
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        /// Each approval adds exactly one certificate; rejections add none
        #[test]
        fn prop_vault_grows_only_on_approval(decisions in prop::collection::vec(any::<bool>(), 1..8)) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            runtime.block_on(async {
                let session = session_with_plan(Plan::Core);
                let service = IntakeService::new(session.clone());
                let start = session.read().await.certificates.len();

                for approve in &decisions {
                    let submission = service
                        .submit(form("ACME Foods", "2027-01-01"), now())
                        .await
                        .unwrap();
                    if *approve {
                        service.approve(submission.id, now()).await.unwrap();
                    } else {
                        service.reject(submission.id, now()).await.unwrap();
                    }
                }

                let approvals = decisions.iter().filter(|a| **a).count();
                let state = session.read().await;
                prop_assert_eq!(state.certificates.len(), start + approvals);
                prop_assert_eq!(state.approval_log.len(), decisions.len());
                prop_assert!(state.submissions.is_empty());
                Ok(())
            })?;
        }
    }
}
