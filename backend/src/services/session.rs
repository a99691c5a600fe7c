//! In-memory session state
//!
//! The demo keeps everything in one session object: reference data copied
//! from the seed, the pending intake queue and both logs. Reset replaces the
//! data wholesale with a fresh copy of the seed.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{
    certificate_rows, ApprovalLogEntry, Certificate, CertificateRow, ExpiringWindow, Feature,
    Plan, ReminderLogEntry, SeedData, Submission, Supplier,
};
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};

/// Session shared across handlers
pub type SharedSession = Arc<RwLock<Session>>;

/// User-adjustable settings; these survive a reset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SessionSettings {
    pub plan: Plan,
    pub expiring_window: ExpiringWindow,
}

/// Input for changing settings
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsInput {
    pub plan: Option<Plan>,
    pub expiring_window: Option<u32>,
}

/// All mutable demo state
#[derive(Debug, Clone)]
pub struct Session {
    seed: SeedData,
    pub settings: SessionSettings,
    pub suppliers: Vec<Supplier>,
    pub certificates: Vec<Certificate>,
    /// Pending submissions, newest first
    pub submissions: Vec<Submission>,
    /// Newest first
    pub approval_log: Vec<ApprovalLogEntry>,
    /// Newest first
    pub reminder_log: Vec<ReminderLogEntry>,
}

impl Session {
    pub fn new(seed: SeedData, settings: SessionSettings) -> Self {
        Self {
            suppliers: seed.suppliers.clone(),
            certificates: seed.certificates.clone(),
            submissions: Vec::new(),
            approval_log: Vec::new(),
            reminder_log: Vec::new(),
            settings,
            seed,
        }
    }

    pub fn shared(self) -> SharedSession {
        Arc::new(RwLock::new(self))
    }

    /// Drop all session data and start again from the seed
    pub fn reset(&mut self) {
        *self = Session::new(self.seed.clone(), self.settings);
    }

    pub fn supplier_names(&self) -> Vec<String> {
        self.suppliers.iter().map(|s| s.name.clone()).collect()
    }

    /// Vault rows with status derived for `today`
    pub fn rows(&self, today: NaiveDate) -> Vec<CertificateRow> {
        certificate_rows(&self.certificates, today, self.settings.expiring_window)
    }

    /// Fail unless the current plan includes `feature`
    pub fn require(&self, feature: Feature) -> AppResult<()> {
        if self.settings.plan.allows(feature) {
            Ok(())
        } else {
            tracing::warn!(plan = %self.settings.plan, ?feature, "Feature not available on plan");
            Err(AppError::PlanRestricted(feature))
        }
    }
}

/// Service for session settings and reset
#[derive(Clone)]
pub struct SessionService {
    session: SharedSession,
}

impl SessionService {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }

    pub async fn get_settings(&self) -> SessionSettings {
        self.session.read().await.settings
    }

    /// Change plan and/or expiring window
    pub async fn update_settings(&self, input: UpdateSettingsInput) -> AppResult<SessionSettings> {
        // Validate before touching the session
        let window = input
            .expiring_window
            .map(ExpiringWindow::new)
            .transpose()?;

        let mut session = self.session.write().await;
        if let Some(plan) = input.plan {
            session.settings.plan = plan;
        }
        if let Some(window) = window {
            session.settings.expiring_window = window;
        }

        tracing::info!(
            plan = %session.settings.plan,
            window_days = session.settings.expiring_window.days(),
            "Session settings updated"
        );
        Ok(session.settings)
    }

    /// Reset all demo data to the seed
    pub async fn reset(&self) -> SessionSettings {
        let mut session = self.session.write().await;
        session.reset();
        tracing::info!(
            certificates = session.certificates.len(),
            suppliers = session.suppliers.len(),
            "Session reset to seed data"
        );
        session.settings
    }
}
