//! Reminder centre
//!
//! Reminders are only logged; nothing is sent.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::{validate_known_supplier, Feature, ReminderChannel, ReminderLogEntry, ReminderReason};
use validator::Validate;

use crate::error::AppResult;
use crate::services::session::SharedSession;

/// Reminder service
#[derive(Clone)]
pub struct ReminderService {
    session: SharedSession,
}

/// Input for logging a reminder
#[derive(Debug, Deserialize, Validate)]
pub struct LogReminderInput {
    #[validate(length(min = 1, message = "Supplier is required"))]
    pub supplier: String,
    pub reason: ReminderReason,
    #[serde(default)]
    pub channel: ReminderChannel,
}

impl ReminderService {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }

    /// Log a reminder to a known supplier
    pub async fn log_reminder(
        &self,
        input: LogReminderInput,
        now: DateTime<Utc>,
    ) -> AppResult<ReminderLogEntry> {
        input.validate()?;

        let mut session = self.session.write().await;
        session.require(Feature::ReminderCentre)?;
        validate_known_supplier(&input.supplier, &session.supplier_names())?;

        let entry = ReminderLogEntry {
            time: now,
            supplier: input.supplier,
            reason: input.reason,
            channel: input.channel,
        };
        session.reminder_log.insert(0, entry.clone());

        tracing::info!(
            supplier = %entry.supplier,
            channel = %entry.channel,
            reason = %entry.reason,
            "Reminder logged"
        );
        Ok(entry)
    }

    /// Reminder log, newest first
    pub async fn list(&self) -> AppResult<Vec<ReminderLogEntry>> {
        let session = self.session.read().await;
        session.require(Feature::ReminderCentre)?;
        Ok(session.reminder_log.clone())
    }
}
