//! Certificate expiry status
//!
//! Status is never stored. It is derived from the expiry date, the current
//! day and the expiring window every time it is read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::CertificateStatus;
use crate::validation::ValidationError;

/// Date format accepted on forms and in the seed file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Failed to read a `YYYY-MM-DD` date
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Expiry Date must be in YYYY-MM-DD format, got '{input}'")]
pub struct DateParseError {
    pub input: String,
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| DateParseError {
        input: input.to_string(),
    })
}

/// Days until `expiry`, negative once it has passed
pub fn days_until(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// How many days ahead a certificate counts as expiring
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub struct ExpiringWindow(u32);

impl ExpiringWindow {
    pub const MIN_DAYS: u32 = 7;
    pub const MAX_DAYS: u32 = 90;
    pub const DEFAULT_DAYS: u32 = 30;

    pub fn new(days: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN_DAYS..=Self::MAX_DAYS).contains(&days) {
            return Err(ValidationError::OutOfRange {
                field: "expiring_window",
                value: i64::from(days),
                min: i64::from(Self::MIN_DAYS),
                max: i64::from(Self::MAX_DAYS),
            });
        }
        Ok(Self(days))
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

impl Default for ExpiringWindow {
    fn default() -> Self {
        Self(Self::DEFAULT_DAYS)
    }
}

impl TryFrom<u32> for ExpiringWindow {
    type Error = ValidationError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<ExpiringWindow> for u32 {
    fn from(window: ExpiringWindow) -> Self {
        window.0
    }
}

/// Classify a certificate by its expiry date
pub fn status_from_expiry(
    expiry: NaiveDate,
    today: NaiveDate,
    window: ExpiringWindow,
) -> CertificateStatus {
    let days = days_until(expiry, today);
    if days < 0 {
        CertificateStatus::Expired
    } else if days <= i64::from(window.days()) {
        CertificateStatus::Expiring
    } else {
        CertificateStatus::Valid
    }
}
