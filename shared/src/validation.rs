//! Validation utilities for the Halal Compliance Dashboard

use chrono::NaiveDate;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::{RoiInputs, SubmissionForm};
use crate::status::parse_date;

/// Input rejected before any state is touched
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    Field { field: String, message: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Field { field, .. } => field,
            ValidationError::OutOfRange { field, .. } => field,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationError::Field { message, .. } => message.clone(),
            ValidationError::OutOfRange { .. } => self.to_string(),
        }
    }
}

impl From<ValidationErrors> for ValidationError {
    /// Keeps the first failing field, by name, so the report is stable
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<&&str> = field_errors.keys().collect();
        fields.sort();

        match fields.first() {
            Some(&&field) => {
                let message = field_errors
                    .get(field)
                    .and_then(|errs| errs.first())
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| format!("{} is invalid", field));
                ValidationError::Field {
                    field: field.to_string(),
                    message,
                }
            }
            None => ValidationError::Field {
                field: "input".to_string(),
                message: errors.to_string(),
            },
        }
    }
}

/// Check a submission form and return its parsed expiry date.
///
/// Only the expiry date can fail; blank supplier or material are accepted.
pub fn validate_submission(form: &SubmissionForm) -> Result<NaiveDate, ValidationError> {
    parse_date(&form.expiry_date).map_err(|e| ValidationError::Field {
        field: "expiry_date".to_string(),
        message: e.to_string(),
    })
}

/// Check ROI inputs against the calculator's ranges
pub fn validate_roi_inputs(inputs: &RoiInputs) -> Result<(), ValidationError> {
    inputs.validate().map_err(ValidationError::from)
}

/// Check that a name is on the supplier reference list
pub fn validate_known_supplier(name: &str, supplier_names: &[String]) -> Result<(), ValidationError> {
    if supplier_names.iter().any(|s| s == name) {
        Ok(())
    } else {
        Err(ValidationError::Field {
            field: "supplier".to_string(),
            message: format!("Unknown supplier: {}", name),
        })
    }
}
