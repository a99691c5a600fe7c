//! WebAssembly module for the Halal Compliance Dashboard
//!
//! Provides client-side computation for:
//! - Certificate status from an expiry date
//! - Intake form pre-fill from an uploaded file name
//! - Offline validation of the intake form
//! - ROI estimates

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

fn js_error(message: String) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn parse(input: &str) -> Result<NaiveDate, JsValue> {
    shared::parse_date(input).map_err(|e| js_error(e.to_string()))
}

/// `today` as given, or the browser's local date when omitted
fn resolve_today(today: Option<String>) -> Result<NaiveDate, JsValue> {
    match today {
        Some(today) => parse(&today),
        None => {
            let now = js_sys::Date::new_0();
            NaiveDate::from_ymd_opt(
                now.get_full_year() as i32,
                now.get_month() + 1,
                now.get_date(),
            )
            .ok_or_else(|| js_error("Browser returned an invalid date".to_string()))
        }
    }
}

fn window(days: u32) -> Result<shared::ExpiringWindow, JsValue> {
    shared::ExpiringWindow::new(days).map_err(|e| js_error(e.to_string()))
}

/// Status badge value (VALID / EXPIRING / EXPIRED) for an expiry date
#[wasm_bindgen]
pub fn certificate_status(
    expiry_date: &str,
    today: Option<String>,
    window_days: u32,
) -> Result<String, JsValue> {
    let expiry = parse(expiry_date)?;
    let status = shared::status_from_expiry(expiry, resolve_today(today)?, window(window_days)?);
    Ok(status.as_str().to_string())
}

/// Whole days from today until expiry; negative once expired
#[wasm_bindgen]
pub fn days_until_expiry(expiry_date: &str, today: Option<String>) -> Result<i32, JsValue> {
    let days = shared::days_until(parse(expiry_date)?, resolve_today(today)?);
    i32::try_from(days).map_err(|_| js_error(format!("Expiry date out of range: {}", expiry_date)))
}

/// Guess intake fields from a file name, returned as JSON
#[wasm_bindgen]
pub fn guess_certificate_fields(
    file_name: &str,
    suppliers_json: &str,
    today: Option<String>,
) -> Result<String, JsValue> {
    let suppliers: Vec<String> = serde_json::from_str(suppliers_json)
        .map_err(|e| js_error(format!("Invalid suppliers JSON: {}", e)))?;

    let guess = shared::guess_from_filename(file_name, &suppliers, resolve_today(today)?);
    serde_json::to_string(&guess).map_err(|e| js_error(e.to_string()))
}

/// Check an intake form before it is sent; returns the first problem, if any
#[wasm_bindgen]
pub fn validate_intake_form(form_json: &str) -> Result<Option<String>, JsValue> {
    let form: SubmissionForm = serde_json::from_str(form_json)
        .map_err(|e| js_error(format!("Invalid form JSON: {}", e)))?;

    Ok(validate_submission(&form).err().map(|e| e.to_string()))
}

/// ROI estimate for both plans, returned as JSON
#[wasm_bindgen]
pub fn estimate_roi(inputs_json: &str) -> Result<String, JsValue> {
    let inputs: RoiInputs = serde_json::from_str(inputs_json)
        .map_err(|e| js_error(format!("Invalid ROI inputs JSON: {}", e)))?;
    validate_roi_inputs(&inputs).map_err(|e| js_error(e.to_string()))?;

    serde_json::to_string(&RoiEstimate::calculate(&inputs)).map_err(|e| js_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> Option<String> {
        Some("2026-10-17".to_string())
    }

    #[test]
    fn test_certificate_status() {
        assert_eq!(certificate_status("2026-10-31", today(), 30).unwrap(), "EXPIRING");
        assert_eq!(certificate_status("2026-10-31", today(), 7).unwrap(), "VALID");
        assert_eq!(certificate_status("2026-10-16", today(), 30).unwrap(), "EXPIRED");
        assert_eq!(certificate_status("2026-10-17", today(), 30).unwrap(), "EXPIRING");
    }

    #[test]
    fn test_days_until_expiry() {
        assert_eq!(days_until_expiry("2026-10-31", today()).unwrap(), 14);
        assert_eq!(days_until_expiry("2026-08-31", today()).unwrap(), -47);
    }

    #[test]
    fn test_guess_certificate_fields() {
        let json = guess_certificate_fields(
            "Doha Poultry 2027-05-01.pdf",
            r#"["ACME Foods", "Doha Poultry"]"#,
            today(),
        )
        .unwrap();
        let guess: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(guess["supplier"], "Doha Poultry");
        assert_eq!(guess["country"], "Qatar");
        assert_eq!(guess["expiry_date"], "2027-05-01");
    }

    #[test]
    fn test_validate_intake_form() {
        let form = r#"{
            "supplier": "ACME Foods",
            "country": "UAE",
            "material": "Starch",
            "cert_body": "ESMA",
            "certificate_no": "HA-2026-0001",
            "expiry_date": "2027-01-31"
        }"#;
        assert_eq!(validate_intake_form(form).unwrap(), None);

        let bad = form.replace("2027-01-31", "next year");
        assert!(validate_intake_form(&bad).unwrap().is_some());
    }

    #[test]
    fn test_estimate_roi() {
        let inputs = serde_json::to_string(&RoiInputs::default()).unwrap();
        let json = estimate_roi(&inputs).unwrap();
        let estimate: RoiEstimate = serde_json::from_str(&json).unwrap();
        assert!(estimate.core.savings > estimate.basic.savings);
    }
}
