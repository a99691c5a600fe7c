//! Filename-based field guessing for supplier intake
//!
//! Stands in for OCR: everything is read from the uploaded file's name. The
//! result only pre-fills the form the supplier confirms, so every rule here
//! is best-effort and never fails.

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Country used when the filename carries no country token
pub const DEFAULT_COUNTRY: &str = "UAE";
/// Material used when the filename has no usable words
pub const DEFAULT_MATERIAL: &str = "Halal Certificate";
/// Certification body placeholder
pub const EXTRACTED_CERT_BODY: &str = "Halal Authority (extracted)";
/// Guessed expiry when the filename has no date
pub const DEFAULT_VALIDITY_DAYS: u64 = 365;

const MATERIAL_MAX_CHARS: usize = 60;
const MATERIAL_MAX_TOKENS: usize = 4;
const MATERIAL_MIN_TOKEN_CHARS: usize = 3;

/// Checked in order; the first token found wins
const COUNTRY_TOKENS: &[(&str, &str)] = &[
    ("uae", "UAE"),
    ("dubai", "UAE"),
    ("abu", "UAE"),
    ("ksa", "KSA"),
    ("saudi", "KSA"),
    ("riyadh", "KSA"),
    ("qatar", "Qatar"),
    ("doha", "Qatar"),
    ("oman", "Oman"),
    ("kuwait", "Kuwait"),
    ("bahrain", "Bahrain"),
];

/// Year first, e.g. `2026-01-31`
static YEAR_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(20\d{2})[-_/](0[1-9]|1[0-2])[-_/](0[1-9]|[12]\d|3[01])")
        .expect("year-first date regex is valid")
});

/// Day first, e.g. `31-01-2026`
static DAY_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(0[1-9]|[12]\d|3[01])[-_/](0[1-9]|1[0-2])[-_/](20\d{2})")
        .expect("day-first date regex is valid")
});

static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[a-zA-Z0-9]+$").expect("extension regex is valid"));

/// Fields pre-filled from an uploaded file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CertificateGuess {
    pub supplier: String,
    pub country: String,
    pub material: String,
    pub cert_body: String,
    pub certificate_no: String,
    pub expiry_date: NaiveDate,
}

impl CertificateGuess {
    /// The form shown before anything has been uploaded
    pub fn placeholder(supplier_names: &[String], today: NaiveDate) -> Self {
        Self {
            supplier: supplier_names.first().cloned().unwrap_or_default(),
            country: DEFAULT_COUNTRY.to_string(),
            material: DEFAULT_MATERIAL.to_string(),
            cert_body: EXTRACTED_CERT_BODY.to_string(),
            certificate_no: format!("HA-{}-0001", today.year()),
            expiry_date: default_expiry(today),
        }
    }
}

/// Guess certificate fields from a filename
pub fn guess_from_filename(
    filename: &str,
    supplier_names: &[String],
    today: NaiveDate,
) -> CertificateGuess {
    CertificateGuess {
        supplier: guess_supplier(filename, supplier_names),
        country: guess_country(filename).to_string(),
        material: guess_material(filename),
        cert_body: EXTRACTED_CERT_BODY.to_string(),
        certificate_no: guess_certificate_no(filename, today),
        expiry_date: guess_expiry(filename).unwrap_or_else(|| default_expiry(today)),
    }
}

/// First known supplier whose name appears in the filename, ignoring case
/// and word separators. Falls back to the first supplier on the list.
///
/// Underscores and hyphens count as separators as well as spaces, so a
/// plain substring match on `acme foods` is not enough: `acme-foods.pdf`
/// and `ACME_Foods.pdf` both guess `ACME Foods`. This is wider than a
/// whitespace-only comparison and is intentional.
pub fn guess_supplier(filename: &str, supplier_names: &[String]) -> String {
    let haystack = normalize(filename);
    supplier_names
        .iter()
        .find(|name| haystack.contains(&normalize(name)))
        .or_else(|| supplier_names.first())
        .cloned()
        .unwrap_or_default()
}

/// Lowercase with spaces, underscores and hyphens removed
fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .collect()
}

pub fn guess_country(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();
    COUNTRY_TOKENS
        .iter()
        .find(|(token, _)| lower.contains(token))
        .map(|(_, country)| *country)
        .unwrap_or(DEFAULT_COUNTRY)
}

/// Date found in the filename, if any.
///
/// Both patterns are tried and a valid day-first match overrides a
/// year-first one. Matches that are not real calendar dates are skipped.
pub fn guess_expiry(filename: &str) -> Option<NaiveDate> {
    let year_first = YEAR_FIRST_RE.captures(filename).and_then(|c| {
        ymd(c.get(1)?.as_str(), c.get(2)?.as_str(), c.get(3)?.as_str())
    });
    let day_first = DAY_FIRST_RE.captures(filename).and_then(|c| {
        ymd(c.get(3)?.as_str(), c.get(2)?.as_str(), c.get(1)?.as_str())
    });
    day_first.or(year_first)
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn default_expiry(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(DEFAULT_VALIDITY_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// Words of the filename, minus extension and short tokens
pub fn guess_material(filename: &str) -> String {
    let base = EXTENSION_RE.replace(filename, "").replace(['_', '-'], " ");
    let tokens: Vec<&str> = base
        .split_whitespace()
        .filter(|t| t.chars().count() >= MATERIAL_MIN_TOKEN_CHARS)
        .take(MATERIAL_MAX_TOKENS)
        .collect();

    if tokens.is_empty() {
        return DEFAULT_MATERIAL.to_string();
    }
    tokens.join(" ").chars().take(MATERIAL_MAX_CHARS).collect()
}

/// `HA-{year}-{NNNN}` derived from a hash of the filename
pub fn guess_certificate_no(filename: &str, today: NaiveDate) -> String {
    format!("HA-{}-{:04}", today.year(), stable_hash(filename) % 10_000)
}

/// First 8 bytes of the SHA-256 digest, big-endian
fn stable_hash(s: &str) -> u64 {
    let digest = Sha256::digest(s.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}
