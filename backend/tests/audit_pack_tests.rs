//! Audit pack export tests
//!
//! Tests for the zip export including:
//! - README plus one entry per selected certificate
//! - Entry naming convention
//! - Every certificate field present in each entry

use std::io::{Cursor, Read};

use chrono::NaiveDate;
use halal_compliance_backend::error::AppError;
use halal_compliance_backend::services::audit_pack::{
    build_audit_pack, entry_name, ExportInput, README_ENTRY_NAME,
};
use halal_compliance_backend::services::{AuditPackService, Session, SessionSettings};
use proptest::prelude::*;
use shared::{CertificateRow, CertificateStatus, SeedData};
use zip::ZipArchive;

const SEED: &str = include_str!("../data/demo_seed.json");

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn service() -> AuditPackService {
    let seed = SeedData::from_json(SEED).unwrap();
    AuditPackService::new(Session::new(seed, SessionSettings::default()).shared())
}

fn row(id: &str, supplier: &str, material: &str) -> CertificateRow {
    CertificateRow {
        certificate_id: id.to_string(),
        supplier: supplier.to_string(),
        material: material.to_string(),
        cert_body: "ESMA".to_string(),
        country: "UAE".to_string(),
        issue_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        expiry_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        days_until_expiry: 75,
        status: CertificateStatus::Valid,
        file_name: "acme.pdf".to_string(),
    }
}

fn entry_names(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    archive.file_names().map(str::to_string).collect()
}

fn read_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut contents = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    contents
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Two rows produce a README and two certificate entries
    #[test]
    fn test_two_rows_three_entries() {
        let rows = vec![
            row("CERT-001", "ACME Foods", "Modified Starch"),
            row("CERT-002", "Gulf Spices", "Black Pepper Ground"),
        ];
        let bytes = build_audit_pack(&rows).unwrap();

        let mut names = entry_names(&bytes);
        names.sort();
        assert_eq!(
            names,
            vec![
                "CERT-001__ACME_Foods__Modified_Starch.txt".to_string(),
                "CERT-002__Gulf_Spices__Black_Pepper_Ground.txt".to_string(),
                README_ENTRY_NAME.to_string(),
            ]
        );
    }

    /// Rows sharing an entry name are all written with a numbered suffix
    #[test]
    fn test_duplicate_rows_are_numbered() {
        let rows = vec![
            row("CERT-008", "ACME Foods", "Starch"),
            row("CERT-008", "ACME Foods", "Starch"),
            row("CERT-008", "ACME Foods", "Starch"),
        ];
        let bytes = build_audit_pack(&rows).unwrap();

        let mut names = entry_names(&bytes);
        names.sort();
        assert_eq!(
            names,
            vec![
                "CERT-008__ACME_Foods__Starch.txt".to_string(),
                "CERT-008__ACME_Foods__Starch__2.txt".to_string(),
                "CERT-008__ACME_Foods__Starch__3.txt".to_string(),
                README_ENTRY_NAME.to_string(),
            ]
        );
        let second = read_entry(&bytes, "CERT-008__ACME_Foods__Starch__2.txt");
        assert!(second.contains("Certificate ID: CERT-008"));
    }

    /// Every field appears as a labelled line
    #[test]
    fn test_entry_contains_all_fields() {
        let rows = vec![row("CERT-001", "ACME Foods", "Modified Starch")];
        let bytes = build_audit_pack(&rows).unwrap();
        let contents = read_entry(&bytes, "CERT-001__ACME_Foods__Modified_Starch.txt");

        for line in [
            "Certificate ID: CERT-001",
            "Supplier: ACME Foods",
            "Material: Modified Starch",
            "Cert Body: ESMA",
            "Country: UAE",
            "Issue Date: 2026-01-01",
            "Expiry Date: 2026-12-31",
            "Status: VALID",
            "File: acme.pdf",
        ] {
            assert!(contents.contains(line), "missing line {:?}", line);
        }
    }

    /// The README is always present, even for an empty selection
    #[test]
    fn test_readme_only_for_no_rows() {
        let bytes = build_audit_pack(&[]).unwrap();
        assert_eq!(entry_names(&bytes), vec![README_ENTRY_NAME.to_string()]);
        assert!(read_entry(&bytes, README_ENTRY_NAME).starts_with("Demo Audit Pack"));
    }

    /// Exporting nothing through the service is refused
    #[tokio::test]
    async fn test_export_requires_selection() {
        let result = service()
            .export(ExportInput { certificate_ids: vec![] }, today())
            .await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    /// Unknown certificate ids are reported
    #[tokio::test]
    async fn test_export_unknown_id() {
        let result = service()
            .export(
                ExportInput {
                    certificate_ids: vec!["CERT-999".to_string()],
                },
                today(),
            )
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    /// Statuses in the export reflect today's date
    #[tokio::test]
    async fn test_export_uses_derived_status() {
        let bytes = service()
            .export(
                ExportInput {
                    certificate_ids: vec!["CERT-003".to_string(), "CERT-001".to_string()],
                },
                today(),
            )
            .await
            .unwrap();

        assert_eq!(entry_names(&bytes).len(), 3);
        let expired = read_entry(&bytes, "CERT-003__Gulf_Spices__Black_Pepper_Ground.txt");
        assert!(expired.contains("Status: EXPIRED"));
        let expiring = read_entry(&bytes, "CERT-001__ACME_Foods__Modified_Starch.txt");
        assert!(expiring.contains("Status: EXPIRING"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        /// Entry names never contain spaces
        #[test]
        fn prop_entry_name_has_no_spaces(
            supplier in "[A-Za-z ]{1,20}",
            material in "[A-Za-z0-9 ]{1,30}",
        ) {
            let name = entry_name(&row("CERT-010", &supplier, &material));
            prop_assert!(!name.contains(' '));
            prop_assert!(name.starts_with("CERT-010__"));
            prop_assert!(name.ends_with(".txt"));
        }

        /// Archive always holds one entry per row plus the README
        #[test]
        fn prop_entry_count(count in 0usize..6) {
            let rows: Vec<CertificateRow> = (0..count)
                .map(|i| row(&format!("CERT-{:03}", i + 1), "ACME Foods", "Starch"))
                .collect();
            let bytes = build_audit_pack(&rows).unwrap();
            prop_assert_eq!(entry_names(&bytes).len(), count + 1);
        }
    }
}
