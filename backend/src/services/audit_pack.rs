//! Audit pack export
//!
//! Builds a zip with a README and one text file per selected certificate.

use std::collections::HashMap;
use std::io::{Cursor, Write};

use chrono::NaiveDate;
use serde::Deserialize;
use shared::CertificateRow;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::error::{AppError, AppResult};
use crate::services::session::SharedSession;

/// Download name of the archive
pub const AUDIT_PACK_FILE_NAME: &str = "audit_pack_demo.zip";
pub const README_ENTRY_NAME: &str = "README_AUDIT_PACK.txt";
const README_CONTENTS: &str = "Demo Audit Pack\n\nThis is a demo export. In production, this would include the actual PDF certificates and evidence logs.\n";

/// Audit pack service
#[derive(Clone)]
pub struct AuditPackService {
    session: SharedSession,
}

/// Certificates selected for export
#[derive(Debug, Deserialize)]
pub struct ExportInput {
    pub certificate_ids: Vec<String>,
}

impl AuditPackService {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }

    /// Export the selected certificates, in vault order
    pub async fn export(&self, input: ExportInput, today: NaiveDate) -> AppResult<Vec<u8>> {
        if input.certificate_ids.is_empty() {
            return Err(AppError::ValidationError(
                "Select 1+ certificates to export an audit pack".to_string(),
            ));
        }

        let rows = self.session.read().await.rows(today);
        if let Some(missing) = input
            .certificate_ids
            .iter()
            .find(|id| !rows.iter().any(|r| &r.certificate_id == *id))
        {
            return Err(AppError::NotFound(format!("Certificate {}", missing)));
        }

        let selected: Vec<CertificateRow> = rows
            .into_iter()
            .filter(|r| input.certificate_ids.contains(&r.certificate_id))
            .collect();

        let bytes = build_audit_pack(&selected)?;
        tracing::debug!(certificates = selected.len(), bytes = bytes.len(), "Audit pack built");
        Ok(bytes)
    }
}

/// Zip a README plus one entry per row. Rows that would share an entry name
/// get a `__2`, `__3`... suffix so every row is written.
pub fn build_audit_pack(rows: &[CertificateRow]) -> AppResult<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    zip.start_file(README_ENTRY_NAME, entry_options())?;
    zip.write_all(README_CONTENTS.as_bytes())?;

    let mut seen: HashMap<String, usize> = HashMap::new();
    for row in rows {
        let name = entry_name(row);
        let count = seen.entry(name.clone()).or_insert(0);
        *count += 1;
        let name = match *count {
            1 => name,
            n => numbered_entry_name(&name, n),
        };

        zip.start_file(name, entry_options())?;
        zip.write_all(entry_contents(row).as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

/// `name__{n}.txt` for the n-th row sharing an entry name
fn numbered_entry_name(name: &str, n: usize) -> String {
    let stem = name.strip_suffix(".txt").unwrap_or(name);
    format!("{}__{}.txt", stem, n)
}

/// `{id}__{Supplier}__{Material}.txt` with spaces replaced by underscores
pub fn entry_name(row: &CertificateRow) -> String {
    format!(
        "{}__{}__{}.txt",
        row.certificate_id,
        row.supplier.replace(' ', "_"),
        row.material.replace(' ', "_")
    )
}

/// One `Key: value` line per field
pub fn entry_contents(row: &CertificateRow) -> String {
    format!(
        "Certificate ID: {}\n\
         Supplier: {}\n\
         Material: {}\n\
         Cert Body: {}\n\
         Country: {}\n\
         Issue Date: {}\n\
         Expiry Date: {}\n\
         Status: {}\n\
         File: {}\n",
        row.certificate_id,
        row.supplier,
        row.material,
        row.cert_body,
        row.country,
        row.issue_date.format("%Y-%m-%d"),
        row.expiry_date.format("%Y-%m-%d"),
        row.status,
        row.file_name
    )
}
