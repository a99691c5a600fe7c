//! Supplier-level compliance derived from certificate rows

use crate::models::{CertificateRow, ComplianceStatus, Supplier, SupplierCompliance};

/// Compliance of every known supplier, in reference-list order.
///
/// A supplier's status is the worst status among the rows whose `supplier`
/// equals its name exactly; the nearest expiry is the minimum days-until over
/// that same set. Rows naming unknown suppliers are ignored.
pub fn supplier_compliance(
    suppliers: &[Supplier],
    rows: &[CertificateRow],
) -> Vec<SupplierCompliance> {
    suppliers
        .iter()
        .map(|supplier| {
            let own: Vec<&CertificateRow> =
                rows.iter().filter(|r| r.supplier == supplier.name).collect();

            let status = own
                .iter()
                .map(|r| r.status)
                .max()
                .map(ComplianceStatus::from)
                .unwrap_or(ComplianceStatus::Missing);
            let nearest_expiry_days = own.iter().map(|r| r.days_until_expiry).min();

            SupplierCompliance {
                supplier: supplier.name.clone(),
                category: supplier.category.clone(),
                country: supplier.country.clone(),
                status,
                nearest_expiry_days,
            }
        })
        .collect()
}

/// Suppliers with at least one expiring or expired certificate, first-seen
/// order over `rows`
pub fn urgent_suppliers(rows: &[CertificateRow]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for row in rows.iter().filter(|r| r.status.is_urgent()) {
        if !names.contains(&row.supplier) {
            names.push(row.supplier.clone());
        }
    }
    names
}
