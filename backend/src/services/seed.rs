//! Seed data loading

use std::path::Path;

use anyhow::Context;
use shared::SeedData;

/// Read the seed dataset once at startup
pub fn load_seed(path: impl AsRef<Path>) -> anyhow::Result<SeedData> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let seed = SeedData::from_json(&json)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

    tracing::info!(
        suppliers = seed.suppliers.len(),
        certificates = seed.certificates.len(),
        "Seed data loaded from {}",
        path.display()
    );
    Ok(seed)
}
