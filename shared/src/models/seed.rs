//! Seed dataset loaded once at startup

use serde::{Deserialize, Serialize};

use super::{Certificate, Supplier};

/// Suppliers and certificates the demo session starts from
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedData {
    pub suppliers: Vec<Supplier>,
    pub certificates: Vec<Certificate>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn supplier_names(&self) -> Vec<String> {
        self.suppliers.iter().map(|s| s.name.clone()).collect()
    }
}
