//! TOML Compliance Store
//!
//! Persists CB snapshots at `<data_dir>/compliance.toml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::ComplianceBalance;
use crate::domain::ports::{ComplianceStore, StoreResult};

use super::document::{TomlDocument, FORMAT_VERSION};

pub const COMPLIANCE_FILE: &str = "compliance.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlComplianceRecord {
    ship_id: String,
    year: i32,
    cb_gco2eq: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct ComplianceDocument {
    version: u32,
    #[serde(default)]
    records: Vec<TomlComplianceRecord>,
}

impl Default for ComplianceDocument {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            records: Vec::new(),
        }
    }
}

pub struct TomlComplianceStore {
    document: TomlDocument,
}

impl TomlComplianceStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            document: TomlDocument::new(data_dir.join(COMPLIANCE_FILE)),
        }
    }

    fn load(&self) -> StoreResult<Vec<ComplianceBalance>> {
        let doc: ComplianceDocument = self.document.load()?;
        Ok(doc
            .records
            .into_iter()
            .map(|r| ComplianceBalance::new(r.ship_id, r.year, r.cb_gco2eq))
            .collect())
    }
}

impl ComplianceStore for TomlComplianceStore {
    fn find_by_ship_and_year(
        &self,
        ship_id: &str,
        year: i32,
    ) -> StoreResult<Option<ComplianceBalance>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|r| r.ship_id == ship_id && r.year == year))
    }

    fn find_all(&self, year: Option<i32>) -> StoreResult<Vec<ComplianceBalance>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|r| year.map_or(true, |y| r.year == y))
            .collect())
    }

    fn save(&self, record: &ComplianceBalance) -> StoreResult<()> {
        self.save_all(std::slice::from_ref(record))
    }

    fn save_all(&self, records: &[ComplianceBalance]) -> StoreResult<()> {
        let mut stored = self.load()?;
        for record in records {
            match stored.iter_mut().find(|r| r.same_key(record)) {
                Some(existing) => existing.cb_gco2eq = record.cb_gco2eq,
                None => stored.push(record.clone()),
            }
        }

        self.document.save(&ComplianceDocument {
            version: FORMAT_VERSION,
            records: stored
                .into_iter()
                .map(|r| TomlComplianceRecord {
                    ship_id: r.ship_id,
                    year: r.year,
                    cb_gco2eq: r.cb_gco2eq,
                })
                .collect(),
        })
    }
}
