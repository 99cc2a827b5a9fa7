//! TOML Bank Store
//!
//! Append-only ledger at `<data_dir>/bank.toml`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{total_banked, BankEntry};
use crate::domain::ports::{BankStore, StoreResult};

use super::document::{TomlDocument, FORMAT_VERSION};

pub const BANK_FILE: &str = "bank.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlBankEntry {
    id: String,
    ship_id: String,
    year: i32,
    amount_gco2eq: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct BankDocument {
    version: u32,
    #[serde(default)]
    entries: Vec<TomlBankEntry>,
}

impl Default for BankDocument {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: Vec::new(),
        }
    }
}

pub struct TomlBankStore {
    document: TomlDocument,
}

impl TomlBankStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            document: TomlDocument::new(data_dir.join(BANK_FILE)),
        }
    }
}

impl BankStore for TomlBankStore {
    fn find_by_ship_id(&self, ship_id: &str) -> StoreResult<Vec<BankEntry>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|e| e.ship_id == ship_id)
            .collect())
    }

    fn get_total_banked(&self, ship_id: &str) -> StoreResult<f64> {
        let entries = self.find_by_ship_id(ship_id)?;
        let total = total_banked(&entries);
        debug!(ship_id, total, "banked total");
        Ok(total)
    }

    fn save(&self, entry: &BankEntry) -> StoreResult<()> {
        let mut doc: BankDocument = self.document.load()?;
        doc.entries.push(TomlBankEntry {
            id: entry.id.clone(),
            ship_id: entry.ship_id.clone(),
            year: entry.year,
            amount_gco2eq: entry.amount_gco2eq,
        });
        self.document.save(&doc)
    }

    fn find_all(&self) -> StoreResult<Vec<BankEntry>> {
        let doc: BankDocument = self.document.load()?;
        Ok(doc
            .entries
            .into_iter()
            .map(|e| BankEntry {
                id: e.id,
                ship_id: e.ship_id,
                year: e.year,
                amount_gco2eq: e.amount_gco2eq,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn entries_append_in_order() {
        let dir = tempdir().unwrap();
        let store = TomlBankStore::new(dir.path());

        store
            .save(&BankEntry::deposit("b-1", "R002", 2024, 300.0))
            .unwrap();
        store
            .save(&BankEntry::deposit("b-2", "R004", 2025, 50.0))
            .unwrap();
        store
            .save(&BankEntry::withdrawal("b-3", "R002", 2025, 120.0))
            .unwrap();

        let ids: Vec<String> = store.find_all().unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["b-1", "b-2", "b-3"]);
        assert_eq!(store.find_by_ship_id("R002").unwrap().len(), 2);
        assert_eq!(store.get_total_banked("R002").unwrap(), 180.0);
        assert_eq!(store.get_total_banked("R999").unwrap(), 0.0);
    }
}
