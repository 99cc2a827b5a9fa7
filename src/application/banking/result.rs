//! Ledger listing

use crate::domain::entities::{total_banked, BankEntry};

/// Ledger entries with a running total
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerView {
    /// `Some` when the listing is restricted to one ship
    pub ship_id: Option<String>,
    pub entries: Vec<LedgerLine>,
    pub total: f64,
}

/// One ledger entry and the balance after it
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerLine {
    pub entry: BankEntry,
    pub running_total: f64,
}

impl LedgerView {
    pub fn new(ship_id: Option<String>, entries: Vec<BankEntry>) -> Self {
        let total = total_banked(&entries);
        let mut running_total = 0.0;
        let entries = entries
            .into_iter()
            .map(|entry| {
                running_total += entry.amount_gco2eq;
                LedgerLine {
                    entry,
                    running_total,
                }
            })
            .collect();

        Self {
            ship_id,
            entries,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
