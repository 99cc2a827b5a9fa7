//! Adjusted Compliance Balance Use Case

use tracing::debug;

use crate::domain::ports::{BankStore, ComplianceStore};
use crate::domain::value_objects::CbStatus;
use crate::error::FuelEuResult;

/// Stored CB with the ship's banked total applied
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedBalance {
    pub ship_id: String,
    pub year: i32,
    pub raw_cb: f64,
    pub banked: f64,
    /// `raw_cb + banked`
    pub adjusted_cb: f64,
}

impl AdjustedBalance {
    pub fn status(&self) -> CbStatus {
        CbStatus::of(self.adjusted_cb)
    }
}

pub struct AdjustedBalanceUseCase<CS, BS>
where
    CS: ComplianceStore,
    BS: BankStore,
{
    compliance: CS,
    bank: BS,
}

impl<CS, BS> AdjustedBalanceUseCase<CS, BS>
where
    CS: ComplianceStore,
    BS: BankStore,
{
    pub fn new(compliance: CS, bank: BS) -> Self {
        Self { compliance, bank }
    }

    pub fn execute(&self, year: Option<i32>) -> FuelEuResult<Vec<AdjustedBalance>> {
        let records = self.compliance.find_all(year)?;
        debug!(records = records.len(), ?year, "adjusting compliance balances");

        records
            .into_iter()
            .map(|record| {
                let banked = self.bank.get_total_banked(&record.ship_id)?;
                Ok(AdjustedBalance {
                    adjusted_cb: record.cb_gco2eq + banked,
                    raw_cb: record.cb_gco2eq,
                    banked,
                    ship_id: record.ship_id,
                    year: record.year,
                })
            })
            .collect()
    }
}
