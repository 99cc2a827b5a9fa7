//! Banking Use Case

use chrono::{Datelike, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::BankEntry;
use crate::domain::ports::{BankStore, ComplianceStore};
use crate::domain::DomainError;
use crate::error::FuelEuResult;

use super::result::LedgerView;

/// Banking use case - deposits surplus, applies banked surplus, lists the ledger
pub struct BankingUseCase<CS, BS>
where
    CS: ComplianceStore,
    BS: BankStore,
{
    compliance: CS,
    bank: BS,
    processing_year: Option<i32>,
}

impl<CS, BS> BankingUseCase<CS, BS>
where
    CS: ComplianceStore,
    BS: BankStore,
{
    pub fn new(compliance: CS, bank: BS) -> Self {
        Self {
            compliance,
            bank,
            processing_year: None,
        }
    }

    /// Stamp withdrawals with a fixed year instead of the current UTC year
    pub fn with_processing_year(mut self, year: Option<i32>) -> Self {
        self.processing_year = year;
        self
    }

    /// Year recorded on withdrawal entries
    pub fn processing_year(&self) -> i32 {
        self.processing_year.unwrap_or_else(|| Utc::now().year())
    }

    /// Bank `amount` of the surplus earned by `ship_id` in `year`.
    pub fn bank_surplus(&self, ship_id: &str, amount: f64, year: i32) -> FuelEuResult<BankEntry> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(DomainError::InvalidAmount { amount }.into());
        }

        let record = self
            .compliance
            .find_by_ship_and_year(ship_id, year)?
            .ok_or_else(|| DomainError::ComplianceRecordNotFound {
                ship_id: ship_id.to_string(),
                year,
            })?;

        if record.cb_gco2eq <= 0.0 || amount > record.cb_gco2eq {
            warn!(
                ship_id,
                year,
                amount,
                cb = record.cb_gco2eq,
                "bank deposit exceeds surplus"
            );
            return Err(DomainError::InsufficientSurplus {
                ship_id: ship_id.to_string(),
            }
            .into());
        }

        let entry = BankEntry::deposit(Uuid::new_v4().to_string(), ship_id, year, amount);
        self.bank.save(&entry)?;

        info!(ship_id, year, amount, entry_id = %entry.id, "banked surplus");
        Ok(entry)
    }

    /// Apply `amount` of the surplus banked by `ship_id`.
    pub fn apply_banked_surplus(&self, ship_id: &str, amount: f64) -> FuelEuResult<BankEntry> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(DomainError::InvalidAmount { amount }.into());
        }

        let available = self.bank.get_total_banked(ship_id)?;
        if amount > available {
            warn!(ship_id, amount, available, "withdrawal exceeds banked total");
            return Err(DomainError::InsufficientBanked {
                ship_id: ship_id.to_string(),
                requested: amount,
                available,
            }
            .into());
        }

        let year = self.processing_year();
        let entry = BankEntry::withdrawal(Uuid::new_v4().to_string(), ship_id, year, amount);
        self.bank.save(&entry)?;

        info!(ship_id, year, amount, entry_id = %entry.id, "applied banked surplus");
        Ok(entry)
    }

    /// All ledger entries, or those of one ship
    pub fn ledger(&self, ship_id: Option<&str>) -> FuelEuResult<LedgerView> {
        debug!(ship_id, "listing bank ledger");
        let entries = match ship_id {
            Some(ship) => self.bank.find_by_ship_id(ship)?,
            None => self.bank.find_all()?,
        };
        Ok(LedgerView::new(ship_id.map(str::to_string), entries))
    }
}
