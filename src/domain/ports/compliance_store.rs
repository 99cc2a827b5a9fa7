//! ComplianceStore port
//!
//! Cached compliance balance snapshots, unique on (ship, year).

use crate::domain::entities::ComplianceBalance;

use super::StoreResult;

pub trait ComplianceStore {
    fn find_by_ship_and_year(
        &self,
        ship_id: &str,
        year: i32,
    ) -> StoreResult<Option<ComplianceBalance>>;

    fn find_all(&self, year: Option<i32>) -> StoreResult<Vec<ComplianceBalance>>;

    /// Upsert on (ship, year)
    fn save(&self, record: &ComplianceBalance) -> StoreResult<()>;

    /// Upsert many records as one write
    fn save_all(&self, records: &[ComplianceBalance]) -> StoreResult<()>;
}

impl<T: ComplianceStore + ?Sized> ComplianceStore for &T {
    fn find_by_ship_and_year(
        &self,
        ship_id: &str,
        year: i32,
    ) -> StoreResult<Option<ComplianceBalance>> {
        (**self).find_by_ship_and_year(ship_id, year)
    }

    fn find_all(&self, year: Option<i32>) -> StoreResult<Vec<ComplianceBalance>> {
        (**self).find_all(year)
    }

    fn save(&self, record: &ComplianceBalance) -> StoreResult<()> {
        (**self).save(record)
    }

    fn save_all(&self, records: &[ComplianceBalance]) -> StoreResult<()> {
        (**self).save_all(records)
    }
}
