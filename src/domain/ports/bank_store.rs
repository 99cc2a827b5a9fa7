//! BankStore port
//!
//! Append-only banking ledger. Entries are never updated or removed.

use crate::domain::entities::BankEntry;

use super::StoreResult;

pub trait BankStore {
    fn find_by_ship_id(&self, ship_id: &str) -> StoreResult<Vec<BankEntry>>;

    /// Sum of every entry of the ship (deposits minus withdrawals)
    fn get_total_banked(&self, ship_id: &str) -> StoreResult<f64>;

    fn save(&self, entry: &BankEntry) -> StoreResult<()>;

    fn find_all(&self) -> StoreResult<Vec<BankEntry>>;
}

impl<T: BankStore + ?Sized> BankStore for &T {
    fn find_by_ship_id(&self, ship_id: &str) -> StoreResult<Vec<BankEntry>> {
        (**self).find_by_ship_id(ship_id)
    }

    fn get_total_banked(&self, ship_id: &str) -> StoreResult<f64> {
        (**self).get_total_banked(ship_id)
    }

    fn save(&self, entry: &BankEntry) -> StoreResult<()> {
        (**self).save(entry)
    }

    fn find_all(&self) -> StoreResult<Vec<BankEntry>> {
        (**self).find_all()
    }
}
