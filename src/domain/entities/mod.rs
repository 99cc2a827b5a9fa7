//! Domain Entities
//!
//! Records that have identity and a lifecycle.
//! - `Route` - A voyage with fuel and emissions data
//! - `ComplianceBalance` - Derived CB snapshot per ship/year
//! - `BankEntry` - Append-only banking ledger line
//! - `Pool` / `PoolMember` - Outcome of a pooling allocation

mod bank_entry;
mod compliance_balance;
mod pool;
mod route;

pub(crate) use bank_entry::total_of as total_banked;
pub use bank_entry::BankEntry;
pub use compliance_balance::ComplianceBalance;
pub use pool::{Pool, PoolMember, PoolRecord};
pub use route::Route;
