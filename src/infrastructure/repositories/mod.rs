//! Repository Implementations
//!
//! TOML-backed implementations of the storage ports. One file per store
//! under the data directory.

mod bank;
mod compliance;
mod document;
mod pool;
mod route;

pub use bank::{TomlBankStore, BANK_FILE};
pub use compliance::{TomlComplianceStore, COMPLIANCE_FILE};
pub use document::FORMAT_VERSION;
pub use pool::{TomlPoolStore, POOLS_FILE};
pub use route::{TomlRouteStore, ROUTES_FILE};

pub(crate) use route::TomlRoute;
