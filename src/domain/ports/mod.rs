//! Domain Ports (Interfaces)
//!
//! Storage boundaries of the ledger. The infrastructure layer provides the
//! file-backed implementations; use case tests provide in-memory ones.

pub mod bank_store;
pub mod compliance_store;
pub mod pool_store;
pub mod route_store;
pub mod store_error;

pub use bank_store::BankStore;
pub use compliance_store::ComplianceStore;
pub use pool_store::PoolStore;
pub use route_store::RouteStore;
pub use store_error::{StoreError, StoreResult};
