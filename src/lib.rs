//! fueleu - maritime fuel-compliance ledger
//!
//! Computes compliance balances from voyage data, keeps a banking ledger of
//! surplus, and pools ships so that aggregate surplus offsets aggregate
//! deficit.
//!
//! ## Layers
//!
//! - `domain` - entities, pure calculations (including the pool allocator) and storage ports
//! - `application` - use cases orchestrating the domain over the ports
//! - `infrastructure` - TOML-backed stores, the data directory lock and sample data
//! - `config` - layered configuration
//! - `presentation` - CLI definition, use case wiring and text rendering

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use config::Config;
pub use domain::entities::{BankEntry, ComplianceBalance, Pool, PoolMember, PoolRecord, Route};
pub use domain::services::{allocate_pool, compute_compliance_balance, PoolAllocation, ShipBalance};
pub use domain::DomainError;
pub use error::{ErrorCategory, FuelEuError, FuelEuResult};
