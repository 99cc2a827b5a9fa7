//! Application Layer
//!
//! Use cases that orchestrate the domain over the storage ports.
//!
//! ## Use Cases
//!
//! - `routes` - list routes, set the baseline, compare, seed and import
//! - `compliance` - compute CB snapshots and the banking-adjusted view
//! - `banking` - bank surplus, apply banked surplus, list the ledger
//! - `pooling` - create pools and query them
//!
//! Use cases are generic over their ports and own them; pass `&store` to
//! keep using a store after the use case is done.

pub mod banking;
pub mod compliance;
pub mod pooling;
pub mod routes;

#[cfg(test)]
pub(crate) mod testing;

pub use banking::{BankingUseCase, LedgerLine, LedgerView};
pub use compliance::{AdjustedBalance, AdjustedBalanceUseCase, ComputeComplianceUseCase};
pub use pooling::{CreatePoolOptions, CreatePoolUseCase, PoolQueryUseCase, PoolResult};
pub use routes::{ImportSummary, RouteUseCase};
