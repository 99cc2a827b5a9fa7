//! Pooling Use Cases
//!
//! Creating a pool:
//! - Rejects ship lists that name a ship twice
//! - Loads each ship's compliance balance for the pool year (fail fast)
//! - Rejects ships already pooled in the same year
//! - Runs the pool allocator and persists the pool with its members
//!
//! Querying pools by id or by year.

mod options;
mod query;
mod result;
mod use_case;

pub use options::CreatePoolOptions;
pub use query::PoolQueryUseCase;
pub use result::PoolResult;
pub use use_case::CreatePoolUseCase;
