//! Compliance Use Cases
//!
//! - `compute` recomputes and stores the CB snapshot of every route
//! - `adjusted` reports CB with the banked total applied, without writing

mod adjusted;
mod compute;

pub use adjusted::{AdjustedBalance, AdjustedBalanceUseCase};
pub use compute::ComputeComplianceUseCase;
