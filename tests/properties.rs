//! Property tests for fueleu.
//!
//! Randomized inputs protect the allocator invariants: conservation,
//! direction of transfers, zero invariance and stable ordering.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/pool_allocation.rs"]
mod pool_allocation;
