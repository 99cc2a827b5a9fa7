//! Domain Services
//!
//! Pure calculations over domain entities. No I/O.

mod comparison;
mod compliance_calculator;
mod pool_allocator;

pub use comparison::{compare_routes, RouteComparison};
pub use compliance_calculator::{
    compute_compliance_balance, compute_energy, ENERGY_FACTOR, TARGET_INTENSITY,
};
pub use pool_allocator::{
    allocate_pool, verify_allocation, PoolAllocation, ShipBalance, CONSERVATION_TOLERANCE,
};
