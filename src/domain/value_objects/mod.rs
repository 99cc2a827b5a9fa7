//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cb_status;
mod fuel_type;
mod vessel_type;

pub use cb_status::CbStatus;
pub use fuel_type::FuelType;
pub use vessel_type::VesselType;
