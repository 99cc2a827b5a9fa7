//! Terminal and JSON output for the `fueleu` binary

pub mod context;
pub mod error;
pub mod json;
pub mod terminal;
