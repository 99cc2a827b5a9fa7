//! Route Use Cases
//!
//! Listing, baseline selection, comparison against the baseline, and
//! loading routes from sample data or an import file.

mod use_case;

pub use use_case::{ImportSummary, RouteUseCase};
