//! ComplianceBalance entity - derived CB snapshot
//!
//! A cache of a pure computation over `Route`, unique on (ship_id, year).
//! Recomputing overwrites the previous snapshot.

use crate::domain::entities::Route;
use crate::domain::value_objects::CbStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceBalance {
    /// Ship identifier (the route id)
    pub ship_id: String,
    pub year: i32,
    /// Positive = surplus, negative = deficit
    pub cb_gco2eq: f64,
}

impl ComplianceBalance {
    pub fn new(ship_id: impl Into<String>, year: i32, cb_gco2eq: f64) -> Self {
        Self {
            ship_id: ship_id.into(),
            year,
            cb_gco2eq,
        }
    }

    /// Compute the snapshot for a route
    pub fn from_route(route: &Route) -> Self {
        Self::new(route.route_id.clone(), route.year, route.compliance_balance())
    }

    pub fn status(&self) -> CbStatus {
        CbStatus::of(self.cb_gco2eq)
    }

    /// Whether this record occupies the same (ship, year) slot
    pub fn same_key(&self, other: &ComplianceBalance) -> bool {
        self.ship_id == other.ship_id && self.year == other.year
    }
}
