//! Route entity - a voyage record
//!
//! Routes are the source data for compliance calculations. The route id
//! doubles as the ship id of the derived compliance records.

use crate::domain::services::compute_compliance_balance;
use crate::domain::value_objects::{FuelType, VesselType};

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Business identifier (e.g. R001)
    pub route_id: String,
    pub vessel_type: VesselType,
    pub fuel_type: FuelType,
    /// Reporting year
    pub year: i32,
    /// GHG intensity in gCO2e/MJ
    pub ghg_intensity: f64,
    /// Fuel consumption in tonnes
    pub fuel_consumption: f64,
    /// Distance in km
    pub distance: f64,
    /// Total emissions in tonnes
    pub total_emissions: f64,
    /// Reference route for comparisons (at most one)
    pub is_baseline: bool,
}

impl Route {
    /// Compliance balance of this voyage in gCO2eq
    pub fn compliance_balance(&self) -> f64 {
        compute_compliance_balance(self.ghg_intensity, self.fuel_consumption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(ghg_intensity: f64, fuel_consumption: f64) -> Route {
        Route {
            route_id: "R001".to_string(),
            vessel_type: VesselType::Container,
            fuel_type: FuelType::Hfo,
            year: 2024,
            ghg_intensity,
            fuel_consumption,
            distance: 12_000.0,
            total_emissions: 4_500.0,
            is_baseline: false,
        }
    }

    #[test]
    fn route_above_target_has_deficit() {
        assert!(route(91.0, 5_000.0).compliance_balance() < 0.0);
    }

    #[test]
    fn route_below_target_has_surplus() {
        assert!(route(88.0, 4_800.0).compliance_balance() > 0.0);
    }
}
