//! Sample routes
//!
//! Five voyages across 2024 and 2025, with R001 as the baseline.

use crate::domain::entities::Route;
use crate::domain::value_objects::{FuelType, VesselType};

#[allow(clippy::too_many_arguments)]
fn route(
    route_id: &str,
    vessel_type: VesselType,
    fuel_type: FuelType,
    year: i32,
    ghg_intensity: f64,
    fuel_consumption: f64,
    distance: f64,
    total_emissions: f64,
) -> Route {
    Route {
        route_id: route_id.to_string(),
        vessel_type,
        fuel_type,
        year,
        ghg_intensity,
        fuel_consumption,
        distance,
        total_emissions,
        is_baseline: false,
    }
}

pub fn sample_routes() -> Vec<Route> {
    use FuelType::*;
    use VesselType::*;

    let mut routes = vec![
        route("R001", Container, Hfo, 2024, 91.0, 5000.0, 12000.0, 4500.0),
        route("R002", BulkCarrier, Lng, 2024, 88.0, 4800.0, 11500.0, 4200.0),
        route("R003", Tanker, Mgo, 2024, 93.5, 5100.0, 12500.0, 4700.0),
        route("R004", RoRo, Hfo, 2025, 89.2, 4900.0, 11800.0, 4300.0),
        route("R005", Container, Lng, 2025, 90.5, 4950.0, 11900.0, 4400.0),
    ];
    routes[0].is_baseline = true;
    routes
}
