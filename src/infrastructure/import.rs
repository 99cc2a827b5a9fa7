//! Route import files
//!
//! ```toml
//! [[routes]]
//! route_id = "R010"
//! vessel_type = "Tanker"
//! fuel_type = "VLSFO"
//! year = 2025
//! ghg_intensity = 88.1
//! fuel_consumption = 3200.0
//! distance = 9000.0
//! total_emissions = 2800.0
//! is_baseline = false      # optional
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::Route;
use crate::error::{FuelEuError, FuelEuResult};

use super::repositories::TomlRoute;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ImportFile {
    #[serde(default)]
    routes: Vec<TomlRoute>,
}

/// Read routes from an import file
pub fn load_routes_file(path: &Path) -> FuelEuResult<Vec<Route>> {
    let content = fs::read_to_string(path)?;
    parse_routes(&content).map_err(|message| FuelEuError::InvalidImport {
        file: path.to_path_buf(),
        message,
    })
}

fn parse_routes(content: &str) -> Result<Vec<Route>, String> {
    let file: ImportFile = toml::from_str(content).map_err(|e| e.to_string())?;
    let routes: Vec<Route> = file.routes.into_iter().map(Route::from).collect();

    if let Some(route) = routes.iter().find(|r| r.route_id.trim().is_empty()) {
        return Err(format!(
            "route with empty route_id (year {})",
            route.year
        ));
    }
    if routes.iter().filter(|r| r.is_baseline).count() > 1 {
        return Err("more than one route is marked as baseline".to_string());
    }

    Ok(routes)
}
