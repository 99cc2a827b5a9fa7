//! TOML Route Store
//!
//! Persists routes at `<data_dir>/routes.toml`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::Route;
use crate::domain::ports::{RouteStore, StoreResult};
use crate::domain::value_objects::{FuelType, VesselType};

use super::document::{TomlDocument, FORMAT_VERSION};

pub const ROUTES_FILE: &str = "routes.toml";

/// On-disk shape of a route, shared with the import file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TomlRoute {
    route_id: String,
    vessel_type: VesselType,
    fuel_type: FuelType,
    year: i32,
    ghg_intensity: f64,
    fuel_consumption: f64,
    distance: f64,
    total_emissions: f64,
    #[serde(default)]
    is_baseline: bool,
}

impl From<TomlRoute> for Route {
    fn from(r: TomlRoute) -> Self {
        Route {
            route_id: r.route_id,
            vessel_type: r.vessel_type,
            fuel_type: r.fuel_type,
            year: r.year,
            ghg_intensity: r.ghg_intensity,
            fuel_consumption: r.fuel_consumption,
            distance: r.distance,
            total_emissions: r.total_emissions,
            is_baseline: r.is_baseline,
        }
    }
}

impl From<&Route> for TomlRoute {
    fn from(r: &Route) -> Self {
        TomlRoute {
            route_id: r.route_id.clone(),
            vessel_type: r.vessel_type,
            fuel_type: r.fuel_type,
            year: r.year,
            ghg_intensity: r.ghg_intensity,
            fuel_consumption: r.fuel_consumption,
            distance: r.distance,
            total_emissions: r.total_emissions,
            is_baseline: r.is_baseline,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RoutesDocument {
    version: u32,
    #[serde(default)]
    routes: Vec<TomlRoute>,
}

impl Default for RoutesDocument {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            routes: Vec::new(),
        }
    }
}

pub struct TomlRouteStore {
    document: TomlDocument,
}

impl TomlRouteStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            document: TomlDocument::new(data_dir.join(ROUTES_FILE)),
        }
    }

    pub fn path(&self) -> &Path {
        self.document.path()
    }

    fn load(&self) -> StoreResult<Vec<Route>> {
        let doc: RoutesDocument = self.document.load()?;
        Ok(doc.routes.into_iter().map(Route::from).collect())
    }

    fn store(&self, routes: &[Route]) -> StoreResult<()> {
        let mut routes: Vec<TomlRoute> = routes.iter().map(TomlRoute::from).collect();
        routes.sort_by(|a, b| a.route_id.cmp(&b.route_id));
        self.document.save(&RoutesDocument {
            version: FORMAT_VERSION,
            routes,
        })
    }
}

impl RouteStore for TomlRouteStore {
    fn find_all(&self, year: Option<i32>) -> StoreResult<Vec<Route>> {
        let mut routes: Vec<Route> = self
            .load()?
            .into_iter()
            .filter(|r| year.map_or(true, |y| r.year == y))
            .collect();
        routes.sort_by(|a, b| a.route_id.cmp(&b.route_id));
        Ok(routes)
    }

    fn find_by_route_id(&self, route_id: &str) -> StoreResult<Option<Route>> {
        debug!(route_id, "looking up route");
        Ok(self.load()?.into_iter().find(|r| r.route_id == route_id))
    }

    fn find_baseline(&self) -> StoreResult<Option<Route>> {
        Ok(self.load()?.into_iter().find(|r| r.is_baseline))
    }

    fn set_baseline(&self, route_id: &str) -> StoreResult<()> {
        let mut routes = self.load()?;
        for route in &mut routes {
            route.is_baseline = route.route_id == route_id;
        }
        self.store(&routes)
    }

    fn save(&self, route: &Route) -> StoreResult<()> {
        self.save_all(std::slice::from_ref(route))
    }

    fn save_all(&self, incoming: &[Route]) -> StoreResult<()> {
        let mut routes = self.load()?;
        upsert_routes(&mut routes, incoming);
        self.store(&routes)
    }

    fn seed_all(&self, routes: &[Route]) -> StoreResult<()> {
        self.store(routes)
    }
}

/// Upsert `incoming` by route id, keeping at most one baseline flag
fn upsert_routes(routes: &mut Vec<Route>, incoming: &[Route]) {
    for route in incoming {
        if route.is_baseline {
            routes.iter_mut().for_each(|r| r.is_baseline = false);
        }
        match routes.iter_mut().find(|r| r.route_id == route.route_id) {
            Some(existing) => *existing = route.clone(),
            None => routes.push(route.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed::sample_routes;
    use tempfile::tempdir;

    #[test]
    fn empty_store_has_no_routes() {
        let dir = tempdir().unwrap();
        let store = TomlRouteStore::new(dir.path());
        assert!(store.find_all(None).unwrap().is_empty());
        assert!(store.find_baseline().unwrap().is_none());
    }

    #[test]
    fn seed_and_query() {
        let dir = tempdir().unwrap();
        let store = TomlRouteStore::new(dir.path());
        store.seed_all(&sample_routes()).unwrap();

        assert_eq!(store.find_all(None).unwrap().len(), 5);
        assert_eq!(store.find_all(Some(2025)).unwrap().len(), 2);
        assert_eq!(store.find_baseline().unwrap().unwrap().route_id, "R001");
        assert_eq!(
            store.find_by_route_id("R003").unwrap().unwrap().ghg_intensity,
            93.5
        );
        assert!(store.path().ends_with(ROUTES_FILE));
    }

    #[test]
    fn set_baseline_keeps_a_single_flag() {
        let dir = tempdir().unwrap();
        let store = TomlRouteStore::new(dir.path());
        store.seed_all(&sample_routes()).unwrap();

        store.set_baseline("R004").unwrap();

        let baselines: Vec<Route> = store
            .find_all(None)
            .unwrap()
            .into_iter()
            .filter(|r| r.is_baseline)
            .collect();
        assert_eq!(baselines.len(), 1);
        assert_eq!(baselines[0].route_id, "R004");
    }

    #[test]
    fn saving_a_baseline_clears_the_old_one() {
        let dir = tempdir().unwrap();
        let store = TomlRouteStore::new(dir.path());
        store.seed_all(&sample_routes()).unwrap();

        let mut route = store.find_by_route_id("R005").unwrap().unwrap();
        route.is_baseline = true;
        store.save(&route).unwrap();

        assert_eq!(store.find_baseline().unwrap().unwrap().route_id, "R005");
        assert!(!store.find_by_route_id("R001").unwrap().unwrap().is_baseline);
    }

    #[test]
    fn save_all_upserts_in_one_write() {
        let dir = tempdir().unwrap();
        let store = TomlRouteStore::new(dir.path());
        store.seed_all(&sample_routes()).unwrap();

        let mut changed = store.find_by_route_id("R002").unwrap().unwrap();
        changed.ghg_intensity = 80.0;
        changed.is_baseline = true;
        let mut added = changed.clone();
        added.route_id = "R010".to_string();
        added.is_baseline = false;

        store.save_all(&[changed, added]).unwrap();

        assert_eq!(store.find_all(None).unwrap().len(), 6);
        assert_eq!(store.find_baseline().unwrap().unwrap().route_id, "R002");
        assert_eq!(
            store.find_by_route_id("R002").unwrap().unwrap().ghg_intensity,
            80.0
        );
    }
}
