//! RouteStore port
//!
//! Voyage records keyed by route id.

use crate::domain::entities::Route;

use super::StoreResult;

pub trait RouteStore {
    /// All routes ordered by route id, optionally of one year
    fn find_all(&self, year: Option<i32>) -> StoreResult<Vec<Route>>;

    fn find_by_route_id(&self, route_id: &str) -> StoreResult<Option<Route>>;

    fn find_baseline(&self) -> StoreResult<Option<Route>>;

    /// Clear every baseline flag, then mark `route_id`, in one write
    fn set_baseline(&self, route_id: &str) -> StoreResult<()>;

    /// Insert or replace by route id. A baseline route clears any other baseline.
    fn save(&self, route: &Route) -> StoreResult<()>;

    /// Upsert every route in one write. The last baseline route in `routes`
    /// clears any other baseline.
    fn save_all(&self, routes: &[Route]) -> StoreResult<()>;

    /// Replace the whole route set
    fn seed_all(&self, routes: &[Route]) -> StoreResult<()>;
}

impl<T: RouteStore + ?Sized> RouteStore for &T {
    fn find_all(&self, year: Option<i32>) -> StoreResult<Vec<Route>> {
        (**self).find_all(year)
    }

    fn find_by_route_id(&self, route_id: &str) -> StoreResult<Option<Route>> {
        (**self).find_by_route_id(route_id)
    }

    fn find_baseline(&self) -> StoreResult<Option<Route>> {
        (**self).find_baseline()
    }

    fn set_baseline(&self, route_id: &str) -> StoreResult<()> {
        (**self).set_baseline(route_id)
    }

    fn save(&self, route: &Route) -> StoreResult<()> {
        (**self).save(route)
    }

    fn save_all(&self, routes: &[Route]) -> StoreResult<()> {
        (**self).save_all(routes)
    }

    fn seed_all(&self, routes: &[Route]) -> StoreResult<()> {
        (**self).seed_all(routes)
    }
}
