//! Route Use Case

use std::collections::HashSet;

use tracing::{debug, info};

use crate::domain::entities::Route;
use crate::domain::ports::RouteStore;
use crate::domain::services::{compare_routes, RouteComparison};
use crate::domain::DomainError;
use crate::error::FuelEuResult;

/// Outcome of a route import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub updated: usize,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.inserted + self.updated
    }
}

pub struct RouteUseCase<RS: RouteStore> {
    routes: RS,
}

impl<RS: RouteStore> RouteUseCase<RS> {
    pub fn new(routes: RS) -> Self {
        Self { routes }
    }

    pub fn list(&self, year: Option<i32>) -> FuelEuResult<Vec<Route>> {
        Ok(self.routes.find_all(year)?)
    }

    /// Make `route_id` the only baseline route
    pub fn set_baseline(&self, route_id: &str) -> FuelEuResult<Route> {
        let mut route = self.require(route_id)?;
        self.routes.set_baseline(route_id)?;
        route.is_baseline = true;

        info!(route_id, "baseline route set");
        Ok(route)
    }

    /// Compare one route against the baseline
    pub fn compare(&self, alternative_route_id: &str) -> FuelEuResult<RouteComparison> {
        let baseline = self.baseline()?;
        let alternative = self.require(alternative_route_id)?;
        debug!(
            baseline = %baseline.route_id,
            alternative = %alternative.route_id,
            "comparing routes"
        );
        Ok(compare_routes(&baseline, &alternative))
    }

    /// Compare every non-baseline route against the baseline
    pub fn compare_all(&self) -> FuelEuResult<Vec<RouteComparison>> {
        let baseline = self.baseline()?;
        Ok(self
            .routes
            .find_all(None)?
            .iter()
            .filter(|r| r.route_id != baseline.route_id)
            .map(|alternative| compare_routes(&baseline, alternative))
            .collect())
    }

    /// Replace every route with `routes`
    pub fn seed(&self, routes: &[Route]) -> FuelEuResult<usize> {
        self.routes.seed_all(routes)?;
        info!(routes = routes.len(), "seeded routes");
        Ok(routes.len())
    }

    /// Upsert `routes` in a single write. A baseline route in the batch
    /// takes the baseline flag from whichever route held it.
    pub fn import(&self, routes: &[Route]) -> FuelEuResult<ImportSummary> {
        let mut known: HashSet<String> = self
            .routes
            .find_all(None)?
            .into_iter()
            .map(|r| r.route_id)
            .collect();

        let mut summary = ImportSummary::default();
        for route in routes {
            if known.insert(route.route_id.clone()) {
                summary.inserted += 1;
            } else {
                summary.updated += 1;
            }
        }
        self.routes.save_all(routes)?;

        info!(
            inserted = summary.inserted,
            updated = summary.updated,
            "imported routes"
        );
        Ok(summary)
    }

    fn baseline(&self) -> FuelEuResult<Route> {
        Ok(self
            .routes
            .find_baseline()?
            .ok_or(DomainError::NoBaselineSet)?)
    }

    fn require(&self, route_id: &str) -> FuelEuResult<Route> {
        Ok(self
            .routes
            .find_by_route_id(route_id)?
            .ok_or_else(|| DomainError::RouteNotFound {
                route_id: route_id.to_string(),
            })?)
    }
}
