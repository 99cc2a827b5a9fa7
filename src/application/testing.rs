//! In-memory stores for use case tests

use std::cell::RefCell;

use crate::domain::entities::{
    total_banked, BankEntry, ComplianceBalance, Pool, PoolMember, PoolRecord, Route,
};
use crate::domain::ports::{
    BankStore, ComplianceStore, PoolStore, RouteStore, StoreError, StoreResult,
};
use crate::domain::value_objects::{FuelType, VesselType};

pub(crate) fn route(id: &str, year: i32, ghg_intensity: f64, fuel_consumption: f64) -> Route {
    Route {
        route_id: id.to_string(),
        vessel_type: VesselType::Container,
        fuel_type: FuelType::Lng,
        year,
        ghg_intensity,
        fuel_consumption,
        distance: 10_000.0,
        total_emissions: 4_000.0,
        is_baseline: false,
    }
}

#[derive(Default)]
pub(crate) struct MockRouteStore {
    pub routes: RefCell<Vec<Route>>,
    /// Fail every upsert, for atomicity tests
    pub fail_writes: bool,
}

impl MockRouteStore {
    pub fn with(routes: Vec<Route>) -> Self {
        Self {
            routes: RefCell::new(routes),
            fail_writes: false,
        }
    }
}

impl RouteStore for MockRouteStore {
    fn find_all(&self, year: Option<i32>) -> StoreResult<Vec<Route>> {
        let mut routes: Vec<Route> = self
            .routes
            .borrow()
            .iter()
            .filter(|r| year.map_or(true, |y| r.year == y))
            .cloned()
            .collect();
        routes.sort_by(|a, b| a.route_id.cmp(&b.route_id));
        Ok(routes)
    }

    fn find_by_route_id(&self, route_id: &str) -> StoreResult<Option<Route>> {
        Ok(self
            .routes
            .borrow()
            .iter()
            .find(|r| r.route_id == route_id)
            .cloned())
    }

    fn find_baseline(&self) -> StoreResult<Option<Route>> {
        Ok(self.routes.borrow().iter().find(|r| r.is_baseline).cloned())
    }

    fn set_baseline(&self, route_id: &str) -> StoreResult<()> {
        for route in self.routes.borrow_mut().iter_mut() {
            route.is_baseline = route.route_id == route_id;
        }
        Ok(())
    }

    fn save(&self, route: &Route) -> StoreResult<()> {
        self.save_all(std::slice::from_ref(route))
    }

    fn save_all(&self, incoming: &[Route]) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::AccessError {
                message: "disk full".to_string(),
            });
        }
        let mut routes = self.routes.borrow_mut();
        for route in incoming {
            if route.is_baseline {
                routes.iter_mut().for_each(|r| r.is_baseline = false);
            }
            match routes.iter_mut().find(|r| r.route_id == route.route_id) {
                Some(existing) => *existing = route.clone(),
                None => routes.push(route.clone()),
            }
        }
        Ok(())
    }

    fn seed_all(&self, routes: &[Route]) -> StoreResult<()> {
        *self.routes.borrow_mut() = routes.to_vec();
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MockComplianceStore {
    pub records: RefCell<Vec<ComplianceBalance>>,
}

impl MockComplianceStore {
    pub fn with(records: Vec<ComplianceBalance>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }
}

impl ComplianceStore for MockComplianceStore {
    fn find_by_ship_and_year(
        &self,
        ship_id: &str,
        year: i32,
    ) -> StoreResult<Option<ComplianceBalance>> {
        Ok(self
            .records
            .borrow()
            .iter()
            .find(|r| r.ship_id == ship_id && r.year == year)
            .cloned())
    }

    fn find_all(&self, year: Option<i32>) -> StoreResult<Vec<ComplianceBalance>> {
        Ok(self
            .records
            .borrow()
            .iter()
            .filter(|r| year.map_or(true, |y| r.year == y))
            .cloned()
            .collect())
    }

    fn save(&self, record: &ComplianceBalance) -> StoreResult<()> {
        self.save_all(std::slice::from_ref(record))
    }

    fn save_all(&self, records: &[ComplianceBalance]) -> StoreResult<()> {
        let mut stored = self.records.borrow_mut();
        for record in records {
            match stored.iter_mut().find(|r| r.same_key(record)) {
                Some(existing) => *existing = record.clone(),
                None => stored.push(record.clone()),
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MockBankStore {
    pub entries: RefCell<Vec<BankEntry>>,
}

impl BankStore for MockBankStore {
    fn find_by_ship_id(&self, ship_id: &str) -> StoreResult<Vec<BankEntry>> {
        Ok(self
            .entries
            .borrow()
            .iter()
            .filter(|e| e.ship_id == ship_id)
            .cloned()
            .collect())
    }

    fn get_total_banked(&self, ship_id: &str) -> StoreResult<f64> {
        Ok(total_banked(
            self.entries
                .borrow()
                .iter()
                .filter(|e| e.ship_id == ship_id),
        ))
    }

    fn save(&self, entry: &BankEntry) -> StoreResult<()> {
        self.entries.borrow_mut().push(entry.clone());
        Ok(())
    }

    fn find_all(&self) -> StoreResult<Vec<BankEntry>> {
        Ok(self.entries.borrow().clone())
    }
}

#[derive(Default)]
pub(crate) struct MockPoolStore {
    pub pools: RefCell<Vec<PoolRecord>>,
    /// Fail every write, for atomicity tests
    pub fail_writes: bool,
}

impl PoolStore for MockPoolStore {
    fn create_pool(&self, pool: &Pool, members: &[PoolMember]) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::AccessError {
                message: "disk full".to_string(),
            });
        }
        self.pools.borrow_mut().push(PoolRecord {
            pool: pool.clone(),
            members: members.to_vec(),
        });
        Ok(())
    }

    fn find_by_id(&self, pool_id: &str) -> StoreResult<Option<PoolRecord>> {
        Ok(self
            .pools
            .borrow()
            .iter()
            .find(|p| p.pool.id == pool_id)
            .cloned())
    }

    fn find_all(&self, year: Option<i32>) -> StoreResult<Vec<PoolRecord>> {
        Ok(self
            .pools
            .borrow()
            .iter()
            .filter(|p| year.map_or(true, |y| p.pool.year == y))
            .cloned()
            .collect())
    }
}
