//! Create Pool Use Case

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::Pool;
use crate::domain::ports::{ComplianceStore, PoolStore};
use crate::domain::services::{allocate_pool, ShipBalance};
use crate::domain::DomainError;
use crate::error::FuelEuResult;

use super::options::CreatePoolOptions;
use super::result::PoolResult;

/// Create pool use case - allocates CB across ships and persists the pool
pub struct CreatePoolUseCase<CS, PS>
where
    CS: ComplianceStore,
    PS: PoolStore,
{
    compliance: CS,
    pools: PS,
}

impl<CS, PS> CreatePoolUseCase<CS, PS>
where
    CS: ComplianceStore,
    PS: PoolStore,
{
    pub fn new(compliance: CS, pools: PS) -> Self {
        Self { compliance, pools }
    }

    /// Create the pool.
    ///
    /// Nothing is written unless every check and the allocation succeed.
    pub fn execute(&self, options: &CreatePoolOptions) -> FuelEuResult<PoolResult> {
        let year = options.year;
        self.reject_duplicates(&options.ship_ids)?;

        let mut balances = Vec::with_capacity(options.ship_ids.len());
        for ship_id in &options.ship_ids {
            let record = self
                .compliance
                .find_by_ship_and_year(ship_id, year)?
                .ok_or_else(|| {
                    warn!(ship_id = %ship_id, year, "pool member has no compliance record");
                    DomainError::ComplianceRecordNotFound {
                        ship_id: ship_id.clone(),
                        year,
                    }
                })?;
            debug!(ship_id = %ship_id, cb = record.cb_gco2eq, "loaded member balance");
            balances.push(ShipBalance::new(ship_id.clone(), record.cb_gco2eq));
        }

        self.reject_already_pooled(&options.ship_ids, year)?;

        let pool_id = Uuid::new_v4().to_string();
        let allocation = allocate_pool(&pool_id, &balances).inspect_err(|err| {
            warn!(code = err.code(), year, "pool allocation rejected: {err}");
        })?;

        let pool = Pool {
            id: pool_id,
            year,
            created_at: Utc::now(),
        };
        self.pools.create_pool(&pool, &allocation.members)?;

        info!(
            pool_id = %pool.id,
            year,
            members = allocation.members.len(),
            net_cb = allocation.net_cb,
            "created pool"
        );

        Ok(PoolResult {
            pool,
            members: allocation.members,
            net_cb: allocation.net_cb,
            total_surplus_before: allocation.total_surplus_before,
            total_deficit_before: allocation.total_deficit_before,
        })
    }

    fn reject_duplicates(&self, ship_ids: &[String]) -> Result<(), DomainError> {
        let mut seen = HashSet::with_capacity(ship_ids.len());
        match ship_ids.iter().find(|id| !seen.insert(id.as_str())) {
            Some(ship_id) => Err(DomainError::DuplicateShip {
                ship_id: ship_id.clone(),
            }),
            None => Ok(()),
        }
    }

    fn reject_already_pooled(&self, ship_ids: &[String], year: i32) -> FuelEuResult<()> {
        let existing = self.pools.find_all(Some(year))?;
        for ship_id in ship_ids {
            if let Some(record) = existing.iter().find(|p| p.contains_ship(ship_id)) {
                return Err(DomainError::ShipAlreadyPooled {
                    ship_id: ship_id.clone(),
                    year,
                    pool_id: record.pool.id.clone(),
                }
                .into());
            }
        }
        Ok(())
    }
}
