//! Pool queries

use tracing::debug;

use crate::domain::ports::PoolStore;
use crate::domain::DomainError;
use crate::error::FuelEuResult;

use super::result::PoolResult;

pub struct PoolQueryUseCase<PS: PoolStore> {
    pools: PS,
}

impl<PS: PoolStore> PoolQueryUseCase<PS> {
    pub fn new(pools: PS) -> Self {
        Self { pools }
    }

    pub fn find_by_id(&self, pool_id: &str) -> FuelEuResult<PoolResult> {
        debug!(pool_id, "looking up pool");
        let record = self
            .pools
            .find_by_id(pool_id)?
            .ok_or_else(|| DomainError::PoolNotFound {
                pool_id: pool_id.to_string(),
            })?;
        Ok(PoolResult::from_record(record))
    }

    pub fn find_all(&self, year: Option<i32>) -> FuelEuResult<Vec<PoolResult>> {
        let records = self.pools.find_all(year)?;
        Ok(records.into_iter().map(PoolResult::from_record).collect())
    }
}
