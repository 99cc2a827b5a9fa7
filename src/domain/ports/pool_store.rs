//! PoolStore port

use crate::domain::entities::{Pool, PoolMember, PoolRecord};

use super::StoreResult;

pub trait PoolStore {
    /// Persist a pool together with its members. Either both land or neither.
    fn create_pool(&self, pool: &Pool, members: &[PoolMember]) -> StoreResult<()>;

    fn find_by_id(&self, pool_id: &str) -> StoreResult<Option<PoolRecord>>;

    /// Pools in creation order, optionally of one year
    fn find_all(&self, year: Option<i32>) -> StoreResult<Vec<PoolRecord>>;
}

impl<T: PoolStore + ?Sized> PoolStore for &T {
    fn create_pool(&self, pool: &Pool, members: &[PoolMember]) -> StoreResult<()> {
        (**self).create_pool(pool, members)
    }

    fn find_by_id(&self, pool_id: &str) -> StoreResult<Option<PoolRecord>> {
        (**self).find_by_id(pool_id)
    }

    fn find_all(&self, year: Option<i32>) -> StoreResult<Vec<PoolRecord>> {
        (**self).find_all(year)
    }
}
