//! Create pool result

use chrono::{DateTime, Utc};

use crate::domain::entities::{Pool, PoolMember, PoolRecord};

/// A persisted pool and its allocation totals
#[derive(Debug, Clone, PartialEq)]
pub struct PoolResult {
    pub pool: Pool,
    /// Surplus ships, then deficit ships, then zero ships
    pub members: Vec<PoolMember>,
    pub net_cb: f64,
    pub total_surplus_before: f64,
    pub total_deficit_before: f64,
}

impl PoolResult {
    pub fn pool_id(&self) -> &str {
        &self.pool.id
    }

    pub fn year(&self) -> i32 {
        self.pool.year
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.pool.created_at
    }

    pub fn member(&self, ship_id: &str) -> Option<&PoolMember> {
        self.members.iter().find(|m| m.ship_id == ship_id)
    }

    /// Build a result from a stored pool, recomputing the totals
    pub fn from_record(record: PoolRecord) -> Self {
        let net_cb = record.net_cb();
        let total_surplus_before = record
            .members
            .iter()
            .map(|m| m.cb_before)
            .filter(|cb| *cb > 0.0)
            .sum();
        let total_deficit_before = record
            .members
            .iter()
            .map(|m| m.cb_before)
            .filter(|cb| *cb < 0.0)
            .sum();

        Self {
            pool: record.pool,
            members: record.members,
            net_cb,
            total_surplus_before,
            total_deficit_before,
        }
    }
}
