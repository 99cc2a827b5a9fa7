//! Pool entities - persisted outcome of a pooling allocation
//!
//! A pool is immutable once created and exclusively owns its members.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
    pub id: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

/// A ship's participation in a pool
#[derive(Debug, Clone, PartialEq)]
pub struct PoolMember {
    pub pool_id: String,
    pub ship_id: String,
    /// CB at pool creation time
    pub cb_before: f64,
    /// CB after allocation
    pub cb_after: f64,
}

impl PoolMember {
    /// Amount received (positive) or given away (negative)
    pub fn transferred(&self) -> f64 {
        self.cb_after - self.cb_before
    }
}

/// A pool together with its members
#[derive(Debug, Clone, PartialEq)]
pub struct PoolRecord {
    pub pool: Pool,
    pub members: Vec<PoolMember>,
}

impl PoolRecord {
    pub fn net_cb(&self) -> f64 {
        self.members.iter().map(|m| m.cb_before).sum()
    }

    pub fn contains_ship(&self, ship_id: &str) -> bool {
        self.members.iter().any(|m| m.ship_id == ship_id)
    }
}
