//! TOML Pool Store
//!
//! Pools and their members at `<data_dir>/pools.toml`. Members are nested
//! under their pool, so a pool and its members are written together.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{Pool, PoolMember, PoolRecord};
use crate::domain::ports::{PoolStore, StoreResult};

use super::document::{TomlDocument, FORMAT_VERSION};

pub const POOLS_FILE: &str = "pools.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlPoolMember {
    ship_id: String,
    cb_before: f64,
    cb_after: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlPool {
    id: String,
    year: i32,
    created_at: DateTime<Utc>,
    #[serde(default)]
    members: Vec<TomlPoolMember>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PoolsDocument {
    version: u32,
    #[serde(default)]
    pools: Vec<TomlPool>,
}

impl Default for PoolsDocument {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            pools: Vec::new(),
        }
    }
}

fn from_toml(pool: TomlPool) -> PoolRecord {
    let members = pool
        .members
        .into_iter()
        .map(|m| PoolMember {
            pool_id: pool.id.clone(),
            ship_id: m.ship_id,
            cb_before: m.cb_before,
            cb_after: m.cb_after,
        })
        .collect();

    PoolRecord {
        pool: Pool {
            id: pool.id,
            year: pool.year,
            created_at: pool.created_at,
        },
        members,
    }
}

pub struct TomlPoolStore {
    document: TomlDocument,
}

impl TomlPoolStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            document: TomlDocument::new(data_dir.join(POOLS_FILE)),
        }
    }

    fn load(&self) -> StoreResult<Vec<PoolRecord>> {
        let doc: PoolsDocument = self.document.load()?;
        Ok(doc.pools.into_iter().map(from_toml).collect())
    }
}

impl PoolStore for TomlPoolStore {
    fn create_pool(&self, pool: &Pool, members: &[PoolMember]) -> StoreResult<()> {
        let mut doc: PoolsDocument = self.document.load()?;
        doc.pools.push(TomlPool {
            id: pool.id.clone(),
            year: pool.year,
            created_at: pool.created_at,
            members: members
                .iter()
                .map(|m| TomlPoolMember {
                    ship_id: m.ship_id.clone(),
                    cb_before: m.cb_before,
                    cb_after: m.cb_after,
                })
                .collect(),
        });
        self.document.save(&doc)?;
        debug!(pool_id = %pool.id, members = members.len(), "stored pool");
        Ok(())
    }

    fn find_by_id(&self, pool_id: &str) -> StoreResult<Option<PoolRecord>> {
        Ok(self.load()?.into_iter().find(|p| p.pool.id == pool_id))
    }

    fn find_all(&self, year: Option<i32>) -> StoreResult<Vec<PoolRecord>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|p| year.map_or(true, |y| p.pool.year == y))
            .collect())
    }
}
