//! Data directory lock
//!
//! Mutating commands hold an exclusive advisory lock on
//! `<data_dir>/.fueleu.lock` for their whole read-validate-write sequence.
//! The lock is released when the guard is dropped.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::domain::ports::{StoreError, StoreResult};

pub const LOCK_FILE: &str = ".fueleu.lock";

#[derive(Debug)]
pub struct LedgerLock {
    file: File,
    path: PathBuf,
}

impl LedgerLock {
    /// Block until the lock on `data_dir` is acquired
    pub fn acquire(data_dir: &Path) -> StoreResult<Self> {
        fs::create_dir_all(data_dir).map_err(StoreError::access)?;
        let path = data_dir.join(LOCK_FILE);

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(StoreError::access)?;
        file.lock_exclusive().map_err(StoreError::access)?;

        debug!(path = %path.display(), "acquired ledger lock");
        Ok(Self { file, path })
    }

    /// Acquire without blocking; `Ok(None)` when another process holds it
    pub fn try_acquire(data_dir: &Path) -> StoreResult<Option<Self>> {
        fs::create_dir_all(data_dir).map_err(StoreError::access)?;
        let path = data_dir.join(LOCK_FILE);

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(StoreError::access)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Some(Self { file, path })),
            Err(_) => Ok(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for LedgerLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
        debug!(path = %self.path.display(), "released ledger lock");
    }
}
