//! Versioned TOML documents
//!
//! Each store keeps its whole state in one TOML file with a `version`
//! header. Writes go to a temporary file in the same directory which is then
//! renamed over the target, so readers see the old or the new document and
//! never a partial one.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::trace;

use crate::domain::ports::{StoreError, StoreResult};

/// Current on-disk format version of every ledger file
pub const FORMAT_VERSION: u32 = 1;

#[derive(Deserialize)]
struct VersionHeader {
    version: u32,
}

pub(crate) struct TomlDocument {
    path: PathBuf,
}

impl TomlDocument {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, or `T::default()` when the file does not exist yet
    pub fn load<T: DeserializeOwned + Default>(&self) -> StoreResult<T> {
        if !self.path.exists() {
            return Ok(T::default());
        }

        let content = fs::read_to_string(&self.path).map_err(StoreError::access)?;
        trace!(path = %self.path.display(), bytes = content.len(), "read ledger file");

        let header: VersionHeader = toml::from_str(&content).map_err(|e| self.corrupted(e))?;
        if header.version != FORMAT_VERSION {
            return Err(StoreError::VersionMismatch {
                path: self.path.clone(),
                found: header.version,
                expected: FORMAT_VERSION,
            });
        }

        toml::from_str(&content).map_err(|e| self.corrupted(e))
    }

    /// Replace the document atomically
    pub fn save<T: Serialize>(&self, document: &T) -> StoreResult<()> {
        let content =
            toml::to_string_pretty(document).map_err(|e| StoreError::SerializationError {
                message: e.to_string(),
            })?;

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(StoreError::access)?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(StoreError::access)?;
        tmp.write_all(content.as_bytes()).map_err(StoreError::access)?;
        tmp.as_file().sync_all().map_err(StoreError::access)?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::access(e.error))?;

        trace!(path = %self.path.display(), bytes = content.len(), "wrote ledger file");
        Ok(())
    }

    fn corrupted(&self, err: toml::de::Error) -> StoreError {
        StoreError::Corrupted {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }
}
