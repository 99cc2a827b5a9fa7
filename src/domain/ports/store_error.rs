//! Errors shared by every storage port

use std::path::PathBuf;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("failed to access ledger storage: {message}")]
    AccessError { message: String },

    #[error("failed to serialize ledger data: {message}")]
    SerializationError { message: String },

    #[error(
        "ledger file corrupted: {path}\n  → Fix: restore the file from a backup or re-run the command that produced it\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },

    #[error(
        "ledger file {path} has format version {found}, expected {expected}\n  → Fix: upgrade fueleu or move the data directory aside"
    )]
    VersionMismatch {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
}

impl StoreError {
    pub fn access(err: impl std::fmt::Display) -> Self {
        StoreError::AccessError {
            message: err.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StoreError::AccessError { .. } => "STORE_ACCESS",
            StoreError::SerializationError { .. } => "STORE_SERIALIZATION",
            StoreError::Corrupted { .. } => "STORE_CORRUPTED",
            StoreError::VersionMismatch { .. } => "STORE_VERSION_MISMATCH",
        }
    }
}
