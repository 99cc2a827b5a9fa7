//! Error types for fueleu
//!
//! Library errors use `thiserror`. Rule violations stay [`DomainError`] all the
//! way up; everything else is an infrastructure failure.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::StoreError;
use crate::domain::DomainError;

/// Result type alias for ledger operations
pub type FuelEuResult<T> = Result<T, FuelEuError>;

/// Coarse classification used for exit codes and JSON error events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A business rule rejected the request
    Domain,
    /// Storage, configuration or IO failed
    Infrastructure,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Domain => "domain",
            ErrorCategory::Infrastructure => "infrastructure",
        }
    }

    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Domain => 2,
            ErrorCategory::Infrastructure => 1,
        }
    }
}

/// Main error type for ledger operations
#[derive(Error, Debug)]
pub enum FuelEuError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration file exists but cannot be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Route import file cannot be read as a route list
    #[error("invalid route import file {file}: {message}")]
    InvalidImport { file: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FuelEuError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FuelEuError::Domain(_) => ErrorCategory::Domain,
            _ => ErrorCategory::Infrastructure,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            FuelEuError::Domain(err) => err.code(),
            FuelEuError::Store(err) => err.code(),
            FuelEuError::InvalidConfig { .. } => "INVALID_CONFIG",
            FuelEuError::InvalidImport { .. } => "INVALID_IMPORT",
            FuelEuError::Io(_) => "IO_ERROR",
        }
    }

    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            FuelEuError::Domain(err) => Some(err),
            _ => None,
        }
    }
}
