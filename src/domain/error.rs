//! Domain errors
//!
//! Every business-rule violation has its own variant and a stable machine
//! code. These errors are deterministic and never retried.

use thiserror::Error;

/// A compliance rule was violated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Banking amount was zero or negative
    #[error("invalid amount: {amount}. Must be > 0")]
    InvalidAmount { amount: f64 },

    /// No compliance snapshot stored for the ship/year
    #[error("no compliance record for ship {ship_id} year {year}")]
    ComplianceRecordNotFound { ship_id: String, year: i32 },

    /// Ship has no surplus, or less surplus than requested
    #[error("ship {ship_id} has insufficient surplus to bank")]
    InsufficientSurplus { ship_id: String },

    /// Withdrawal exceeds the banked total
    #[error("ship {ship_id}: requested {requested} but only {available} banked")]
    InsufficientBanked {
        ship_id: String,
        requested: f64,
        available: f64,
    },

    /// Fewer than two ships in a pool
    #[error("pool requires at least 2 members, got {count}")]
    InsufficientMembers { count: usize },

    /// Aggregate compliance balance of the pool is negative
    #[error("pool net CB is negative: {net_cb}. Sum must be >= 0")]
    PoolNetNegative { net_cb: f64 },

    /// A ship's balance is NaN or infinite
    #[error("ship {ship_id} has a non-finite compliance balance")]
    NonFiniteBalance { ship_id: String },

    /// Finite balances whose sum overflows to infinity
    #[error("pool net CB overflows: {net_cb}")]
    NetBalanceOverflow { net_cb: f64 },

    /// The same ship was listed twice for one pool
    #[error("ship {ship_id} is listed more than once")]
    DuplicateShip { ship_id: String },

    /// Ship already belongs to a pool for the same year
    #[error("ship {ship_id} is already pooled for {year} (pool {pool_id})")]
    ShipAlreadyPooled {
        ship_id: String,
        year: i32,
        pool_id: String,
    },

    /// Allocation output broke one of the member invariants
    #[error("pool allocation invariant violated: {detail}")]
    AllocationInvariantViolated { detail: String },

    /// Unknown pool id
    #[error("pool not found: {pool_id}")]
    PoolNotFound { pool_id: String },

    /// Unknown route id
    #[error("route not found: {route_id}")]
    RouteNotFound { route_id: String },

    /// Comparison requested without a baseline route
    #[error("no baseline route has been set")]
    NoBaselineSet,
}

impl DomainError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidAmount { .. } => "INVALID_AMOUNT",
            DomainError::ComplianceRecordNotFound { .. } => "NO_COMPLIANCE_RECORD",
            DomainError::InsufficientSurplus { .. } => "INSUFFICIENT_SURPLUS",
            DomainError::InsufficientBanked { .. } => "INSUFFICIENT_BANKED_AMOUNT",
            DomainError::InsufficientMembers { .. } => "INSUFFICIENT_MEMBERS",
            DomainError::PoolNetNegative { .. } => "POOL_NET_NEGATIVE",
            DomainError::NonFiniteBalance { .. } => "NON_FINITE_BALANCE",
            DomainError::NetBalanceOverflow { .. } => "NET_BALANCE_OVERFLOW",
            DomainError::DuplicateShip { .. } => "DUPLICATE_SHIP",
            DomainError::ShipAlreadyPooled { .. } => "SHIP_ALREADY_POOLED",
            DomainError::AllocationInvariantViolated { .. } => "ALLOCATION_INVARIANT_VIOLATED",
            DomainError::PoolNotFound { .. } => "POOL_NOT_FOUND",
            DomainError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            DomainError::NoBaselineSet => "NO_BASELINE_SET",
        }
    }
}
