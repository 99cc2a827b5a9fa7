//! Domain Layer
//!
//! The compliance rules of the ledger: pure business logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Records with identity (Route, ComplianceBalance, BankEntry, Pool)
//! - `value_objects/` - Small immutable types (VesselType, FuelType, CbStatus)
//! - `services/` - Pure calculations (compliance balance, comparison, pool allocation)
//! - `ports/` - Storage interfaces implemented by the infrastructure layer
//! - `error` - Rule violations surfaced to callers
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All persistence goes through trait-defined ports

pub mod entities;
pub mod error;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use error::DomainError;
