//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. All file I/O lives here.
//!
//! ## Structure
//!
//! - `repositories/` - TOML stores for routes, compliance records, bank entries and pools
//! - `lock` - exclusive lock on the data directory for mutating commands
//! - `seed` - sample routes
//! - `import` - route import files

pub mod import;
pub mod lock;
pub mod repositories;
pub mod seed;

pub use import::load_routes_file;
pub use lock::LedgerLock;
pub use repositories::{TomlBankStore, TomlComplianceStore, TomlPoolStore, TomlRouteStore};
pub use seed::sample_routes;
