//! Presentation Layer
//!
//! - `cli` - argument parsing (clap derive)
//! - `factory` - use cases wired to the TOML stores of a data directory
//! - `output` - text tables and JSON payloads

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::Cli;
