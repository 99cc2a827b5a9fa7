//! Ledger configuration
//!
//! Resolution order, highest priority first:
//! 1. CLI flags (`--data-dir`)
//! 2. Environment variables (`FUELEU_*`)
//! 3. Explicit `--config <PATH>`, else `./fueleu.toml`, else
//!    `<config_dir>/fueleu/config.toml`
//! 4. Built-in defaults

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    apply_env, resolve, user_config_path, ConfigWarning, LoadedConfig, ENV_COLOR, ENV_DATA_DIR,
    ENV_PROCESSING_YEAR, PROJECT_CONFIG_FILE,
};
pub use types::{
    BankingConfig, ColorMode, Config, ConfigSource, OutputConfig, StorageConfig, DEFAULT_DATA_DIR,
};
