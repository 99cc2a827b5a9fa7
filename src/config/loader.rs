//! Configuration loading
//!
//! Layers, highest priority first:
//! 1. CLI flags (`--data-dir`, `--config`), applied by the caller
//! 2. Environment variables (`FUELEU_DATA_DIR`, `FUELEU_PROCESSING_YEAR`, `FUELEU_COLOR`)
//! 3. Project config (`./fueleu.toml`)
//! 4. User config (`<config_dir>/fueleu/config.toml`)
//! 5. Built-in defaults
//!
//! Only one file is read: the explicit one, else the project one, else the
//! user one.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FuelEuError, FuelEuResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config, ConfigSource};

pub const PROJECT_CONFIG_FILE: &str = "fueleu.toml";

pub const ENV_DATA_DIR: &str = "FUELEU_DATA_DIR";
pub const ENV_PROCESSING_YEAR: &str = "FUELEU_PROCESSING_YEAR";
pub const ENV_COLOR: &str = "FUELEU_COLOR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Effective configuration with its origin
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FuelEuResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FuelEuError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the file layer, then apply environment overrides.
///
/// An explicit path must exist. A discovered file that fails to parse is an
/// error rather than being skipped.
pub fn resolve(explicit: Option<&Path>, project_dir: &Path) -> FuelEuResult<LoadedConfig> {
    let source = match explicit {
        Some(path) => ConfigSource::Explicit(path.to_path_buf()),
        None => discover(project_dir),
    };

    let (config, warnings) = match source.path() {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };
    debug!(source = source.label(), path = ?source.path(), "loaded configuration");

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source,
        warnings,
    })
}

fn discover(project_dir: &Path) -> ConfigSource {
    let project = project_dir.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return ConfigSource::Project(project);
    }

    if let Some(user) = user_config_path() {
        if user.is_file() {
            return ConfigSource::User(user);
        }
    }

    ConfigSource::Defaults
}

/// `<config_dir>/fueleu/config.toml`, honouring `XDG_CONFIG_HOME`
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("fueleu").join("config.toml"))
}

/// Apply environment variable overrides (FUELEU_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Apply overrides from `lookup`, writing warnings for invalid values to `writer`
pub fn apply_env<F, W>(mut config: Config, lookup: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
        config.storage.data_dir = PathBuf::from(dir);
    }

    if let Some(value) = lookup(ENV_PROCESSING_YEAR) {
        let validator = EnvVarValidator::new(ENV_PROCESSING_YEAR, &[])
            .expecting("a calendar year such as 2025");
        config.banking.processing_year = validator.parse_with_writer(
            &value,
            |v| v.trim().parse::<i32>().ok().filter(|y| (1..=9999).contains(y)).map(Some),
            config.banking.processing_year,
            writer,
        );
    }

    if let Some(value) = lookup(ENV_COLOR) {
        let validator = EnvVarValidator::new(ENV_COLOR, ColorMode::VALUES);
        config.output.color =
            validator.parse_with_writer(&value, ColorMode::parse, config.output.color, writer);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "data_dir",
        "banking",
        "processing_year",
        "output",
        "color",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
