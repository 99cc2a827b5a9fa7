//! Common helpers for CLI integration tests.
//!
//! `TestEnv` runs the compiled `fueleu` binary inside a temporary working
//! directory, with its own data directory and no user configuration.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a fueleu CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// NDJSON events written to stdout
    pub fn events(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {line:?}: {e}"))
            })
            .collect()
    }

    /// Events of one kind, e.g. `"route"`
    pub fn events_of(&self, kind: &str) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter(|e| e["event"] == kind)
            .collect()
    }

    pub fn error_code(&self) -> Option<String> {
        self.events_of("error")
            .first()
            .and_then(|e| e["code"].as_str().map(str::to_string))
    }
}

pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_fueleu")),
        }
    }

    /// A ledger with the sample routes seeded and compliance computed
    pub fn seeded() -> Self {
        let env = Self::new();
        env.run_ok(&["routes", "seed"]);
        env.run_ok(&["compliance", "compute"]);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.path("ledger")
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .arg("--data-dir")
            .arg(self.data_dir())
            .env("XDG_CONFIG_HOME", self.path("xdg"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("FUELEU_DATA_DIR")
            .env_remove("FUELEU_PROCESSING_YEAR")
            .env_remove("FUELEU_COLOR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("failed to execute fueleu"))
    }

    /// Run and assert success
    pub fn run_ok(&self, args: &[&str]) -> TestResult {
        let result = self.run(args);
        assert!(
            result.success,
            "fueleu {:?} failed with {}\nstdout:\n{}\nstderr:\n{}",
            args, result.exit_code, result.stdout, result.stderr
        );
        result
    }

    /// Run with `--json` and assert success
    pub fn run_json(&self, args: &[&str]) -> TestResult {
        let mut with_json = vec!["--json"];
        with_json.extend_from_slice(args);
        self.run_ok(&with_json)
    }

    /// Run with `--json`, expecting failure
    pub fn run_json_err(&self, args: &[&str]) -> TestResult {
        let mut with_json = vec!["--json"];
        with_json.extend_from_slice(args);
        let result = self.run(&with_json);
        assert!(
            !result.success,
            "fueleu {:?} unexpectedly succeeded\nstdout:\n{}",
            args, result.stdout
        );
        result
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Three 2025 routes whose pool is net positive:
/// S1 surplus, S2 and S3 in deficit.
pub const POOLABLE_ROUTES: &str = r#"
[[routes]]
route_id = "S1"
vessel_type = "Container"
fuel_type = "LNG"
year = 2025
ghg_intensity = 80.0
fuel_consumption = 1000.0
distance = 5000.0
total_emissions = 3000.0

[[routes]]
route_id = "S2"
vessel_type = "Tanker"
fuel_type = "HFO"
year = 2025
ghg_intensity = 92.0
fuel_consumption = 1000.0
distance = 5200.0
total_emissions = 3300.0

[[routes]]
route_id = "S3"
vessel_type = "BulkCarrier"
fuel_type = "MGO"
year = 2025
ghg_intensity = 90.0
fuel_consumption = 2000.0
distance = 9000.0
total_emissions = 6100.0
"#;

pub fn assert_path_exists(path: &Path) {
    assert!(path.exists(), "expected {} to exist", path.display());
}
