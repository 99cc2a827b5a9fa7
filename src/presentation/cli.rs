//! CLI Argument Parsing
//!
//! Global flags (`--json`, `-v`, `--data-dir`, `--config`) are accepted
//! before or after any subcommand.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// fueleu - compliance balance, banking and pooling ledger
#[derive(Parser, Debug)]
#[command(name = "fueleu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding the ledger files
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file to use instead of the discovered one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Voyage routes and baseline comparison
    #[command(subcommand)]
    Routes(RoutesCommand),

    /// Compliance balance snapshots
    #[command(subcommand)]
    Compliance(ComplianceCommand),

    /// Banking ledger
    #[command(subcommand)]
    Bank(BankCommand),

    /// Pooling
    #[command(subcommand)]
    Pools(PoolsCommand),

    /// Configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum RoutesCommand {
    /// List routes ordered by route id
    List {
        #[arg(long)]
        year: Option<i32>,
    },

    /// Mark a route as the comparison baseline
    Baseline { route_id: String },

    /// Compare a route (or every route) against the baseline
    Compare {
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        route_id: Option<String>,

        /// Compare every non-baseline route
        #[arg(long)]
        all: bool,
    },

    /// Replace all routes with the sample data set
    Seed,

    /// Upsert routes from a TOML file of [[routes]] tables
    Import { file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum ComplianceCommand {
    /// Compute and store the compliance balance of every route
    Compute {
        #[arg(long)]
        year: Option<i32>,
    },

    /// Stored balances adjusted by each ship's banked total
    Adjusted {
        #[arg(long)]
        year: Option<i32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum BankCommand {
    /// Bank surplus from a ship's compliance record
    Deposit(DepositArgs),

    /// Withdraw banked surplus
    Apply(ApplyArgs),

    /// Show ledger entries with running totals
    Ledger {
        #[arg(long = "ship", value_name = "SHIP_ID")]
        ship_id: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct DepositArgs {
    #[arg(long = "ship", value_name = "SHIP_ID")]
    pub ship_id: String,

    /// Amount in gCO2eq
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Compliance year the surplus comes from
    #[arg(long)]
    pub year: i32,
}

#[derive(Args, Debug)]
pub struct ApplyArgs {
    #[arg(long = "ship", value_name = "SHIP_ID")]
    pub ship_id: String,

    /// Amount in gCO2eq
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,
}

#[derive(Subcommand, Debug)]
pub enum PoolsCommand {
    /// Allocate surplus across ships and persist the pool
    Create {
        #[arg(long)]
        year: i32,

        /// Comma-separated ship ids
        #[arg(long, value_delimiter = ',', required = true, num_args = 1..)]
        ships: Vec<String>,
    },

    /// List pools, newest last
    List {
        #[arg(long)]
        year: Option<i32>,
    },

    /// Show one pool and its members
    Show { pool_id: String },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration and where it came from
    Show,
}
