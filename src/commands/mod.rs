//! Command handlers for the `fueleu` binary

pub mod bank;
pub mod compliance;
pub mod config;
pub mod pools;
pub mod routes;

use anyhow::Result;
use fueleu::config::resolve;
use fueleu::infrastructure::LedgerLock;
use fueleu::presentation::cli::{
    BankCommand, Cli, Commands, ComplianceCommand, ConfigCommand, PoolsCommand, RoutesCommand,
};
use fueleu::FuelEuError;
use serde_json::Value;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, PayloadEvent, StartEvent};

/// Name used in JSON events, e.g. `pools create`
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Routes(RoutesCommand::List { .. }) => "routes list",
        Commands::Routes(RoutesCommand::Baseline { .. }) => "routes baseline",
        Commands::Routes(RoutesCommand::Compare { .. }) => "routes compare",
        Commands::Routes(RoutesCommand::Seed) => "routes seed",
        Commands::Routes(RoutesCommand::Import { .. }) => "routes import",
        Commands::Compliance(ComplianceCommand::Compute { .. }) => "compliance compute",
        Commands::Compliance(ComplianceCommand::Adjusted { .. }) => "compliance adjusted",
        Commands::Bank(BankCommand::Deposit(_)) => "bank deposit",
        Commands::Bank(BankCommand::Apply(_)) => "bank apply",
        Commands::Bank(BankCommand::Ledger { .. }) => "bank ledger",
        Commands::Pools(PoolsCommand::Create { .. }) => "pools create",
        Commands::Pools(PoolsCommand::List { .. }) => "pools list",
        Commands::Pools(PoolsCommand::Show { .. }) => "pools show",
        Commands::Config(ConfigCommand::Show) => "config show",
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let name = command_name(&cli.command);
    let cwd = std::env::current_dir()?;
    let loaded = resolve(cli.config.as_deref(), &cwd)?;
    for warning in &loaded.warnings {
        eprintln!("Warning: {warning}");
    }

    let config = loaded.config.with_data_dir(cli.data_dir);
    let ctx = UiContext::new(cli.json, config, loaded.source);
    let out = Output::start(&ctx, name)?;

    match cli.command {
        Commands::Routes(cmd) => routes::run(cmd, &ctx, &out),
        Commands::Compliance(cmd) => compliance::run(cmd, &ctx, &out),
        Commands::Bank(cmd) => bank::run(cmd, &ctx, &out),
        Commands::Pools(cmd) => pools::run(cmd, &ctx, &out),
        Commands::Config(ConfigCommand::Show) => config::cmd_show(&ctx, &out),
    }
}

/// Hold the data directory lock for the rest of a mutating command
pub fn lock(ctx: &UiContext) -> Result<LedgerLock> {
    Ok(LedgerLock::acquire(ctx.data_dir()).map_err(FuelEuError::from)?)
}

/// Per-command output: NDJSON events with `--json`, text otherwise
pub struct Output<'a> {
    json: bool,
    command: &'a str,
}

impl<'a> Output<'a> {
    fn start(ctx: &UiContext, command: &'a str) -> Result<Self> {
        if ctx.json {
            emit_event(&StartEvent::new(command))?;
        }
        Ok(Self {
            json: ctx.json,
            command,
        })
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn payload(&self, event: &str, data: Value) -> Result<()> {
        emit_event(&PayloadEvent::new(event, self.command, data))?;
        Ok(())
    }

    pub fn complete(&self, count: Option<usize>) -> Result<()> {
        if self.json {
            let event = CompleteEvent::success(self.command);
            let event = match count {
                Some(n) => event.with_count(n),
                None => event,
            };
            emit_event(&event)?;
        }
        Ok(())
    }
}
