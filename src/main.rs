//! fueleu CLI - FuelEU Maritime compliance ledger
//!
//! Usage: fueleu <COMMAND>
//!
//! Commands:
//!   routes      List, compare, seed and import voyage routes
//!   compliance  Compute compliance balances
//!   bank        Bank and apply surplus
//!   pools       Pool ships so surplus covers deficit
//!   config      Show the effective configuration

mod commands;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use fueleu::presentation::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    let command = commands::command_name(&cli.command);

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, json, command);
            ExitCode::from(ui::error::exit_code(&err))
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` info, `-vv` debug, `-vvv` trace, default warn.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
