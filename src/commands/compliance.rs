use anyhow::Result;
use fueleu::presentation::cli::ComplianceCommand;
use fueleu::presentation::factory::{
    create_adjusted_balance_use_case, create_compute_compliance_use_case,
};
use fueleu::presentation::output::{adjusted_json, balance_json, render_adjusted, render_balances};

use super::{lock, Output};
use crate::ui::context::UiContext;

pub fn run(cmd: ComplianceCommand, ctx: &UiContext, out: &Output) -> Result<()> {
    match cmd {
        ComplianceCommand::Compute { year } => cmd_compute(ctx, out, year),
        ComplianceCommand::Adjusted { year } => cmd_adjusted(ctx, out, year),
    }
}

fn cmd_compute(ctx: &UiContext, out: &Output, year: Option<i32>) -> Result<()> {
    let _lock = lock(ctx)?;
    let balances = create_compute_compliance_use_case(ctx.data_dir()).execute(year)?;

    if out.is_json() {
        for balance in &balances {
            out.payload("balance", balance_json(balance))?;
        }
    } else if balances.is_empty() {
        println!("No routes to compute.");
    } else {
        print!("{}", render_balances(&balances, ctx.color));
    }
    out.complete(Some(balances.len()))
}

fn cmd_adjusted(ctx: &UiContext, out: &Output, year: Option<i32>) -> Result<()> {
    let balances = create_adjusted_balance_use_case(ctx.data_dir()).execute(year)?;

    if out.is_json() {
        for balance in &balances {
            out.payload("adjusted_balance", adjusted_json(balance))?;
        }
    } else if balances.is_empty() {
        println!("No compliance records. Run 'fueleu compliance compute' first.");
    } else {
        print!("{}", render_adjusted(&balances, ctx.color));
    }
    out.complete(Some(balances.len()))
}
