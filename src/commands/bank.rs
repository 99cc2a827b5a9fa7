use anyhow::Result;
use fueleu::presentation::cli::{ApplyArgs, BankCommand, DepositArgs};
use fueleu::presentation::factory::create_banking_use_case;
use fueleu::presentation::output::{format_amount, ledger_json, render_ledger};
use fueleu::BankEntry;
use serde_json::json;

use super::{lock, Output};
use crate::ui::context::UiContext;

pub fn run(cmd: BankCommand, ctx: &UiContext, out: &Output) -> Result<()> {
    match cmd {
        BankCommand::Deposit(args) => cmd_deposit(ctx, out, &args),
        BankCommand::Apply(args) => cmd_apply(ctx, out, &args),
        BankCommand::Ledger { ship_id } => cmd_ledger(ctx, out, ship_id.as_deref()),
    }
}

fn entry_json(entry: &BankEntry) -> serde_json::Value {
    json!({
        "id": entry.id,
        "ship_id": entry.ship_id,
        "year": entry.year,
        "amount_gco2eq": entry.amount_gco2eq,
    })
}

fn cmd_deposit(ctx: &UiContext, out: &Output, args: &DepositArgs) -> Result<()> {
    let _lock = lock(ctx)?;
    let entry =
        create_banking_use_case(&ctx.config).bank_surplus(&args.ship_id, args.amount, args.year)?;

    if out.is_json() {
        out.payload("bank_entry", entry_json(&entry))?;
    } else {
        println!(
            "Banked {} gCO2eq for {} ({}), entry {}",
            format_amount(entry.amount_gco2eq),
            entry.ship_id,
            entry.year,
            entry.id
        );
    }
    out.complete(None)
}

fn cmd_apply(ctx: &UiContext, out: &Output, args: &ApplyArgs) -> Result<()> {
    let _lock = lock(ctx)?;
    let entry =
        create_banking_use_case(&ctx.config).apply_banked_surplus(&args.ship_id, args.amount)?;

    if out.is_json() {
        out.payload("bank_entry", entry_json(&entry))?;
    } else {
        println!(
            "Applied {} gCO2eq of banked surplus for {} in {}, entry {}",
            format_amount(-entry.amount_gco2eq),
            entry.ship_id,
            entry.year,
            entry.id
        );
    }
    out.complete(None)
}

fn cmd_ledger(ctx: &UiContext, out: &Output, ship_id: Option<&str>) -> Result<()> {
    let view = create_banking_use_case(&ctx.config).ledger(ship_id)?;

    if out.is_json() {
        out.payload("ledger", ledger_json(&view))?;
    } else if view.is_empty() {
        println!("No bank entries.");
    } else {
        print!("{}", render_ledger(&view, ctx.color));
    }
    out.complete(Some(view.entries.len()))
}
