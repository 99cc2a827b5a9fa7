use anyhow::Result;
use fueleu::application::CreatePoolOptions;
use fueleu::presentation::cli::PoolsCommand;
use fueleu::presentation::factory::{create_pool_query_use_case, create_pool_use_case};
use fueleu::presentation::output::{pool_json, render_pool, render_pools};

use super::{lock, Output};
use crate::ui::context::UiContext;

pub fn run(cmd: PoolsCommand, ctx: &UiContext, out: &Output) -> Result<()> {
    match cmd {
        PoolsCommand::Create { year, ships } => cmd_create(ctx, out, year, ships),
        PoolsCommand::List { year } => cmd_list(ctx, out, year),
        PoolsCommand::Show { pool_id } => cmd_show(ctx, out, &pool_id),
    }
}

fn cmd_create(ctx: &UiContext, out: &Output, year: i32, ships: Vec<String>) -> Result<()> {
    let options = CreatePoolOptions::new(year).with_ships(ships);
    let _lock = lock(ctx)?;
    let result = create_pool_use_case(ctx.data_dir()).execute(&options)?;

    if out.is_json() {
        out.payload("pool", pool_json(&result))?;
    } else {
        print!("{}", render_pool(&result, ctx.color));
    }
    out.complete(None)
}

fn cmd_list(ctx: &UiContext, out: &Output, year: Option<i32>) -> Result<()> {
    let pools = create_pool_query_use_case(ctx.data_dir()).find_all(year)?;

    if out.is_json() {
        for pool in &pools {
            out.payload("pool", pool_json(pool))?;
        }
    } else if pools.is_empty() {
        println!("No pools.");
    } else {
        print!("{}", render_pools(&pools, ctx.color));
    }
    out.complete(Some(pools.len()))
}

fn cmd_show(ctx: &UiContext, out: &Output, pool_id: &str) -> Result<()> {
    let pool = create_pool_query_use_case(ctx.data_dir()).find_by_id(pool_id)?;

    if out.is_json() {
        out.payload("pool", pool_json(&pool))?;
    } else {
        print!("{}", render_pool(&pool, ctx.color));
    }
    out.complete(None)
}
