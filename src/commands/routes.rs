use std::path::Path;

use anyhow::Result;
use fueleu::infrastructure::{load_routes_file, sample_routes};
use fueleu::presentation::cli::RoutesCommand;
use fueleu::presentation::factory::create_route_use_case;
use fueleu::presentation::output::{comparison_json, render_comparisons, render_routes, route_json};

use super::{lock, Output};
use crate::ui::context::UiContext;

pub fn run(cmd: RoutesCommand, ctx: &UiContext, out: &Output) -> Result<()> {
    match cmd {
        RoutesCommand::List { year } => cmd_list(ctx, out, year),
        RoutesCommand::Baseline { route_id } => cmd_baseline(ctx, out, &route_id),
        RoutesCommand::Compare { route_id, all } => match route_id {
            Some(route_id) if !all => cmd_compare(ctx, out, Some(&route_id)),
            _ => cmd_compare(ctx, out, None),
        },
        RoutesCommand::Seed => cmd_seed(ctx, out),
        RoutesCommand::Import { file } => cmd_import(ctx, out, &file),
    }
}

fn cmd_list(ctx: &UiContext, out: &Output, year: Option<i32>) -> Result<()> {
    let routes = create_route_use_case(ctx.data_dir()).list(year)?;

    if out.is_json() {
        for route in &routes {
            out.payload("route", route_json(route))?;
        }
    } else if routes.is_empty() {
        println!("No routes found. Run 'fueleu routes seed' or 'fueleu routes import <FILE>'.");
    } else {
        print!("{}", render_routes(&routes, ctx.color));
    }
    out.complete(Some(routes.len()))
}

fn cmd_baseline(ctx: &UiContext, out: &Output, route_id: &str) -> Result<()> {
    let _lock = lock(ctx)?;
    let route = create_route_use_case(ctx.data_dir()).set_baseline(route_id)?;

    if out.is_json() {
        out.payload("baseline", route_json(&route))?;
    } else {
        println!("Baseline set to {} ({}, {})", route.route_id, route.vessel_type, route.year);
    }
    out.complete(None)
}

fn cmd_compare(ctx: &UiContext, out: &Output, route_id: Option<&str>) -> Result<()> {
    let use_case = create_route_use_case(ctx.data_dir());
    let comparisons = match route_id {
        Some(id) => vec![use_case.compare(id)?],
        None => use_case.compare_all()?,
    };

    if out.is_json() {
        for comparison in &comparisons {
            out.payload("comparison", comparison_json(comparison))?;
        }
    } else if comparisons.is_empty() {
        println!("No routes to compare against the baseline.");
    } else {
        print!("{}", render_comparisons(&comparisons, ctx.color));
    }
    out.complete(Some(comparisons.len()))
}

fn cmd_seed(ctx: &UiContext, out: &Output) -> Result<()> {
    let _lock = lock(ctx)?;
    let count = create_route_use_case(ctx.data_dir()).seed(&sample_routes())?;

    if out.is_json() {
        out.payload("seeded", serde_json::json!({ "routes": count }))?;
    } else {
        println!("Seeded {count} sample routes into {}", ctx.data_dir().display());
    }
    out.complete(Some(count))
}

fn cmd_import(ctx: &UiContext, out: &Output, file: &Path) -> Result<()> {
    let routes = load_routes_file(file)?;
    let _lock = lock(ctx)?;
    let summary = create_route_use_case(ctx.data_dir()).import(&routes)?;

    if out.is_json() {
        out.payload(
            "imported",
            serde_json::json!({
                "inserted": summary.inserted,
                "updated": summary.updated,
            }),
        )?;
    } else {
        println!(
            "Imported {} routes from {} ({} new, {} updated)",
            summary.total(),
            file.display(),
            summary.inserted,
            summary.updated
        );
    }
    out.complete(Some(summary.total()))
}
