//! Output Rendering
//!
//! Aligned text tables for humans and JSON payloads for `--json`.
//! Renderers return strings; printing is left to the binary.

use crossterm::style::Stylize;
use serde_json::{json, Value};

use crate::application::{AdjustedBalance, LedgerView, PoolResult};
use crate::domain::entities::{ComplianceBalance, Route};
use crate::domain::services::RouteComparison;
use crate::domain::value_objects::CbStatus;

const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Semantic color of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Bad,
    Muted,
}

impl Tone {
    pub fn of_status(status: CbStatus) -> Option<Tone> {
        match status {
            CbStatus::Surplus => Some(Tone::Good),
            CbStatus::Deficit => Some(Tone::Bad),
            CbStatus::Neutral => Some(Tone::Muted),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    text: String,
    tone: Option<Tone>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
        }
    }

    pub fn toned(text: impl Into<String>, tone: Option<Tone>) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }

    fn styled(&self, color: bool) -> String {
        match (color, self.tone) {
            (true, Some(Tone::Good)) => self.text.as_str().green().to_string(),
            (true, Some(Tone::Bad)) => self.text.as_str().red().to_string(),
            (true, Some(Tone::Muted)) => self.text.as_str().dark_grey().to_string(),
            _ => self.text.clone(),
        }
    }
}

/// Column-aligned table. Padding is applied outside the color codes so
/// alignment is identical with and without color.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<(&'static str, Align)>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: &[(&'static str, Align)]) -> Self {
        Self {
            columns: columns.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<Cell>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self, color: bool) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, (header, _))| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i).map(Cell::width))
                    .fold(header.chars().count(), usize::max)
            })
            .collect();

        let mut out = String::new();
        let header: Vec<Cell> = self.columns.iter().map(|(h, _)| Cell::plain(*h)).collect();
        for row in std::iter::once(&header).chain(self.rows.iter()) {
            let line: Vec<String> = row
                .iter()
                .zip(self.columns.iter().zip(&widths))
                .map(|(cell, ((_, align), width))| {
                    let pad = " ".repeat(width.saturating_sub(cell.width()));
                    match align {
                        Align::Left => format!("{}{}", cell.styled(color), pad),
                        Align::Right => format!("{}{}", pad, cell.styled(color)),
                    }
                })
                .collect();
            out.push_str(line.join(COLUMN_GAP).trim_end());
            out.push('\n');
        }
        out
    }
}

/// Two decimals, without a negative sign on zero
pub fn format_amount(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.2}")
}

fn format_signed(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:+.2}")
}

fn format_ghg(value: f64) -> String {
    format!("{value:.4}")
}

fn status_cell(cb: f64) -> Cell {
    let status = CbStatus::of(cb);
    Cell::toned(status.as_str(), Tone::of_status(status))
}

pub fn render_routes(routes: &[Route], color: bool) -> String {
    let mut table = Table::new(&[
        ("ROUTE", Align::Left),
        ("VESSEL", Align::Left),
        ("FUEL", Align::Left),
        ("YEAR", Align::Right),
        ("GHG", Align::Right),
        ("FUEL (t)", Align::Right),
        ("DISTANCE", Align::Right),
        ("EMISSIONS", Align::Right),
        ("BASELINE", Align::Left),
    ]);
    for route in routes {
        table.row(vec![
            Cell::plain(route.route_id.as_str()),
            Cell::plain(route.vessel_type.as_str()),
            Cell::plain(route.fuel_type.as_str()),
            Cell::plain(route.year.to_string()),
            Cell::plain(format_ghg(route.ghg_intensity)),
            Cell::plain(format_amount(route.fuel_consumption)),
            Cell::plain(format_amount(route.distance)),
            Cell::plain(format_amount(route.total_emissions)),
            Cell::toned(
                if route.is_baseline { "yes" } else { "" },
                Some(Tone::Good),
            ),
        ]);
    }
    table.render(color)
}

pub fn render_comparisons(comparisons: &[RouteComparison], color: bool) -> String {
    let mut table = Table::new(&[
        ("BASELINE", Align::Left),
        ("ROUTE", Align::Left),
        ("GHG BASE", Align::Right),
        ("GHG ROUTE", Align::Right),
        ("DIFF %", Align::Right),
        ("DELTA CB", Align::Right),
        ("COMPLIANT", Align::Left),
    ]);
    for c in comparisons {
        let (label, tone) = if c.compliant {
            ("yes", Tone::Good)
        } else {
            ("no", Tone::Bad)
        };
        table.row(vec![
            Cell::plain(c.baseline_route_id.as_str()),
            Cell::plain(c.alternative_route_id.as_str()),
            Cell::plain(format_ghg(c.baseline_ghg_intensity)),
            Cell::plain(format_ghg(c.alternative_ghg_intensity)),
            Cell::plain(format_signed(c.percent_diff)),
            Cell::plain(format_signed(c.delta_cb)),
            Cell::toned(label, Some(tone)),
        ]);
    }
    table.render(color)
}

pub fn render_balances(balances: &[ComplianceBalance], color: bool) -> String {
    let mut table = Table::new(&[
        ("SHIP", Align::Left),
        ("YEAR", Align::Right),
        ("CB (gCO2eq)", Align::Right),
        ("STATUS", Align::Left),
    ]);
    for b in balances {
        table.row(vec![
            Cell::plain(b.ship_id.as_str()),
            Cell::plain(b.year.to_string()),
            Cell::plain(format_amount(b.cb_gco2eq)),
            status_cell(b.cb_gco2eq),
        ]);
    }
    table.render(color)
}

pub fn render_adjusted(balances: &[AdjustedBalance], color: bool) -> String {
    let mut table = Table::new(&[
        ("SHIP", Align::Left),
        ("YEAR", Align::Right),
        ("RAW CB", Align::Right),
        ("BANKED", Align::Right),
        ("ADJUSTED CB", Align::Right),
        ("STATUS", Align::Left),
    ]);
    for b in balances {
        table.row(vec![
            Cell::plain(b.ship_id.as_str()),
            Cell::plain(b.year.to_string()),
            Cell::plain(format_amount(b.raw_cb)),
            Cell::plain(format_amount(b.banked)),
            Cell::plain(format_amount(b.adjusted_cb)),
            status_cell(b.adjusted_cb),
        ]);
    }
    table.render(color)
}

pub fn render_ledger(view: &LedgerView, color: bool) -> String {
    let mut table = Table::new(&[
        ("ENTRY", Align::Left),
        ("SHIP", Align::Left),
        ("YEAR", Align::Right),
        ("AMOUNT", Align::Right),
        ("RUNNING", Align::Right),
    ]);
    for line in &view.entries {
        let tone = if line.entry.is_withdrawal() {
            Tone::Bad
        } else {
            Tone::Good
        };
        table.row(vec![
            Cell::plain(line.entry.id.as_str()),
            Cell::plain(line.entry.ship_id.as_str()),
            Cell::plain(line.entry.year.to_string()),
            Cell::toned(format_signed(line.entry.amount_gco2eq), Some(tone)),
            Cell::plain(format_amount(line.running_total)),
        ]);
    }
    let mut out = table.render(color);
    out.push_str(&format!("total banked {}\n", format_amount(view.total)));
    out
}

pub fn render_pool(result: &PoolResult, color: bool) -> String {
    let mut table = Table::new(&[
        ("SHIP", Align::Left),
        ("CB BEFORE", Align::Right),
        ("CB AFTER", Align::Right),
        ("TRANSFER", Align::Right),
        ("STATUS", Align::Left),
    ]);
    for m in &result.members {
        table.row(vec![
            Cell::plain(m.ship_id.as_str()),
            Cell::plain(format_amount(m.cb_before)),
            Cell::plain(format_amount(m.cb_after)),
            Cell::plain(format_signed(m.transferred())),
            status_cell(m.cb_after),
        ]);
    }

    let mut out = format!(
        "Pool {} ({}) created {}\n",
        result.pool_id(),
        result.year(),
        result.created_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
    out.push_str(&table.render(color));
    out.push_str(&format!(
        "net CB {}  surplus before {}  deficit before {}\n",
        format_amount(result.net_cb),
        format_amount(result.total_surplus_before),
        format_amount(result.total_deficit_before)
    ));
    out
}

pub fn render_pools(pools: &[PoolResult], color: bool) -> String {
    let mut table = Table::new(&[
        ("POOL", Align::Left),
        ("YEAR", Align::Right),
        ("MEMBERS", Align::Right),
        ("NET CB", Align::Right),
        ("CREATED", Align::Left),
    ]);
    for p in pools {
        table.row(vec![
            Cell::plain(p.pool_id()),
            Cell::plain(p.year().to_string()),
            Cell::plain(p.members.len().to_string()),
            Cell::toned(format_amount(p.net_cb), Tone::of_status(CbStatus::of(p.net_cb))),
            Cell::plain(p.created_at().format("%Y-%m-%d %H:%M:%S").to_string()),
        ]);
    }
    table.render(color)
}

pub fn route_json(route: &Route) -> Value {
    json!({
        "route_id": route.route_id,
        "vessel_type": route.vessel_type,
        "fuel_type": route.fuel_type,
        "year": route.year,
        "ghg_intensity": route.ghg_intensity,
        "fuel_consumption": route.fuel_consumption,
        "distance": route.distance,
        "total_emissions": route.total_emissions,
        "is_baseline": route.is_baseline,
    })
}

pub fn comparison_json(c: &RouteComparison) -> Value {
    json!({
        "baseline_route_id": c.baseline_route_id,
        "route_id": c.alternative_route_id,
        "baseline_ghg_intensity": c.baseline_ghg_intensity,
        "ghg_intensity": c.alternative_ghg_intensity,
        "delta_ghg_intensity": c.delta_ghg_intensity,
        "baseline_cb": c.baseline_cb,
        "cb": c.alternative_cb,
        "delta_cb": c.delta_cb,
        "percentage_savings": c.percentage_savings,
        "percent_diff": c.percent_diff,
        "compliant": c.compliant,
    })
}

pub fn balance_json(b: &ComplianceBalance) -> Value {
    json!({
        "ship_id": b.ship_id,
        "year": b.year,
        "cb_gco2eq": b.cb_gco2eq,
        "status": b.status(),
    })
}

pub fn adjusted_json(b: &AdjustedBalance) -> Value {
    json!({
        "ship_id": b.ship_id,
        "year": b.year,
        "raw_cb": b.raw_cb,
        "banked": b.banked,
        "adjusted_cb": b.adjusted_cb,
        "status": b.status(),
    })
}

pub fn ledger_json(view: &LedgerView) -> Value {
    let entries: Vec<Value> = view
        .entries
        .iter()
        .map(|line| {
            json!({
                "id": line.entry.id,
                "ship_id": line.entry.ship_id,
                "year": line.entry.year,
                "amount_gco2eq": line.entry.amount_gco2eq,
                "running_total": line.running_total,
            })
        })
        .collect();
    json!({
        "ship_id": view.ship_id,
        "entries": entries,
        "total": view.total,
    })
}

pub fn pool_json(result: &PoolResult) -> Value {
    let members: Vec<Value> = result
        .members
        .iter()
        .map(|m| {
            json!({
                "ship_id": m.ship_id,
                "cb_before": m.cb_before,
                "cb_after": m.cb_after,
            })
        })
        .collect();
    json!({
        "pool_id": result.pool_id(),
        "year": result.year(),
        "created_at": result.created_at().to_rfc3339(),
        "members": members,
        "net_cb": result.net_cb,
        "total_surplus_before": result.total_surplus_before,
        "total_deficit_before": result.total_deficit_before,
    })
}
