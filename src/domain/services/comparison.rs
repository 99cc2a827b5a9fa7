//! Route comparison
//!
//! Compares an alternative route against the baseline route.

use crate::domain::entities::Route;
use crate::domain::services::TARGET_INTENSITY;

#[derive(Debug, Clone, PartialEq)]
pub struct RouteComparison {
    pub baseline_route_id: String,
    pub alternative_route_id: String,
    pub baseline_ghg_intensity: f64,
    pub alternative_ghg_intensity: f64,
    /// baseline − alternative (positive = alternative is cleaner)
    pub delta_ghg_intensity: f64,
    pub baseline_cb: f64,
    pub alternative_cb: f64,
    /// alternative − baseline (positive = alternative is better)
    pub delta_cb: f64,
    /// Reduction in GHG intensity relative to the baseline, in percent
    pub percentage_savings: f64,
    /// (alternative / baseline − 1) × 100
    pub percent_diff: f64,
    /// Alternative meets the target intensity
    pub compliant: bool,
}

pub fn compare_routes(baseline: &Route, alternative: &Route) -> RouteComparison {
    let baseline_cb = baseline.compliance_balance();
    let alternative_cb = alternative.compliance_balance();

    let delta_ghg_intensity = baseline.ghg_intensity - alternative.ghg_intensity;

    let (percentage_savings, percent_diff) = if baseline.ghg_intensity == 0.0 {
        (0.0, 0.0)
    } else {
        (
            delta_ghg_intensity / baseline.ghg_intensity * 100.0,
            (alternative.ghg_intensity / baseline.ghg_intensity - 1.0) * 100.0,
        )
    };

    RouteComparison {
        baseline_route_id: baseline.route_id.clone(),
        alternative_route_id: alternative.route_id.clone(),
        baseline_ghg_intensity: baseline.ghg_intensity,
        alternative_ghg_intensity: alternative.ghg_intensity,
        delta_ghg_intensity,
        baseline_cb,
        alternative_cb,
        delta_cb: alternative_cb - baseline_cb,
        percentage_savings,
        percent_diff,
        compliant: alternative.ghg_intensity <= TARGET_INTENSITY,
    }
}
