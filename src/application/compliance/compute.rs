//! Compute Compliance Balance Use Case

use tracing::{debug, info};

use crate::domain::entities::ComplianceBalance;
use crate::domain::ports::{ComplianceStore, RouteStore};
use crate::error::FuelEuResult;

pub struct ComputeComplianceUseCase<RS, CS>
where
    RS: RouteStore,
    CS: ComplianceStore,
{
    routes: RS,
    compliance: CS,
}

impl<RS, CS> ComputeComplianceUseCase<RS, CS>
where
    RS: RouteStore,
    CS: ComplianceStore,
{
    pub fn new(routes: RS, compliance: CS) -> Self {
        Self { routes, compliance }
    }

    /// Compute the CB of every route (optionally of one year) and upsert the
    /// snapshots in a single write.
    pub fn execute(&self, year: Option<i32>) -> FuelEuResult<Vec<ComplianceBalance>> {
        let routes = self.routes.find_all(year)?;
        debug!(routes = routes.len(), ?year, "computing compliance balances");

        let records: Vec<ComplianceBalance> =
            routes.iter().map(ComplianceBalance::from_route).collect();

        if !records.is_empty() {
            self.compliance.save_all(&records)?;
        }

        info!(records = records.len(), ?year, "stored compliance snapshots");
        Ok(records)
    }
}
