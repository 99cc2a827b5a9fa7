//! Pool allocator
//!
//! Redistributes compliance balance across the ships of a pool.
//!
//! Algorithm (greedy, largest first on both sides):
//!   1. Partition ships into surplus (CB > 0), deficit (CB < 0) and zero
//!   2. Sort surplus descending and deficit by size of the deficit, descending.
//!      Both sorts are stable: ties keep their input order
//!   3. For each deficit ship, pull `min(remaining surplus, outstanding need)`
//!      from the current surplus ship, moving to the next surplus ship once
//!      the current one is drained
//!
//! Invariants of the returned members:
//!   - Surplus ships never end negative: `cb_after >= 0`
//!   - Deficit ships never end worse: `cb_after >= cb_before`
//!   - Zero ships are untouched
//!   - Total CB is conserved: `Σ cb_before == Σ cb_after` (within tolerance)
//!
//! The allocation is not proportional. Whoever sorts first is served first.

use crate::domain::entities::PoolMember;
use crate::domain::DomainError;

/// Relative tolerance used when checking conservation
pub const CONSERVATION_TOLERANCE: f64 = 1e-9;

/// Allocator input: a ship and its compliance balance
#[derive(Debug, Clone, PartialEq)]
pub struct ShipBalance {
    pub ship_id: String,
    pub cb_gco2eq: f64,
}

impl ShipBalance {
    pub fn new(ship_id: impl Into<String>, cb_gco2eq: f64) -> Self {
        Self {
            ship_id: ship_id.into(),
            cb_gco2eq,
        }
    }
}

/// Allocator output
#[derive(Debug, Clone, PartialEq)]
pub struct PoolAllocation {
    /// Surplus ships (sorted), then deficit ships (sorted), then zero ships
    pub members: Vec<PoolMember>,
    /// Sum of the positive balances
    pub total_surplus_before: f64,
    /// Sum of the negative balances (a negative number)
    pub total_deficit_before: f64,
    /// Sum of all balances, always >= 0
    pub net_cb: f64,
}

impl PoolAllocation {
    pub fn member(&self, ship_id: &str) -> Option<&PoolMember> {
        self.members.iter().find(|m| m.ship_id == ship_id)
    }

    pub fn total_after(&self) -> f64 {
        self.members.iter().map(|m| m.cb_after).sum()
    }
}

struct SurplusSlot<'a> {
    ship: &'a ShipBalance,
    remaining: f64,
}

struct DeficitSlot<'a> {
    ship: &'a ShipBalance,
    outstanding: f64,
    received: f64,
}

/// Run the greedy allocation for `pool_id`.
///
/// Preconditions, checked in order:
/// 1. at least two ships, else [`DomainError::InsufficientMembers`]
/// 2. non-negative net balance, else [`DomainError::PoolNetNegative`]
/// 3. finite balances only, else [`DomainError::NonFiniteBalance`]
/// 4. a finite net balance, else [`DomainError::NetBalanceOverflow`]
///
/// The result is verified with [`verify_allocation`] before it is returned.
pub fn allocate_pool(pool_id: &str, ships: &[ShipBalance]) -> Result<PoolAllocation, DomainError> {
    if ships.len() < 2 {
        return Err(DomainError::InsufficientMembers { count: ships.len() });
    }

    let net_cb: f64 = ships.iter().map(|s| s.cb_gco2eq).sum();
    if net_cb < 0.0 {
        return Err(DomainError::PoolNetNegative { net_cb });
    }

    if let Some(ship) = ships.iter().find(|s| !s.cb_gco2eq.is_finite()) {
        return Err(DomainError::NonFiniteBalance {
            ship_id: ship.ship_id.clone(),
        });
    }

    if !net_cb.is_finite() {
        return Err(DomainError::NetBalanceOverflow { net_cb });
    }

    let mut surplus: Vec<SurplusSlot<'_>> = ships
        .iter()
        .filter(|s| s.cb_gco2eq > 0.0)
        .map(|ship| SurplusSlot {
            ship,
            remaining: ship.cb_gco2eq,
        })
        .collect();
    surplus.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));

    let mut deficit: Vec<DeficitSlot<'_>> = ships
        .iter()
        .filter(|s| s.cb_gco2eq < 0.0)
        .map(|ship| DeficitSlot {
            ship,
            outstanding: -ship.cb_gco2eq,
            received: 0.0,
        })
        .collect();
    deficit.sort_by(|a, b| b.outstanding.total_cmp(&a.outstanding));

    // Each pass either covers the deficit ship or drains the current
    // surplus ship, so the loop is bounded by |surplus| + |deficit|.
    let mut cursor = 0;
    for need in deficit.iter_mut() {
        while need.outstanding > 0.0 && cursor < surplus.len() {
            let giver = &mut surplus[cursor];
            let transfer = giver.remaining.min(need.outstanding);

            giver.remaining -= transfer;
            need.outstanding -= transfer;
            need.received += transfer;

            if giver.remaining <= 0.0 {
                cursor += 1;
            }
        }
    }

    let mut members = Vec::with_capacity(ships.len());

    for slot in &surplus {
        members.push(PoolMember {
            pool_id: pool_id.to_string(),
            ship_id: slot.ship.ship_id.clone(),
            cb_before: slot.ship.cb_gco2eq,
            cb_after: slot.remaining,
        });
    }

    for slot in &deficit {
        debug_assert!(slot.received <= -slot.ship.cb_gco2eq * (1.0 + CONSERVATION_TOLERANCE));
        members.push(PoolMember {
            pool_id: pool_id.to_string(),
            ship_id: slot.ship.ship_id.clone(),
            cb_before: slot.ship.cb_gco2eq,
            // cb_before + received, taken from the outstanding need so a
            // fully covered ship lands exactly on zero
            cb_after: 0.0 - slot.outstanding,
        });
    }

    for ship in ships.iter().filter(|s| s.cb_gco2eq == 0.0) {
        members.push(PoolMember {
            pool_id: pool_id.to_string(),
            ship_id: ship.ship_id.clone(),
            cb_before: 0.0,
            cb_after: 0.0,
        });
    }

    let allocation = PoolAllocation {
        members,
        total_surplus_before: surplus.iter().map(|s| s.ship.cb_gco2eq).sum(),
        total_deficit_before: deficit.iter().map(|d| d.ship.cb_gco2eq).sum(),
        net_cb,
    };

    verify_allocation(&allocation)?;
    Ok(allocation)
}

/// Check the member invariants of an allocation
pub fn verify_allocation(allocation: &PoolAllocation) -> Result<(), DomainError> {
    if !allocation.net_cb.is_finite() {
        return Err(violation(format!("net CB is {}", allocation.net_cb)));
    }

    let mut before = 0.0;
    let mut after = 0.0;
    let mut scale = 0.0_f64;

    for m in &allocation.members {
        if m.cb_before > 0.0 && m.cb_after < 0.0 {
            return Err(violation(format!(
                "surplus ship {} exits negative ({})",
                m.ship_id, m.cb_after
            )));
        }
        if m.cb_before < 0.0 && m.cb_after < m.cb_before {
            return Err(violation(format!(
                "deficit ship {} exits worse ({} -> {})",
                m.ship_id, m.cb_before, m.cb_after
            )));
        }
        if m.cb_before == 0.0 && m.cb_after != 0.0 {
            return Err(violation(format!(
                "neutral ship {} was changed to {}",
                m.ship_id, m.cb_after
            )));
        }

        before += m.cb_before;
        after += m.cb_after;
        scale += m.cb_before.abs();
    }

    let tolerance = CONSERVATION_TOLERANCE * scale.max(1.0);
    if (before - after).abs() > tolerance {
        return Err(violation(format!(
            "balance not conserved (before {before}, after {after})"
        )));
    }

    Ok(())
}

fn violation(detail: String) -> DomainError {
    DomainError::AllocationInvariantViolated { detail }
}
