//! Property tests for the pool allocator.

use proptest::prelude::*;

use fueleu::domain::services::{allocate_pool, ShipBalance, CONSERVATION_TOLERANCE};

/// Ships with arbitrary balances plus one ship that makes the pool net non-negative
fn net_non_negative_pool() -> impl Strategy<Value = Vec<ShipBalance>> {
    let balances = proptest::collection::vec(
        prop_oneof![
            3 => -1.0e6..1.0e6f64,
            1 => Just(0.0),
        ],
        1..12,
    );
    (balances, 0.0..1.0e5f64).prop_map(|(balances, headroom)| {
        let sum: f64 = balances.iter().sum();
        let mut ships: Vec<ShipBalance> = balances
            .into_iter()
            .enumerate()
            .map(|(i, cb)| ShipBalance::new(format!("S{i}"), cb))
            .collect();
        ships.push(ShipBalance::new("BALANCER", (-sum).max(0.0) + headroom + 1.0));
        ships
    })
}

fn scale(ships: &[ShipBalance]) -> f64 {
    ships.iter().map(|s| s.cb_gco2eq.abs()).sum::<f64>().max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: total CB before equals total CB after.
    #[test]
    fn property_allocation_conserves_total(ships in net_non_negative_pool()) {
        let allocation = allocate_pool("p", &ships).unwrap();

        let before: f64 = ships.iter().map(|s| s.cb_gco2eq).sum();
        let after = allocation.total_after();
        prop_assert!((before - after).abs() <= CONSERVATION_TOLERANCE * scale(&ships));
    }

    /// PROPERTY: surplus ships never exit negative, deficit ships never exit worse.
    #[test]
    fn property_members_respect_direction(ships in net_non_negative_pool()) {
        let allocation = allocate_pool("p", &ships).unwrap();

        for m in &allocation.members {
            if m.cb_before > 0.0 {
                prop_assert!(m.cb_after >= 0.0, "{} went negative", m.ship_id);
                prop_assert!(m.cb_after <= m.cb_before);
            }
            if m.cb_before < 0.0 {
                prop_assert!(m.cb_after >= m.cb_before, "{} got worse", m.ship_id);
                prop_assert!(m.cb_after <= 0.0);
            }
        }
    }

    /// PROPERTY: zero-balance ships are untouched.
    #[test]
    fn property_zero_ships_unchanged(ships in net_non_negative_pool()) {
        let allocation = allocate_pool("p", &ships).unwrap();

        for m in allocation.members.iter().filter(|m| m.cb_before == 0.0) {
            prop_assert_eq!(m.cb_after, 0.0);
        }
    }

    /// PROPERTY: a net non-negative pool covers every deficit.
    #[test]
    fn property_deficits_are_covered(ships in net_non_negative_pool()) {
        let allocation = allocate_pool("p", &ships).unwrap();
        let tolerance = CONSERVATION_TOLERANCE * scale(&ships);

        for m in allocation.members.iter().filter(|m| m.cb_before < 0.0) {
            prop_assert!(m.cb_after >= -tolerance, "{} left at {}", m.ship_id, m.cb_after);
        }
    }

    /// PROPERTY: every input ship appears exactly once in the output.
    #[test]
    fn property_members_match_input(ships in net_non_negative_pool()) {
        let allocation = allocate_pool("p", &ships).unwrap();

        prop_assert_eq!(allocation.members.len(), ships.len());
        for ship in &ships {
            let count = allocation
                .members
                .iter()
                .filter(|m| m.ship_id == ship.ship_id)
                .count();
            prop_assert_eq!(count, 1);
        }
    }

    /// PROPERTY: the same input always yields the same allocation.
    #[test]
    fn property_allocation_is_deterministic(ships in net_non_negative_pool()) {
        let first = allocate_pool("p", &ships).unwrap();
        let second = allocate_pool("p", &ships).unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: equal surpluses are drained in input order.
    #[test]
    fn property_equal_surpluses_drain_in_input_order(
        count in 2usize..6,
        each in 1.0..1.0e4f64,
        fraction in 0.05..0.95f64,
    ) {
        let mut ships: Vec<ShipBalance> = (0..count)
            .map(|i| ShipBalance::new(format!("S{i}"), each))
            .collect();
        ships.push(ShipBalance::new("D", -(each * count as f64 * fraction)));

        let allocation = allocate_pool("p", &ships).unwrap();

        let surplus: Vec<_> = allocation.members.iter().take(count).collect();
        for (i, member) in surplus.iter().enumerate() {
            prop_assert_eq!(&member.ship_id, &format!("S{i}"));
        }
        for pair in surplus.windows(2) {
            prop_assert!(pair[0].cb_after <= pair[1].cb_after);
        }
    }
}

#[test]
fn net_negative_pools_are_always_rejected() {
    let ships = [ShipBalance::new("S1", 100.0), ShipBalance::new("S2", -200.0)];
    assert!(allocate_pool("p", &ships).is_err());
}
