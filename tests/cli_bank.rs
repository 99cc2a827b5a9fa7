//! `fueleu bank` end to end

mod common;

use common::*;

#[test]
fn deposit_then_apply_within_banked_total() {
    let env = TestEnv::seeded();

    let deposit = env.run_json(&[
        "bank", "deposit", "--ship", "R002", "--amount", "1000", "--year", "2024",
    ]);
    let entry = &deposit.events_of("bank_entry")[0];
    assert_eq!(entry["amount_gco2eq"].as_f64().unwrap(), 1000.0);
    assert_eq!(entry["year"], 2024);

    let apply = env.run_json(&["bank", "apply", "--ship", "R002", "--amount", "400"]);
    let entry = &apply.events_of("bank_entry")[0];
    assert_eq!(entry["amount_gco2eq"].as_f64().unwrap(), -400.0);

    let ledger = env.run_json(&["bank", "ledger", "--ship", "R002"]);
    let view = &ledger.events_of("ledger")[0];
    assert_eq!(view["total"].as_f64().unwrap(), 600.0);
    assert_eq!(view["entries"].as_array().unwrap().len(), 2);
}

#[test]
fn apply_uses_configured_processing_year() {
    let env = TestEnv::seeded();
    env.run_ok(&[
        "bank", "deposit", "--ship", "R002", "--amount", "10", "--year", "2024",
    ]);

    let apply = env.run_with_env(
        &["--json", "bank", "apply", "--ship", "R002", "--amount", "10"],
        &[("FUELEU_PROCESSING_YEAR", "2031")],
    );

    assert!(apply.success, "{}", apply.stderr);
    assert_eq!(apply.events_of("bank_entry")[0]["year"], 2031);
}

#[test]
fn apply_more_than_banked_fails() {
    let env = TestEnv::seeded();
    env.run_ok(&[
        "bank", "deposit", "--ship", "R002", "--amount", "1000", "--year", "2024",
    ]);

    let result = env.run_json_err(&["bank", "apply", "--ship", "R002", "--amount", "1001"]);

    assert_eq!(result.exit_code, 2);
    assert_eq!(
        result.error_code().as_deref(),
        Some("INSUFFICIENT_BANKED_AMOUNT")
    );
    let error = &result.events_of("error")[0];
    assert_eq!(error["category"], "domain");
}

#[test]
fn deposit_from_deficit_ship_fails() {
    let env = TestEnv::seeded();

    let result = env.run_json_err(&[
        "bank", "deposit", "--ship", "R001", "--amount", "1", "--year", "2024",
    ]);

    assert_eq!(result.exit_code, 2);
    assert_eq!(result.error_code().as_deref(), Some("INSUFFICIENT_SURPLUS"));
}

#[test]
fn deposit_requires_a_compliance_record() {
    let env = TestEnv::new();
    env.run_ok(&["routes", "seed"]);

    let result = env.run_json_err(&[
        "bank", "deposit", "--ship", "R002", "--amount", "1", "--year", "2024",
    ]);

    assert_eq!(result.error_code().as_deref(), Some("NO_COMPLIANCE_RECORD"));
}

#[test]
fn non_positive_amount_is_rejected() {
    let env = TestEnv::seeded();

    let result = env.run_json_err(&["bank", "apply", "--ship", "R002", "--amount", "-5"]);

    assert_eq!(result.exit_code, 2);
    assert_eq!(result.error_code().as_deref(), Some("INVALID_AMOUNT"));
}

#[test]
fn text_error_names_the_code() {
    let env = TestEnv::seeded();

    let result = env.run(&["bank", "apply", "--ship", "R002", "--amount", "5"]);

    assert_eq!(result.exit_code, 2);
    assert!(
        result.stderr.contains("Error [INSUFFICIENT_BANKED_AMOUNT]"),
        "{}",
        result.stderr
    );
}
