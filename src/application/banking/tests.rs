//! Banking Use Case Tests

use super::*;
use crate::application::testing::{MockBankStore, MockComplianceStore};
use crate::domain::entities::ComplianceBalance;
use crate::domain::ports::BankStore;
use crate::domain::DomainError;
use crate::error::FuelEuError;

fn setup() -> (MockComplianceStore, MockBankStore) {
    let compliance = MockComplianceStore::with(vec![
        ComplianceBalance::new("R002", 2024, 500.0),
        ComplianceBalance::new("R001", 2024, -300.0),
    ]);
    (compliance, MockBankStore::default())
}

fn domain_error(err: FuelEuError) -> DomainError {
    match err {
        FuelEuError::Domain(e) => e,
        other => panic!("expected domain error, got {other:?}"),
    }
}

#[test]
fn deposit_exactly_the_surplus() {
    let (compliance, bank) = setup();
    let use_case = BankingUseCase::new(&compliance, &bank);

    let entry = use_case.bank_surplus("R002", 500.0, 2024).unwrap();

    assert_eq!(entry.amount_gco2eq, 500.0);
    assert_eq!(entry.year, 2024);
    assert_eq!(bank.entries.borrow().len(), 1);
}

#[test]
fn deposit_more_than_surplus_fails() {
    let (compliance, bank) = setup();
    let use_case = BankingUseCase::new(&compliance, &bank);

    let err = use_case.bank_surplus("R002", 500.5, 2024).unwrap_err();
    assert_eq!(
        domain_error(err),
        DomainError::InsufficientSurplus {
            ship_id: "R002".to_string()
        }
    );
    assert!(bank.entries.borrow().is_empty());
}

#[test]
fn deficit_ship_cannot_bank() {
    let (compliance, bank) = setup();
    let use_case = BankingUseCase::new(&compliance, &bank);

    let err = use_case.bank_surplus("R001", 1.0, 2024).unwrap_err();
    assert_eq!(err.code(), "INSUFFICIENT_SURPLUS");
}

#[test]
fn deposit_needs_a_compliance_record() {
    let (compliance, bank) = setup();
    let use_case = BankingUseCase::new(&compliance, &bank);

    let err = use_case.bank_surplus("R002", 10.0, 2025).unwrap_err();
    assert_eq!(
        domain_error(err),
        DomainError::ComplianceRecordNotFound {
            ship_id: "R002".to_string(),
            year: 2025
        }
    );
}

#[test]
fn non_positive_amounts_are_invalid() {
    let (compliance, bank) = setup();
    let use_case = BankingUseCase::new(&compliance, &bank);

    for amount in [0.0, -5.0] {
        let err = use_case.bank_surplus("R002", amount, 2024).unwrap_err();
        assert_eq!(domain_error(err), DomainError::InvalidAmount { amount });

        let err = use_case.apply_banked_surplus("R002", amount).unwrap_err();
        assert_eq!(err.code(), "INVALID_AMOUNT");
    }

    let err = use_case.bank_surplus("R002", f64::NAN, 2024).unwrap_err();
    assert_eq!(err.code(), "INVALID_AMOUNT");
}

#[test]
fn apply_exactly_the_banked_total_leaves_zero() {
    let (compliance, bank) = setup();
    let use_case = BankingUseCase::new(&compliance, &bank).with_processing_year(Some(2025));
    use_case.bank_surplus("R002", 300.0, 2024).unwrap();

    let withdrawal = use_case.apply_banked_surplus("R002", 300.0).unwrap();

    assert_eq!(withdrawal.amount_gco2eq, -300.0);
    assert_eq!(withdrawal.year, 2025);
    assert_eq!(bank.get_total_banked("R002").unwrap(), 0.0);
}

#[test]
fn apply_more_than_banked_fails() {
    let (compliance, bank) = setup();
    let use_case = BankingUseCase::new(&compliance, &bank);
    use_case.bank_surplus("R002", 100.0, 2024).unwrap();

    let err = use_case.apply_banked_surplus("R002", 101.0).unwrap_err();
    assert_eq!(
        domain_error(err),
        DomainError::InsufficientBanked {
            ship_id: "R002".to_string(),
            requested: 101.0,
            available: 100.0
        }
    );
    assert_eq!(bank.entries.borrow().len(), 1);
}

#[test]
fn apply_without_deposits_fails() {
    let (compliance, bank) = setup();
    let use_case = BankingUseCase::new(&compliance, &bank);

    let err = use_case.apply_banked_surplus("R001", 1.0).unwrap_err();
    assert_eq!(err.code(), "INSUFFICIENT_BANKED_AMOUNT");
}

#[test]
fn processing_year_defaults_to_current_year() {
    use chrono::{Datelike, Utc};

    let (compliance, bank) = setup();
    let use_case = BankingUseCase::new(&compliance, &bank);
    assert_eq!(use_case.processing_year(), Utc::now().year());
}

#[test]
fn ledger_keeps_running_total() {
    let (compliance, bank) = setup();
    let use_case = BankingUseCase::new(&compliance, &bank).with_processing_year(Some(2025));
    use_case.bank_surplus("R002", 200.0, 2024).unwrap();
    use_case.bank_surplus("R002", 100.0, 2024).unwrap();
    use_case.apply_banked_surplus("R002", 250.0).unwrap();

    let ledger = use_case.ledger(Some("R002")).unwrap();
    let running: Vec<f64> = ledger.entries.iter().map(|l| l.running_total).collect();
    assert_eq!(running, vec![200.0, 300.0, 50.0]);
    assert_eq!(ledger.total, 50.0);

    let other = use_case.ledger(Some("R001")).unwrap();
    assert!(other.is_empty());
    assert_eq!(use_case.ledger(None).unwrap().entries.len(), 3);
}
