//! Use Case Factory
//!
//! Creates use cases with the TOML stores of one data directory wired in.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{
    AdjustedBalanceUseCase, BankingUseCase, ComputeComplianceUseCase, CreatePoolUseCase,
    PoolQueryUseCase, RouteUseCase,
};
use crate::config::Config;
use crate::infrastructure::{TomlBankStore, TomlComplianceStore, TomlPoolStore, TomlRouteStore};

pub type ConcreteRouteUseCase = RouteUseCase<TomlRouteStore>;
pub type ConcreteComputeComplianceUseCase =
    ComputeComplianceUseCase<TomlRouteStore, TomlComplianceStore>;
pub type ConcreteAdjustedBalanceUseCase =
    AdjustedBalanceUseCase<TomlComplianceStore, TomlBankStore>;
pub type ConcreteBankingUseCase = BankingUseCase<TomlComplianceStore, TomlBankStore>;
pub type ConcreteCreatePoolUseCase = CreatePoolUseCase<TomlComplianceStore, TomlPoolStore>;
pub type ConcretePoolQueryUseCase = PoolQueryUseCase<TomlPoolStore>;

pub fn create_route_use_case(data_dir: &Path) -> ConcreteRouteUseCase {
    RouteUseCase::new(TomlRouteStore::new(data_dir))
}

pub fn create_compute_compliance_use_case(data_dir: &Path) -> ConcreteComputeComplianceUseCase {
    ComputeComplianceUseCase::new(
        TomlRouteStore::new(data_dir),
        TomlComplianceStore::new(data_dir),
    )
}

pub fn create_adjusted_balance_use_case(data_dir: &Path) -> ConcreteAdjustedBalanceUseCase {
    AdjustedBalanceUseCase::new(
        TomlComplianceStore::new(data_dir),
        TomlBankStore::new(data_dir),
    )
}

/// Banking use case stamped with the configured processing year
pub fn create_banking_use_case(config: &Config) -> ConcreteBankingUseCase {
    let data_dir = config.data_dir();
    BankingUseCase::new(
        TomlComplianceStore::new(data_dir),
        TomlBankStore::new(data_dir),
    )
    .with_processing_year(config.banking.processing_year)
}

pub fn create_pool_use_case(data_dir: &Path) -> ConcreteCreatePoolUseCase {
    CreatePoolUseCase::new(
        TomlComplianceStore::new(data_dir),
        TomlPoolStore::new(data_dir),
    )
}

pub fn create_pool_query_use_case(data_dir: &Path) -> ConcretePoolQueryUseCase {
    PoolQueryUseCase::new(TomlPoolStore::new(data_dir))
}
