//! Banking Use Cases
//!
//! Surplus can be banked against a compliance record and later applied.
//! Every operation appends to the ledger; nothing is ever rewritten.

mod result;
mod use_case;

pub use result::{LedgerLine, LedgerView};
pub use use_case::BankingUseCase;

#[cfg(test)]
mod tests;
