//! BankEntry entity - one line of the banking ledger
//!
//! Entries are append-only. Deposits are positive, withdrawals are
//! recorded as new negative entries so the full history stays auditable.

#[derive(Debug, Clone, PartialEq)]
pub struct BankEntry {
    pub id: String,
    pub ship_id: String,
    /// Year the surplus was earned (processing year for withdrawals)
    pub year: i32,
    /// Signed amount in gCO2eq
    pub amount_gco2eq: f64,
}

impl BankEntry {
    /// A positive deposit of surplus earned in `year`
    pub fn deposit(id: impl Into<String>, ship_id: impl Into<String>, year: i32, amount: f64) -> Self {
        Self {
            id: id.into(),
            ship_id: ship_id.into(),
            year,
            amount_gco2eq: amount.abs(),
        }
    }

    /// A negative balancing entry for surplus applied in `year`
    pub fn withdrawal(
        id: impl Into<String>,
        ship_id: impl Into<String>,
        year: i32,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            ship_id: ship_id.into(),
            year,
            amount_gco2eq: -amount.abs(),
        }
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount_gco2eq < 0.0
    }
}

/// Sum of all entry amounts
pub(crate) fn total_of<'a>(entries: impl IntoIterator<Item = &'a BankEntry>) -> f64 {
    entries.into_iter().map(|e| e.amount_gco2eq).sum()
}
