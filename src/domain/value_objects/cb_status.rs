//! Compliance status derived from the sign of a balance

use serde::{Deserialize, Serialize};

/// Sign classification of a compliance balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CbStatus {
    /// CB > 0
    Surplus,
    /// CB < 0
    Deficit,
    /// CB == 0
    Neutral,
}

impl CbStatus {
    /// Classify a balance. NaN is reported as neutral.
    pub fn of(cb_gco2eq: f64) -> Self {
        if cb_gco2eq > 0.0 {
            CbStatus::Surplus
        } else if cb_gco2eq < 0.0 {
            CbStatus::Deficit
        } else {
            CbStatus::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CbStatus::Surplus => "surplus",
            CbStatus::Deficit => "deficit",
            CbStatus::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for CbStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
