//! Fuel type value object - what a route burns

use serde::{Deserialize, Serialize};

/// Fuel used on a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FuelType {
    /// Heavy fuel oil
    Hfo,
    /// Liquefied natural gas
    Lng,
    /// Marine gas oil
    Mgo,
    /// Very low sulphur fuel oil
    Vlsfo,
    /// Methanol
    #[serde(rename = "Methanol", alias = "METHANOL")]
    Methanol,
}

impl FuelType {
    pub const ALL: [FuelType; 5] = [
        FuelType::Hfo,
        FuelType::Lng,
        FuelType::Mgo,
        FuelType::Vlsfo,
        FuelType::Methanol,
    ];

    /// Name as stored in data files
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Hfo => "HFO",
            FuelType::Lng => "LNG",
            FuelType::Mgo => "MGO",
            FuelType::Vlsfo => "VLSFO",
            FuelType::Methanol => "Methanol",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
