//! Vessel type value object - ship classification in FuelEU scope

use serde::{Deserialize, Serialize};

/// Type of vessel operating a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VesselType {
    /// Container ship
    Container,
    /// Dry bulk carrier
    BulkCarrier,
    /// Liquid cargo tanker
    Tanker,
    /// Roll-on/roll-off
    RoRo,
}

impl VesselType {
    pub const ALL: [VesselType; 4] = [
        VesselType::Container,
        VesselType::BulkCarrier,
        VesselType::Tanker,
        VesselType::RoRo,
    ];

    /// Name as stored in data files
    pub fn as_str(&self) -> &'static str {
        match self {
            VesselType::Container => "Container",
            VesselType::BulkCarrier => "BulkCarrier",
            VesselType::Tanker => "Tanker",
            VesselType::RoRo => "RoRo",
        }
    }
}

impl std::fmt::Display for VesselType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vessel_type_display_matches_serialized_name() {
        for vessel in VesselType::ALL {
            let json = serde_json::to_string(&vessel).unwrap();
            assert_eq!(json, format!("\"{}\"", vessel));
        }
    }
}
