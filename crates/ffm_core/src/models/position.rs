use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field position codes used by league player records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionKey {
    GK,
    LB,
    RB,
    CB,
    LWB,
    RWB,
    CDM,
    LM,
    RM,
    CM,
    CAM,
    LW,
    RW,
    CF,
    ST,
}

impl PositionKey {
    pub const ALL: [PositionKey; 15] = [
        PositionKey::GK,
        PositionKey::LB,
        PositionKey::RB,
        PositionKey::CB,
        PositionKey::LWB,
        PositionKey::RWB,
        PositionKey::CDM,
        PositionKey::LM,
        PositionKey::RM,
        PositionKey::CM,
        PositionKey::CAM,
        PositionKey::LW,
        PositionKey::RW,
        PositionKey::CF,
        PositionKey::ST,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PositionKey::GK => "GK",
            PositionKey::LB => "LB",
            PositionKey::RB => "RB",
            PositionKey::CB => "CB",
            PositionKey::LWB => "LWB",
            PositionKey::RWB => "RWB",
            PositionKey::CDM => "CDM",
            PositionKey::LM => "LM",
            PositionKey::RM => "RM",
            PositionKey::CM => "CM",
            PositionKey::CAM => "CAM",
            PositionKey::LW => "LW",
            PositionKey::RW => "RW",
            PositionKey::CF => "CF",
            PositionKey::ST => "ST",
        }
    }

    /// Primary position of a raw `positions` column ("CB,CDM", "ST/CF").
    ///
    /// Only the first non-empty token counts. Anything unrecognised,
    /// including an empty string, resolves to CM.
    pub fn resolve_primary(raw: &str) -> PositionKey {
        first_position_token(raw)
            .and_then(|token| token.parse().ok())
            .unwrap_or(PositionKey::CM)
    }

    /// Defensive set used by the wage table.
    pub fn is_defensive_wage_table(&self) -> bool {
        matches!(
            self,
            PositionKey::GK | PositionKey::CDM | PositionKey::CB | PositionKey::RB | PositionKey::LB
        )
    }

    /// Defensive set used by the player profile / value fallback.
    /// Unlike the wage table set, wing-backs count as defensive here.
    pub fn is_defensive_value_fallback(&self) -> bool {
        matches!(
            self,
            PositionKey::GK
                | PositionKey::CB
                | PositionKey::LB
                | PositionKey::RB
                | PositionKey::LWB
                | PositionKey::RWB
                | PositionKey::CDM
        )
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PositionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GK" => Ok(PositionKey::GK),
            "LB" => Ok(PositionKey::LB),
            "RB" => Ok(PositionKey::RB),
            "CB" => Ok(PositionKey::CB),
            "LWB" => Ok(PositionKey::LWB),
            "RWB" => Ok(PositionKey::RWB),
            "CDM" => Ok(PositionKey::CDM),
            "LM" => Ok(PositionKey::LM),
            "RM" => Ok(PositionKey::RM),
            "CM" => Ok(PositionKey::CM),
            "CAM" => Ok(PositionKey::CAM),
            "LW" => Ok(PositionKey::LW),
            "RW" => Ok(PositionKey::RW),
            "CF" => Ok(PositionKey::CF),
            "ST" => Ok(PositionKey::ST),
            _ => Err(format!("Invalid position: {}", s)),
        }
    }
}

/// First non-empty token of a comma/slash separated positions string, trimmed.
pub fn first_position_token(raw: &str) -> Option<&str> {
    raw.split([',', '/']).map(str::trim).find(|token| !token.is_empty())
}

pub fn resolve_primary_position(raw: &str) -> PositionKey {
    PositionKey::resolve_primary(raw)
}
