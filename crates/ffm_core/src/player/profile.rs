//! Player profile: overall, band, wage and role in one view

use crate::models::{resolve_primary_position, AttributeSet, PositionKey, ReputationInput};
use crate::player::progression::AttributeProgression;
use crate::player::rating::{OverallCalculator, RatingBreakdown};
use crate::player::upgrade::OvrBand;
use crate::player::wage::{WageCalculator, WageRole};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Broad role of the primary position.
///
/// Wing-backs are defensive here even though the wage table pays them as
/// attackers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlayerRole {
    Defensive,
    Attacking,
}

impl PlayerRole {
    pub fn for_position(position: PositionKey) -> Self {
        if position.is_defensive_value_fallback() {
            PlayerRole::Defensive
        } else {
            PlayerRole::Attacking
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerProfile {
    pub primary_position: PositionKey,
    pub rating: RatingBreakdown,
    pub overall: u8,
    pub band: OvrBand,
    pub wage: u64,
    pub wage_role: WageRole,
    pub role: PlayerRole,
    pub potential: i32,
    /// Points between overall and potential, never negative
    pub headroom: i32,
}

impl PlayerProfile {
    pub fn build(
        positions: &str,
        stats: &AttributeSet,
        ir: Option<&ReputationInput>,
        potential: Option<i32>,
    ) -> Self {
        let primary_position = resolve_primary_position(positions);
        let rating = OverallCalculator::breakdown(positions, stats, ir);
        let overall = rating.overall;
        let potential = AttributeProgression::effective_potential(potential);

        Self {
            primary_position,
            overall,
            band: OvrBand::from_rating(f64::from(overall)),
            wage: WageCalculator::calculate(f64::from(overall), positions),
            wage_role: WageCalculator::role_for(positions),
            role: PlayerRole::for_position(primary_position),
            potential,
            headroom: (potential - i32::from(overall)).max(0),
            rating,
        }
    }

    pub fn is_defensive(&self) -> bool {
        self.role == PlayerRole::Defensive
    }
}
