//! Position-specific attribute weights for overall rating calculation
//!
//! Every position carries its own list of weighted attributes. The weights of
//! one position add up to 1.0, so the weighted sum of an attribute set stays
//! on the same 1..=99 scale as the attributes themselves.
//! - GK: goalkeeping attributes plus reactions
//! - Defenders: tackling, marking and interceptions dominate
//! - Midfielders: passing and ball control dominate
//! - Forwards: finishing, positioning and dribbling dominate

use crate::models::{AttributeSet, PositionKey};
use serde::Serialize;

type WeightTable = &'static [(&'static str, f64)];

const GK_WEIGHTS: WeightTable = &[
    ("gk_diving", 0.21),
    ("gk_handling", 0.21),
    ("gk_positioning", 0.21),
    ("gk_reflexes", 0.21),
    ("reactions", 0.11),
    ("gk_kicking", 0.05),
];

const CB_WEIGHTS: WeightTable = &[
    ("standing_tackle", 0.17),
    ("marking", 0.14),
    ("sliding_tackle", 0.14),
    ("interceptions", 0.13),
    ("heading_accuracy", 0.10),
    ("strength", 0.10),
    ("reactions", 0.05),
    ("short_passing", 0.05),
    ("aggression", 0.05),
    ("ball_control", 0.04),
    ("jumping", 0.03),
];

const FULLBACK_WEIGHTS: WeightTable = &[
    ("sliding_tackle", 0.14),
    ("interceptions", 0.12),
    ("standing_tackle", 0.11),
    ("crossing", 0.09),
    ("marking", 0.08),
    ("stamina", 0.08),
    ("ball_control", 0.08),
    ("reactions", 0.08),
    ("sprint_speed", 0.07),
    ("short_passing", 0.07),
    ("acceleration", 0.05),
    ("heading_accuracy", 0.03),
];

const WINGBACK_WEIGHTS: WeightTable = &[
    ("crossing", 0.12),
    ("interceptions", 0.12),
    ("sliding_tackle", 0.11),
    ("short_passing", 0.10),
    ("stamina", 0.10),
    ("ball_control", 0.08),
    ("reactions", 0.08),
    ("standing_tackle", 0.08),
    ("marking", 0.07),
    ("sprint_speed", 0.06),
    ("dribbling", 0.04),
    ("acceleration", 0.04),
];

const CDM_WEIGHTS: WeightTable = &[
    ("interceptions", 0.14),
    ("short_passing", 0.14),
    ("standing_tackle", 0.12),
    ("marking", 0.10),
    ("long_passing", 0.10),
    ("ball_control", 0.10),
    ("strength", 0.10),
    ("reactions", 0.07),
    ("stamina", 0.06),
    ("aggression", 0.05),
    ("sliding_tackle", 0.02),
];

const CM_WEIGHTS: WeightTable = &[
    ("short_passing", 0.17),
    ("ball_control", 0.14),
    ("long_passing", 0.13),
    ("vision", 0.13),
    ("reactions", 0.08),
    ("dribbling", 0.07),
    ("positioning", 0.06),
    ("stamina", 0.06),
    ("interceptions", 0.05),
    ("standing_tackle", 0.05),
    ("long_shots", 0.04),
    ("shot_power", 0.02),
];

const WIDE_MIDFIELD_WEIGHTS: WeightTable = &[
    ("dribbling", 0.15),
    ("ball_control", 0.13),
    ("short_passing", 0.11),
    ("crossing", 0.10),
    ("positioning", 0.08),
    ("acceleration", 0.07),
    ("reactions", 0.07),
    ("vision", 0.07),
    ("sprint_speed", 0.06),
    ("finishing", 0.06),
    ("stamina", 0.05),
    ("long_shots", 0.05),
];

const CAM_WEIGHTS: WeightTable = &[
    ("short_passing", 0.16),
    ("ball_control", 0.15),
    ("vision", 0.14),
    ("dribbling", 0.13),
    ("positioning", 0.09),
    ("reactions", 0.07),
    ("finishing", 0.07),
    ("long_shots", 0.05),
    ("acceleration", 0.04),
    ("long_passing", 0.04),
    ("agility", 0.03),
    ("shot_power", 0.03),
];

const WINGER_WEIGHTS: WeightTable = &[
    ("dribbling", 0.16),
    ("ball_control", 0.14),
    ("finishing", 0.10),
    ("crossing", 0.09),
    ("short_passing", 0.09),
    ("positioning", 0.09),
    ("acceleration", 0.07),
    ("reactions", 0.07),
    ("sprint_speed", 0.06),
    ("vision", 0.06),
    ("long_shots", 0.04),
    ("agility", 0.03),
];

const CF_WEIGHTS: WeightTable = &[
    ("ball_control", 0.15),
    ("dribbling", 0.14),
    ("positioning", 0.13),
    ("finishing", 0.11),
    ("reactions", 0.09),
    ("short_passing", 0.09),
    ("vision", 0.08),
    ("shot_power", 0.05),
    ("acceleration", 0.05),
    ("sprint_speed", 0.05),
    ("long_shots", 0.04),
    ("heading_accuracy", 0.02),
];

const ST_WEIGHTS: WeightTable = &[
    ("finishing", 0.18),
    ("positioning", 0.13),
    ("ball_control", 0.10),
    ("heading_accuracy", 0.10),
    ("shot_power", 0.10),
    ("reactions", 0.08),
    ("dribbling", 0.07),
    ("sprint_speed", 0.05),
    ("strength", 0.05),
    ("short_passing", 0.05),
    ("acceleration", 0.04),
    ("long_shots", 0.03),
    ("volleys", 0.02),
];

/// Weighted attributes of one position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionWeights {
    pub position: PositionKey,
    entries: WeightTable,
}

impl PositionWeights {
    /// Get the weight table for a position
    pub fn for_position(position: PositionKey) -> Self {
        let entries = match position {
            PositionKey::GK => GK_WEIGHTS,
            PositionKey::CB => CB_WEIGHTS,
            PositionKey::LB | PositionKey::RB => FULLBACK_WEIGHTS,
            PositionKey::LWB | PositionKey::RWB => WINGBACK_WEIGHTS,
            PositionKey::CDM => CDM_WEIGHTS,
            PositionKey::CM => CM_WEIGHTS,
            PositionKey::LM | PositionKey::RM => WIDE_MIDFIELD_WEIGHTS,
            PositionKey::CAM => CAM_WEIGHTS,
            PositionKey::LW | PositionKey::RW => WINGER_WEIGHTS,
            PositionKey::CF => CF_WEIGHTS,
            PositionKey::ST => ST_WEIGHTS,
        };
        Self { position, entries }
    }

    /// Lookup by raw position code; codes outside the table use CM weights.
    pub fn for_code(code: &str) -> Self {
        Self::for_position(code.parse().unwrap_or(PositionKey::CM))
    }

    pub fn entries(&self) -> &'static [(&'static str, f64)] {
        self.entries
    }

    /// Names of the weighted attributes, in table order
    pub fn weighted_attributes(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn is_weighted(&self, attribute: &str) -> bool {
        self.entries.iter().any(|(name, _)| *name == attribute)
    }

    pub fn weight_of(&self, attribute: &str) -> Option<f64> {
        self.entries.iter().find(|(name, _)| *name == attribute).map(|(_, w)| *w)
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Weighted sum of the attribute set; missing attributes count as 50.
    pub fn weighted_sum(&self, stats: &AttributeSet) -> f64 {
        self.entries.iter().map(|(name, weight)| weight * stats.value_or_default(name)).sum()
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position == PositionKey::GK
    }
}

pub fn weights_for(position: PositionKey) -> PositionWeights {
    PositionWeights::for_position(position)
}
