//! End-of-season youngster progression
//!
//! Combines the upgrade tables with the attribute distributor:
//! upgrade decision -> new OVR -> attribute updates -> recomputed overall.

use crate::config::EngineConfig;
use crate::models::{clamp_rating, AttributeSet, ReputationInput};
use crate::player::progression::{AttributeProgression, ProgressionInput, ProgressionOutcome};
use crate::player::rating::OverallCalculator;
use crate::player::upgrade::{UpgradeCalculator, UpgradeDecision};
use rayon::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Batches above this size are processed on the rayon pool
pub const PARALLEL_BATCH_THRESHOLD: usize = 50;

/// One youngster's season as stored at season end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SeasonInput {
    #[serde(default)]
    pub player_id: Option<String>,
    pub base_ovr: i32,
    pub positions: String,
    pub games_played: u32,
    pub adjusted_average: f64,
    pub current_attributes: AttributeSet,
    #[serde(default)]
    pub ind_training_attrs: Vec<String>,
    /// Overrides the configured non-weighted attribute list
    #[serde(default)]
    pub non_weighted_attrs: Option<Vec<String>>,
    #[serde(default)]
    pub potential: Option<i32>,
    #[serde(default)]
    pub international_reputation: Option<ReputationInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct YoungsterSeasonOutcome {
    pub player_id: Option<String>,
    pub decision: UpgradeDecision,
    pub base_ovr: i32,
    pub new_ovr: i32,
    pub progression: ProgressionOutcome,
    /// Current attributes with the updates applied
    pub attributes: AttributeSet,
    /// Overall recomputed from `attributes`; informational only
    pub recomputed_overall: u8,
}

pub struct SeasonProgression;

impl SeasonProgression {
    pub fn apply(input: &SeasonInput, config: &EngineConfig) -> YoungsterSeasonOutcome {
        let rating = f64::from(input.base_ovr);
        let decision = UpgradeCalculator::decide(
            rating,
            input.games_played,
            input.adjusted_average,
            config.min_games_for_average,
        );
        let new_ovr =
            i32::from(clamp_rating(i64::from(input.base_ovr) + i64::from(decision.upgrade)));

        let progression_input = ProgressionInput {
            base_ovr: input.base_ovr,
            new_ovr,
            positions: input.positions.clone(),
            current_attributes: input.current_attributes.clone(),
            ind_training_attrs: input.ind_training_attrs.clone(),
            non_weighted_attrs: input
                .non_weighted_attrs
                .clone()
                .unwrap_or_else(|| config.non_weighted_attributes.clone()),
            potential: input.potential,
        };
        let progression = AttributeProgression::compute(
            &progression_input,
            &config.progression,
            config.apply_potential_cap,
        );

        let attributes = input.current_attributes.merged_with(&progression.updates);
        let recomputed_overall = OverallCalculator::calculate(
            &input.positions,
            &attributes,
            input.international_reputation.as_ref(),
        );

        debug!(
            player_id = input.player_id.as_deref().unwrap_or("-"),
            base_ovr = input.base_ovr,
            upgrade = decision.upgrade,
            new_ovr,
            recomputed_overall,
            "applied youngster season"
        );

        YoungsterSeasonOutcome {
            player_id: input.player_id.clone(),
            decision,
            base_ovr: input.base_ovr,
            new_ovr,
            progression,
            attributes,
            recomputed_overall,
        }
    }

    /// Apply a whole squad; output order matches input order.
    pub fn apply_batch(inputs: &[SeasonInput], config: &EngineConfig) -> Vec<YoungsterSeasonOutcome> {
        let outcomes: Vec<YoungsterSeasonOutcome> = if inputs.len() > PARALLEL_BATCH_THRESHOLD {
            inputs.par_iter().map(|input| Self::apply(input, config)).collect()
        } else {
            inputs.iter().map(|input| Self::apply(input, config)).collect()
        };

        info!(players = outcomes.len(), "youngster season batch complete");
        outcomes
    }
}
