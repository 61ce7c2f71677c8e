//! Youngster attribute progression
//!
//! Spreads a season's OVR change over individual attributes:
//! - weighted attributes of the primary position move by `delta × 1.6`
//!   (`delta × 2.0` when they are an individual training focus)
//! - the non-weighted attributes move by `delta × 1.0`
//! - everything else is left untouched
//! Every new value is rounded half up and clamped to 1..=99.

use crate::config::ProgressionRates;
use crate::models::{clamp_rating, resolve_primary_position, round_half_up, AttributeSet, MAX_RATING};
use crate::player::position_weights::PositionWeights;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub const MIN_POTENTIAL: i32 = 40;
pub const MAX_POTENTIAL: i32 = MAX_RATING;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProgressionInput {
    pub base_ovr: i32,
    pub new_ovr: i32,
    pub positions: String,
    pub current_attributes: AttributeSet,
    #[serde(default)]
    pub ind_training_attrs: Vec<String>,
    #[serde(default)]
    pub non_weighted_attrs: Vec<String>,
    #[serde(default)]
    pub potential: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProgressionOutcome {
    /// OVR change actually spread over the attributes
    pub ovr_delta: i32,
    pub effective_potential: i32,
    /// `min(new_ovr, potential)`
    pub capped_ovr: i32,
    pub potential_cap_applied: bool,
    pub updates: BTreeMap<String, u8>,
}

/// Attribute redistribution engine
pub struct AttributeProgression;

impl AttributeProgression {
    pub fn effective_potential(potential: Option<i32>) -> i32 {
        potential.map_or(MAX_POTENTIAL, |p| p.clamp(MIN_POTENTIAL, MAX_POTENTIAL))
    }

    /// Redistribute `new_ovr - base_ovr` over the attributes.
    ///
    /// With `apply_potential_cap` the target OVR is held at the potential,
    /// though never below the current base OVR.
    pub fn compute(
        input: &ProgressionInput,
        rates: &ProgressionRates,
        apply_potential_cap: bool,
    ) -> ProgressionOutcome {
        let effective_potential = Self::effective_potential(input.potential);
        let capped_ovr = input.new_ovr.min(effective_potential);

        let ovr_delta = if apply_potential_cap {
            input.new_ovr.min(effective_potential.max(input.base_ovr)) - input.base_ovr
        } else {
            input.new_ovr - input.base_ovr
        };

        let position = resolve_primary_position(&input.positions);
        let weights = PositionWeights::for_position(position);

        let mut updates = BTreeMap::new();

        for attribute in weights.weighted_attributes() {
            let rate = if input.ind_training_attrs.iter().any(|a| a == attribute) {
                rates.training_focus_rate
            } else {
                rates.weighted_rate
            };
            let value = progressed_value(&input.current_attributes, attribute, ovr_delta, rate);
            updates.insert(attribute.to_string(), value);
        }

        for attribute in &input.non_weighted_attrs {
            if updates.contains_key(attribute) {
                continue;
            }
            let value =
                progressed_value(&input.current_attributes, attribute, ovr_delta, rates.non_weighted_rate);
            updates.insert(attribute.clone(), value);
        }

        debug!(
            %position,
            ovr_delta,
            capped_ovr,
            updated = updates.len(),
            "distributed youngster progression"
        );

        ProgressionOutcome {
            ovr_delta,
            effective_potential,
            capped_ovr,
            potential_cap_applied: apply_potential_cap,
            updates,
        }
    }
}

fn progressed_value(current: &AttributeSet, attribute: &str, ovr_delta: i32, rate: f64) -> u8 {
    let value = round_half_up(current.value_or_default(attribute) + f64::from(ovr_delta) * rate);
    clamp_rating(value as i64)
}

/// Attribute updates with the default rates and no potential cap
pub fn compute_youngster_attributes(input: &ProgressionInput) -> BTreeMap<String, u8> {
    AttributeProgression::compute(input, &ProgressionRates::default(), false).updates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CANONICAL_NON_WEIGHTED;

    fn striker_input(base_ovr: i32, new_ovr: i32) -> ProgressionInput {
        let current_attributes: AttributeSet = [
            ("finishing", 70.0),
            ("positioning", 66.0),
            ("ball_control", 64.0),
            ("heading_accuracy", 60.0),
            ("shot_power", 68.0),
            ("reactions", 62.0),
            ("dribbling", 65.0),
            ("sprint_speed", 75.0),
            ("strength", 63.0),
            ("short_passing", 58.0),
            ("acceleration", 77.0),
            ("long_shots", 55.0),
            ("volleys", 52.0),
            ("stamina", 70.0),
            ("agility", 72.0),
            ("balance", 69.0),
            ("jumping", 61.0),
            ("aggression", 45.0),
            ("vision", 54.0),
            ("gk_diving", 9.0),
        ]
        .into_iter()
        .collect();

        ProgressionInput {
            base_ovr,
            new_ovr,
            positions: "ST,CF".to_string(),
            current_attributes,
            ind_training_attrs: vec!["finishing".to_string()],
            non_weighted_attrs: CANONICAL_NON_WEIGHTED.iter().map(|s| s.to_string()).collect(),
            potential: None,
        }
    }

    #[test]
    fn test_positive_progression() {
        let updates = compute_youngster_attributes(&striker_input(68, 71));

        // Training focus: 70 + 3 × 2.0
        assert_eq!(updates["finishing"], 76);
        // Weighted: 66 + 3 × 1.6 = 70.8
        assert_eq!(updates["positioning"], 71);
        // Weighted: 52 + 4.8 = 56.8
        assert_eq!(updates["volleys"], 57);
        // Non-weighted: 70 + 3
        assert_eq!(updates["stamina"], 73);
        assert_eq!(updates["vision"], 57);
        // Untouched attributes are not reported
        assert!(!updates.contains_key("gk_diving"));
        assert!(!updates.contains_key("curve"));
        assert_eq!(updates.len(), 13 + 6);
    }

    #[test]
    fn test_negative_progression() {
        let updates = compute_youngster_attributes(&striker_input(70, 68));

        // 70 - 2 × 2.0
        assert_eq!(updates["finishing"], 66);
        // 66 - 3.2 = 62.8
        assert_eq!(updates["positioning"], 63);
        // 45 - 2
        assert_eq!(updates["aggression"], 43);
    }

    #[test]
    fn test_zero_delta_leaves_attributes_unchanged() {
        let input = striker_input(70, 70);
        let updates = compute_youngster_attributes(&input);
        for (name, value) in &updates {
            assert_eq!(
                f64::from(*value),
                input.current_attributes.get(name).unwrap(),
                "{} changed with zero delta",
                name
            );
        }
    }

    #[test]
    fn test_boundaries_clamp() {
        let mut input = striker_input(60, 70);
        input.current_attributes.insert("finishing", 99.0);
        input.current_attributes.insert("stamina", 98.0);
        let updates = compute_youngster_attributes(&input);
        assert_eq!(updates["finishing"], 99);
        assert_eq!(updates["stamina"], 99);

        let mut input = striker_input(70, 60);
        input.current_attributes.insert("finishing", 1.0);
        input.current_attributes.insert("aggression", 5.0);
        let updates = compute_youngster_attributes(&input);
        assert_eq!(updates["finishing"], 1);
        assert_eq!(updates["aggression"], 1);
    }

    #[test]
    fn test_missing_attributes_start_from_fifty() {
        let input = ProgressionInput {
            base_ovr: 60,
            new_ovr: 62,
            positions: "GK".to_string(),
            current_attributes: AttributeSet::new(),
            ind_training_attrs: vec![],
            non_weighted_attrs: vec!["jumping".to_string()],
            potential: None,
        };
        let updates = compute_youngster_attributes(&input);

        // 50 + 2 × 1.6 = 53.2
        assert_eq!(updates["gk_reflexes"], 53);
        assert_eq!(updates["jumping"], 52);
        assert_eq!(updates.len(), 7);
    }

    #[test]
    fn test_weighted_rate_wins_over_non_weighted() {
        // Stamina is weighted for full-backs, so it moves at 1.6 even though it is listed as non-weighted
        let mut input = striker_input(60, 65);
        input.positions = "LB".to_string();
        input.ind_training_attrs.clear();
        let updates = compute_youngster_attributes(&input);
        assert_eq!(updates["stamina"], 78);
        assert_eq!(updates["jumping"], 66);
    }

    #[test]
    fn test_potential_cap_reported_but_not_applied_by_default() {
        let mut input = striker_input(68, 74);
        input.potential = Some(70);

        let outcome = AttributeProgression::compute(&input, &ProgressionRates::default(), false);
        assert_eq!(outcome.effective_potential, 70);
        assert_eq!(outcome.capped_ovr, 70);
        assert_eq!(outcome.ovr_delta, 6);
        assert!(!outcome.potential_cap_applied);
        assert_eq!(outcome.updates["stamina"], 76);
    }

    #[test]
    fn test_potential_cap_applied_when_enabled() {
        let mut input = striker_input(68, 74);
        input.potential = Some(70);

        let outcome = AttributeProgression::compute(&input, &ProgressionRates::default(), true);
        assert_eq!(outcome.ovr_delta, 2);
        assert_eq!(outcome.updates["stamina"], 72);

        // A potential below the current OVR never forces a decline
        input.potential = Some(60);
        let outcome = AttributeProgression::compute(&input, &ProgressionRates::default(), true);
        assert_eq!(outcome.capped_ovr, 60);
        assert_eq!(outcome.ovr_delta, 0);
    }

    #[test]
    fn test_effective_potential() {
        assert_eq!(AttributeProgression::effective_potential(None), 99);
        assert_eq!(AttributeProgression::effective_potential(Some(85)), 85);
        assert_eq!(AttributeProgression::effective_potential(Some(12)), 40);
        assert_eq!(AttributeProgression::effective_potential(Some(140)), 99);
    }
}
