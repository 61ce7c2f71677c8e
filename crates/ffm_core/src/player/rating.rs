//! Overall rating (OVR) calculation
//!
//! - Formula: base = round(clamp(Σ weight × attribute, 1, 99))
//! - Missing or non-finite attributes count as 50
//! - International reputation adds a banded boost on top of the base
//! - Final OVR is clamped to 1..=99

use crate::models::{
    clamp_rating, resolve_primary_position, round_half_up, AttributeSet, InternationalReputation,
    PositionKey, ReputationInput, MAX_RATING, MIN_RATING,
};
use crate::player::position_weights::PositionWeights;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Every intermediate value of one overall rating calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RatingBreakdown {
    pub position: PositionKey,
    pub weighted_sum: f64,
    pub base_ovr: u8,
    pub international_reputation: InternationalReputation,
    pub boost: u8,
    pub overall: u8,
}

/// Overall rating engine
pub struct OverallCalculator;

impl OverallCalculator {
    /// Calculate the overall rating from a raw positions string and attribute set
    pub fn calculate(positions: &str, stats: &AttributeSet, ir: Option<&ReputationInput>) -> u8 {
        Self::breakdown(positions, stats, ir).overall
    }

    pub fn breakdown(
        positions: &str,
        stats: &AttributeSet,
        ir: Option<&ReputationInput>,
    ) -> RatingBreakdown {
        let position = resolve_primary_position(positions);
        let weights = PositionWeights::for_position(position);

        let weighted_sum = weights.weighted_sum(stats);
        let base_ovr = Self::base_ovr(weighted_sum);

        let reputation = InternationalReputation::parse(ir);
        let boost = Self::reputation_boost(base_ovr, reputation);
        let overall = clamp_rating(i64::from(base_ovr) + i64::from(boost));

        trace!(
            %position,
            weighted_sum,
            base_ovr,
            boost,
            overall,
            "computed overall rating"
        );

        RatingBreakdown {
            position,
            weighted_sum,
            base_ovr,
            international_reputation: reputation,
            boost,
            overall,
        }
    }

    /// Clamp the weighted sum into 1..=99, then round half up
    pub fn base_ovr(weighted_sum: f64) -> u8 {
        if !weighted_sum.is_finite() {
            return MIN_RATING as u8;
        }
        let clamped = weighted_sum.clamp(f64::from(MIN_RATING), f64::from(MAX_RATING));
        round_half_up(clamped) as u8
    }

    /// Banded OVR boost for international reputation.
    ///
    /// | IR | boost |
    /// |----|-------|
    /// | 1-2 | 0 |
    /// | 3 | 1 from OVR 51 |
    /// | 4 | 1 from OVR 36, 2 from 67 |
    /// | 5 | 1 from OVR 24, 2 from 50, 3 from 75 |
    pub fn reputation_boost(base_ovr: u8, reputation: InternationalReputation) -> u8 {
        let thresholds: &[u8] = match reputation.stars() {
            3 => &[51],
            4 => &[36, 67],
            5 => &[24, 50, 75],
            _ => &[],
        };
        thresholds.iter().filter(|&&threshold| base_ovr >= threshold).count() as u8
    }
}

pub fn compute_overall_from_stats(
    positions: &str,
    stats: &AttributeSet,
    international_reputation: Option<&ReputationInput>,
) -> u8 {
    OverallCalculator::calculate(positions, stats, international_reputation)
}

/// Boost for a base OVR and a raw (unparsed) reputation value
pub fn get_international_reputation_boost(base_ovr: u8, ir: Option<&ReputationInput>) -> u8 {
    OverallCalculator::reputation_boost(base_ovr, InternationalReputation::parse(ir))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ir(stars: f64) -> ReputationInput {
        ReputationInput::Number(stars)
    }

    fn striker_scenario() -> AttributeSet {
        [
            ("finishing", 90.0),
            ("positioning", 85.0),
            ("ball_control", 80.0),
            ("heading_accuracy", 70.0),
            ("shot_power", 88.0),
            ("reactions", 75.0),
            ("dribbling", 82.0),
            ("sprint_speed", 91.0),
            ("strength", 77.0),
            ("short_passing", 60.0),
            ("acceleration", 89.0),
            ("long_shots", 65.0),
            ("volleys", 55.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_reputation_boost_table() {
        assert_eq!(get_international_reputation_boost(80, Some(&ir(5.0))), 3);
        assert_eq!(get_international_reputation_boost(60, Some(&ir(5.0))), 2);
        assert_eq!(get_international_reputation_boost(30, Some(&ir(5.0))), 1);
        assert_eq!(get_international_reputation_boost(20, Some(&ir(5.0))), 0);
        assert_eq!(get_international_reputation_boost(70, Some(&ir(4.0))), 2);
        assert_eq!(get_international_reputation_boost(40, Some(&ir(4.0))), 1);
        assert_eq!(get_international_reputation_boost(50, Some(&ir(3.0))), 0);
        assert_eq!(get_international_reputation_boost(51, Some(&ir(3.0))), 1);
    }

    #[test]
    fn test_reputation_boost_thresholds() {
        let boost = |ovr: u8, stars: u8| OverallCalculator::reputation_boost(ovr, InternationalReputation::from(stars));

        assert_eq!(boost(66, 4), 1);
        assert_eq!(boost(67, 4), 2);
        assert_eq!(boost(35, 4), 0);
        assert_eq!(boost(36, 4), 1);
        assert_eq!(boost(74, 5), 2);
        assert_eq!(boost(75, 5), 3);
        assert_eq!(boost(49, 5), 1);
        assert_eq!(boost(50, 5), 2);
        assert_eq!(boost(23, 5), 0);
        assert_eq!(boost(24, 5), 1);
        assert_eq!(boost(99, 2), 0);
        assert_eq!(boost(99, 1), 0);
    }

    #[test]
    fn test_reputation_boost_defaults_to_one_star() {
        assert_eq!(get_international_reputation_boost(90, None), 0);
        let junk = ReputationInput::Text("world class".to_string());
        assert_eq!(get_international_reputation_boost(90, Some(&junk)), 0);
        // Out of range values clamp to 5 stars
        assert_eq!(get_international_reputation_boost(90, Some(&ir(12.0))), 3);
    }

    #[test]
    fn test_striker_scenario() {
        let stats = striker_scenario();
        let breakdown = OverallCalculator::breakdown("ST", &stats, Some(&ir(3.0)));

        // 16.2 + 11.05 + 8.0 + 7.0 + 8.8 + 6.0 + 5.74 + 4.55 + 3.85 + 3.0 + 3.56 + 1.95 + 1.1
        assert!((breakdown.weighted_sum - 80.8).abs() < 1e-9, "got {}", breakdown.weighted_sum);
        assert_eq!(breakdown.base_ovr, 81);
        assert_eq!(breakdown.boost, 1);
        assert_eq!(breakdown.overall, 82);
        assert_eq!(compute_overall_from_stats("ST,CF", &stats, Some(&ir(3.0))), 82);
    }

    #[test]
    fn test_missing_attributes_count_as_fifty() {
        let empty = AttributeSet::new();
        for position in PositionKey::ALL {
            assert_eq!(compute_overall_from_stats(position.code(), &empty, None), 50);
        }
        let mut nan_stats = AttributeSet::new();
        nan_stats.insert("finishing", f64::NAN);
        assert_eq!(compute_overall_from_stats("ST", &nan_stats, None), 50);
    }

    #[test]
    fn test_unknown_position_uses_cm_weights() {
        let stats = AttributeSet::new().with("short_passing", 90.0).with("vision", 90.0);
        let unknown = OverallCalculator::breakdown("SW", &stats, None);
        let cm = OverallCalculator::breakdown("CM", &stats, None);
        assert_eq!(unknown.position, PositionKey::CM);
        assert_eq!(unknown.overall, cm.overall);
    }

    #[test]
    fn test_overall_is_clamped() {
        let maxed: AttributeSet = crate::models::STAT_COLUMNS.iter().map(|name| (*name, 150.0)).collect();
        assert_eq!(compute_overall_from_stats("ST", &maxed, Some(&ir(5.0))), 99);

        let floor: AttributeSet = crate::models::STAT_COLUMNS.iter().map(|name| (*name, -40.0)).collect();
        assert_eq!(compute_overall_from_stats("GK", &floor, Some(&ir(5.0))), 1);
    }

    #[test]
    fn test_base_ovr_rounding() {
        assert_eq!(OverallCalculator::base_ovr(80.5), 81);
        assert_eq!(OverallCalculator::base_ovr(80.49), 80);
        assert_eq!(OverallCalculator::base_ovr(0.2), 1);
        assert_eq!(OverallCalculator::base_ovr(120.0), 99);
        assert_eq!(OverallCalculator::base_ovr(f64::NAN), 1);
    }
}
