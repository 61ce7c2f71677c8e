//! Property-based tests for the rating and progression calculators

use super::*;
use crate::config::ProgressionRates;
use crate::models::{
    AttributeSet, InternationalReputation, PositionKey, ReputationInput, CANONICAL_NON_WEIGHTED,
    STAT_COLUMNS,
};
use proptest::prelude::*;

fn position_strategy() -> impl Strategy<Value = PositionKey> {
    proptest::sample::select(PositionKey::ALL.to_vec())
}

fn attribute_set_strategy() -> impl Strategy<Value = AttributeSet> {
    proptest::collection::vec(proptest::option::of(-20.0f64..130.0), STAT_COLUMNS.len()).prop_map(
        |values| {
            STAT_COLUMNS
                .iter()
                .zip(values)
                .filter_map(|(name, value)| value.map(|v| (*name, v)))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn prop_overall_always_in_range(
        position in position_strategy(),
        stats in attribute_set_strategy(),
        stars in -3.0f64..9.0
    ) {
        let overall = compute_overall_from_stats(
            position.code(),
            &stats,
            Some(&ReputationInput::Number(stars)),
        );
        prop_assert!((1..=99).contains(&overall));
    }

    #[test]
    fn prop_boost_monotonic_in_ovr_and_reputation(base in 1u8..=98, stars in 1u8..=5) {
        let reputation = InternationalReputation::from(stars);
        let boost = OverallCalculator::reputation_boost(base, reputation);
        prop_assert!(boost <= 3);
        prop_assert!(OverallCalculator::reputation_boost(base + 1, reputation) >= boost);
        if stars < 5 {
            let higher = InternationalReputation::from(stars + 1);
            prop_assert!(OverallCalculator::reputation_boost(base, higher) >= boost);
        }
    }

    #[test]
    fn prop_average_ignored_below_eight_games(
        rating in 1.0f64..99.0,
        games in 0u32..8,
        average in 0.0f64..10.0
    ) {
        prop_assert_eq!(get_avg_upgrade(rating, average, games), 0);
    }

    #[test]
    fn prop_youngster_upgrade_is_max(
        rating in 1.0f64..99.0,
        games in 0u32..60,
        average in 0.0f64..10.0
    ) {
        let games_upgrade = get_games_upgrade(rating, games);
        let avg_upgrade = get_avg_upgrade(rating, average, games);
        let upgrade = get_youngster_upgrade(rating, games, average);
        prop_assert_eq!(upgrade, games_upgrade.max(avg_upgrade));
        prop_assert!((-4..=4).contains(&upgrade));
    }

    #[test]
    fn prop_wage_never_zero(rating in -50.0f64..150.0, position in position_strategy()) {
        prop_assert!(calculate_wage(rating, position.code()) >= 240_000);
    }

    #[test]
    fn prop_progression_stays_in_range(
        position in position_strategy(),
        stats in attribute_set_strategy(),
        base_ovr in 1i32..=99,
        new_ovr in 1i32..=99
    ) {
        let input = ProgressionInput {
            base_ovr,
            new_ovr,
            positions: position.code().to_string(),
            current_attributes: stats,
            ind_training_attrs: vec!["finishing".to_string(), "gk_reflexes".to_string()],
            non_weighted_attrs: CANONICAL_NON_WEIGHTED.iter().map(|s| s.to_string()).collect(),
            potential: None,
        };
        let updates = compute_youngster_attributes(&input);

        let weights = PositionWeights::for_position(position);
        for name in weights.weighted_attributes() {
            prop_assert!(updates.contains_key(name), "missing weighted {}", name);
        }
        for value in updates.values() {
            prop_assert!((1..=99).contains(value));
        }
    }

    #[test]
    fn prop_progression_direction_follows_delta(
        position in position_strategy(),
        start in 1u8..=99,
        delta in -10i32..=10
    ) {
        let stats: AttributeSet = STAT_COLUMNS.iter().map(|name| (*name, f64::from(start))).collect();
        let input = ProgressionInput {
            base_ovr: 60,
            new_ovr: 60 + delta,
            positions: position.code().to_string(),
            current_attributes: stats,
            ind_training_attrs: vec![],
            non_weighted_attrs: vec![],
            potential: None,
        };
        let outcome = AttributeProgression::compute(&input, &ProgressionRates::default(), false);
        for value in outcome.updates.values() {
            match delta.signum() {
                1 => prop_assert!(*value >= start),
                -1 => prop_assert!(*value <= start),
                _ => prop_assert_eq!(*value, start),
            }
        }
    }
}
