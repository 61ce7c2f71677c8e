//! Player rating and progression system
//!
//! This module contains the league's player calculators:
//! - Position weight tables and the overall rating (OVR)
//! - International reputation boost
//! - Wage lookup by rating and role
//! - End-of-season upgrade tables and youngster attribute progression

pub mod position_weights;
pub mod profile;
pub mod progression;
pub mod rating;
pub mod season;
pub mod upgrade;
pub mod wage;

pub use position_weights::{weights_for, PositionWeights};
pub use profile::{PlayerProfile, PlayerRole};
pub use progression::{
    compute_youngster_attributes, AttributeProgression, ProgressionInput, ProgressionOutcome,
};
pub use rating::{
    compute_overall_from_stats, get_international_reputation_boost, OverallCalculator,
    RatingBreakdown,
};
pub use season::{SeasonInput, SeasonProgression, YoungsterSeasonOutcome};
pub use upgrade::{
    get_avg_upgrade, get_games_upgrade, get_youngster_upgrade, OvrBand, UpgradeCalculator,
    UpgradeDecision, MIN_GAMES_FOR_AVERAGE,
};
pub use wage::{calculate_wage, WageCalculator, WageRole, WageRow};

#[cfg(test)]
mod proptests;
