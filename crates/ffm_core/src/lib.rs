//! # ffm_core - Fantasy League Player Rating & Progression Engine
//!
//! Deterministic calculators for a fantasy football league's player data,
//! with a JSON API for the league's backend and tooling.
//!
//! ## Features
//! - Position-weighted overall rating (OVR) with international reputation boost
//! - Base wage lookup by rating and defensive/attacking role
//! - End-of-season youngster upgrades from games played and average rating
//! - Attribute redistribution of the season's OVR change

// Doc formatting lints - purely cosmetic, fix incrementally
#![allow(clippy::doc_lazy_continuation)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod player;

// Re-export main API functions
pub use api::{
    batch_youngster_season_json, calculate_rating_json, calculate_wage_json, player_profile_json,
    youngster_season_json, ApiError, ApiResponse,
};
pub use config::EngineConfig;
pub use error::{EngineError, Result};

// Re-export value types
pub use models::{AttributeSet, InternationalReputation, PositionKey, ReputationInput, STAT_COLUMNS};

// Re-export player system
pub use player::{
    calculate_wage, compute_overall_from_stats, compute_youngster_attributes,
    get_avg_upgrade, get_games_upgrade, get_international_reputation_boost,
    get_youngster_upgrade, weights_for, OverallCalculator, PlayerProfile, SeasonProgression,
    UpgradeCalculator, WageCalculator,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: &str = api::API_VERSION;
