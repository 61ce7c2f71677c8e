//! Value types shared by the rating, wage and progression calculators.

pub mod attributes;
pub mod position;

pub use attributes::{
    clamp_rating, is_stat_column, round_half_up, AttributeSet, InternationalReputation,
    ReputationInput, CANONICAL_NON_WEIGHTED, DEFAULT_ATTRIBUTE_VALUE, MAX_RATING, MIN_RATING,
    STAT_COLUMNS,
};
pub use position::{first_position_token, resolve_primary_position, PositionKey};
