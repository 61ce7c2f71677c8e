//! Youngster season upgrade decision
//!
//! Two independent banded tables decide how many OVR points a youngster
//! gains (or loses) over a season:
//! - games table: keyed by OVR band and games played
//! - average table: keyed by OVR band and adjusted match-rating average,
//!   only consulted from 8 games played
//! The season upgrade is the larger of the two.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum games before the average table counts
pub const MIN_GAMES_FOR_AVERAGE: u32 = 8;

/// OVR band of the current rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum OvrBand {
    #[serde(rename = "<=69")]
    UpTo69,
    #[serde(rename = "70-74")]
    From70To74,
    #[serde(rename = "75-79")]
    From75To79,
    #[serde(rename = "80-84")]
    From80To84,
    #[serde(rename = "85-89")]
    From85To89,
    #[serde(rename = "90+")]
    From90,
}

impl OvrBand {
    pub const ALL: [OvrBand; 6] = [
        OvrBand::UpTo69,
        OvrBand::From70To74,
        OvrBand::From75To79,
        OvrBand::From80To84,
        OvrBand::From85To89,
        OvrBand::From90,
    ];

    /// Non-finite ratings fall into the lowest band.
    pub fn from_rating(rating: f64) -> Self {
        if !rating.is_finite() || rating < 70.0 {
            OvrBand::UpTo69
        } else if rating < 75.0 {
            OvrBand::From70To74
        } else if rating < 80.0 {
            OvrBand::From75To79
        } else if rating < 85.0 {
            OvrBand::From80To84
        } else if rating < 90.0 {
            OvrBand::From85To89
        } else {
            OvrBand::From90
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OvrBand::UpTo69 => "<=69",
            OvrBand::From70To74 => "70-74",
            OvrBand::From75To79 => "75-79",
            OvrBand::From80To84 => "80-84",
            OvrBand::From85To89 => "85-89",
            OvrBand::From90 => "90+",
        }
    }

    /// Lower bounds (games played) of every bucket after the first
    fn games_bucket_bounds(&self) -> &'static [u32] {
        match self {
            OvrBand::UpTo69 | OvrBand::From70To74 | OvrBand::From75To79 => &[5, 10, 15, 20, 25],
            OvrBand::From80To84 => &[8, 15, 22, 28],
            OvrBand::From85To89 | OvrBand::From90 => &[10, 20, 30],
        }
    }

    fn games_deltas(&self) -> &'static [i8] {
        match self {
            OvrBand::UpTo69 => &[-1, 0, 1, 1, 2, 2],
            OvrBand::From70To74 => &[-1, 0, 0, 1, 1, 2],
            OvrBand::From75To79 => &[-2, -1, 0, 1, 1, 2],
            OvrBand::From80To84 => &[-2, -1, 0, 1, 1],
            OvrBand::From85To89 => &[-3, -1, 0, 1],
            OvrBand::From90 => &[-3, -2, 0, 0],
        }
    }

    /// Lower bounds (adjusted average) of every bucket after the first
    fn average_bucket_bounds(&self) -> &'static [f64] {
        match self {
            OvrBand::UpTo69 => &[5.1, 5.8, 6.2, 6.6, 7.0, 7.4],
            OvrBand::From70To74 => &[5.8, 6.2, 6.6, 7.0, 7.4],
            OvrBand::From75To79 => &[6.0, 6.4, 6.8, 7.1, 7.4],
            OvrBand::From80To84 => &[6.4, 6.8, 7.1, 7.4],
            OvrBand::From85To89 => &[6.6, 7.0, 7.4],
            OvrBand::From90 => &[6.8, 7.1, 7.4],
        }
    }

    fn average_deltas(&self) -> &'static [i8] {
        match self {
            OvrBand::UpTo69 => &[-2, -1, 0, 1, 2, 3, 4],
            OvrBand::From70To74 => &[-2, -1, 0, 1, 2, 3],
            OvrBand::From75To79 => &[-2, -1, 0, 1, 2, 3],
            OvrBand::From80To84 => &[-3, -1, 0, 1, 2],
            OvrBand::From85To89 => &[-3, -1, 0, 1],
            OvrBand::From90 => &[-4, -2, 0, 1],
        }
    }

    pub fn games_bucket(&self, games_played: u32) -> usize {
        self.games_bucket_bounds().iter().filter(|&&bound| games_played >= bound).count()
    }

    pub fn average_bucket(&self, adjusted_average: f64) -> usize {
        self.average_bucket_bounds().iter().filter(|&&bound| adjusted_average >= bound).count()
    }
}

impl fmt::Display for OvrBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Both table lookups and the resulting season upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UpgradeDecision {
    pub band: OvrBand,
    pub games_upgrade: i32,
    pub avg_upgrade: i32,
    pub upgrade: i32,
}

/// Season upgrade engine
#[derive(Debug)]
pub struct UpgradeCalculator;

impl UpgradeCalculator {
    pub fn games_upgrade(rating: f64, games_played: u32) -> i32 {
        let band = OvrBand::from_rating(rating);
        i32::from(band.games_deltas()[band.games_bucket(games_played)])
    }

    pub fn avg_upgrade(rating: f64, adjusted_average: f64, games_played: u32) -> i32 {
        Self::avg_upgrade_with_gate(rating, adjusted_average, games_played, MIN_GAMES_FOR_AVERAGE)
    }

    /// Average-table lookup with a configurable minimum sample size.
    /// A non-finite average carries no information and yields 0.
    pub fn avg_upgrade_with_gate(
        rating: f64,
        adjusted_average: f64,
        games_played: u32,
        min_games: u32,
    ) -> i32 {
        if games_played < min_games || !adjusted_average.is_finite() {
            return 0;
        }
        let band = OvrBand::from_rating(rating);
        i32::from(band.average_deltas()[band.average_bucket(adjusted_average)])
    }

    pub fn youngster_upgrade(rating: f64, games_played: u32, adjusted_average: f64) -> i32 {
        Self::decide(rating, games_played, adjusted_average, MIN_GAMES_FOR_AVERAGE).upgrade
    }

    pub fn decide(
        rating: f64,
        games_played: u32,
        adjusted_average: f64,
        min_games: u32,
    ) -> UpgradeDecision {
        let games_upgrade = Self::games_upgrade(rating, games_played);
        let avg_upgrade =
            Self::avg_upgrade_with_gate(rating, adjusted_average, games_played, min_games);

        UpgradeDecision {
            band: OvrBand::from_rating(rating),
            games_upgrade,
            avg_upgrade,
            upgrade: games_upgrade.max(avg_upgrade),
        }
    }
}

pub fn get_games_upgrade(rating: f64, games_played: u32) -> i32 {
    UpgradeCalculator::games_upgrade(rating, games_played)
}

pub fn get_avg_upgrade(rating: f64, adjusted_average: f64, games_played: u32) -> i32 {
    UpgradeCalculator::avg_upgrade(rating, adjusted_average, games_played)
}

pub fn get_youngster_upgrade(rating: f64, games_played: u32, adjusted_average: f64) -> i32 {
    UpgradeCalculator::youngster_upgrade(rating, games_played, adjusted_average)
}
