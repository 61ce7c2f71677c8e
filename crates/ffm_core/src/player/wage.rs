//! Base wage lookup by overall rating and role
//!
//! The table covers ratings 53..=95. Each row holds a defensive and an
//! attacking wage; defensive wages sit at 80% of the attacking figure.
//! Ratings without a row fall back to `DEFAULT_WAGE_ROW`.

use crate::models::{first_position_token, round_half_up, PositionKey};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WageRow {
    pub defensive: u64,
    pub attacking: u64,
}

impl WageRow {
    const fn new(defensive: u64, attacking: u64) -> Self {
        Self { defensive, attacking }
    }

    pub fn for_role(&self, role: WageRole) -> u64 {
        match role {
            WageRole::Defensive => self.defensive,
            WageRole::Attacking => self.attacking,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WageRole {
    Defensive,
    Attacking,
}

pub const WAGE_TABLE_MIN_RATING: u8 = 53;
pub const WAGE_TABLE_MAX_RATING: u8 = 95;

pub const DEFAULT_WAGE_ROW: WageRow = WageRow::new(800_000, 1_000_000);

/// Rows for ratings 53..=95, indexed by `rating - 53`
const WAGE_TABLE: [WageRow; 43] = [
    WageRow::new(240_000, 300_000),       // 53
    WageRow::new(280_000, 350_000),       // 54
    WageRow::new(320_000, 400_000),       // 55
    WageRow::new(400_000, 500_000),       // 56
    WageRow::new(480_000, 600_000),       // 57
    WageRow::new(560_000, 700_000),       // 58
    WageRow::new(680_000, 850_000),       // 59
    WageRow::new(800_000, 1_000_000),     // 60
    WageRow::new(960_000, 1_200_000),     // 61
    WageRow::new(1_120_000, 1_400_000),   // 62
    WageRow::new(1_280_000, 1_600_000),   // 63
    WageRow::new(1_440_000, 1_800_000),   // 64
    WageRow::new(1_600_000, 2_000_000),   // 65
    WageRow::new(1_840_000, 2_300_000),   // 66
    WageRow::new(2_080_000, 2_600_000),   // 67
    WageRow::new(2_400_000, 3_000_000),   // 68
    WageRow::new(2_800_000, 3_500_000),   // 69
    WageRow::new(3_200_000, 4_000_000),   // 70
    WageRow::new(3_600_000, 4_500_000),   // 71
    WageRow::new(4_000_000, 5_000_000),   // 72
    WageRow::new(4_400_000, 5_500_000),   // 73
    WageRow::new(4_800_000, 6_000_000),   // 74
    WageRow::new(5_600_000, 7_000_000),   // 75
    WageRow::new(6_400_000, 8_000_000),   // 76
    WageRow::new(7_200_000, 9_000_000),   // 77
    WageRow::new(8_000_000, 10_000_000),  // 78
    WageRow::new(9_200_000, 11_500_000),  // 79
    WageRow::new(10_400_000, 13_000_000), // 80
    WageRow::new(12_000_000, 15_000_000), // 81
    WageRow::new(13_600_000, 17_000_000), // 82
    WageRow::new(15_200_000, 19_000_000), // 83
    WageRow::new(16_800_000, 21_000_000), // 84
    WageRow::new(19_200_000, 24_000_000), // 85
    WageRow::new(21_600_000, 27_000_000), // 86
    WageRow::new(24_000_000, 30_000_000), // 87
    WageRow::new(27_200_000, 34_000_000), // 88
    WageRow::new(31_200_000, 39_000_000), // 89
    WageRow::new(35_200_000, 44_000_000), // 90
    WageRow::new(38_400_000, 48_000_000), // 91
    WageRow::new(41_600_000, 52_000_000), // 92
    WageRow::new(44_800_000, 56_000_000), // 93
    WageRow::new(48_000_000, 60_000_000), // 94
    WageRow::new(48_000_000, 60_000_000), // 95
];

/// Wage engine
pub struct WageCalculator;

impl WageCalculator {
    /// Row for an exact table rating, if one exists
    pub fn table_row(rating: i64) -> Option<WageRow> {
        if !(i64::from(WAGE_TABLE_MIN_RATING)..=i64::from(WAGE_TABLE_MAX_RATING)).contains(&rating) {
            return None;
        }
        WAGE_TABLE.get((rating - i64::from(WAGE_TABLE_MIN_RATING)) as usize).copied()
    }

    /// Row for a (possibly fractional) rating, rounded half up; default row when missing
    pub fn row_for_rating(rating: f64) -> WageRow {
        if !rating.is_finite() {
            return DEFAULT_WAGE_ROW;
        }
        Self::table_row(round_half_up(rating) as i64).unwrap_or(DEFAULT_WAGE_ROW)
    }

    /// Role used for wages: only the first listed position counts
    pub fn role_for(positions: &str) -> WageRole {
        let defensive = first_position_token(positions)
            .and_then(|token| token.parse::<PositionKey>().ok())
            .is_some_and(|position| position.is_defensive_wage_table());

        if defensive {
            WageRole::Defensive
        } else {
            WageRole::Attacking
        }
    }

    pub fn calculate(rating: f64, positions: &str) -> u64 {
        Self::row_for_rating(rating).for_role(Self::role_for(positions))
    }
}

pub fn calculate_wage(rating: f64, positions: &str) -> u64 {
    WageCalculator::calculate(rating, positions)
}
