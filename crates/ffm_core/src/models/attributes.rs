//! Attribute columns, attribute sets and international reputation parsing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value substituted for an attribute that is missing or not a finite number.
pub const DEFAULT_ATTRIBUTE_VALUE: f64 = 50.0;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 99;

/// The 33 attribute columns stored on league player rows.
pub const STAT_COLUMNS: [&str; 33] = [
    // Attacking
    "crossing",
    "finishing",
    "heading_accuracy",
    "short_passing",
    "volleys",
    // Skill
    "dribbling",
    "curve",
    "fk_accuracy",
    "long_passing",
    "ball_control",
    // Movement
    "acceleration",
    "sprint_speed",
    "agility",
    "reactions",
    "balance",
    // Power
    "shot_power",
    "jumping",
    "stamina",
    "strength",
    "long_shots",
    // Mentality
    "aggression",
    "interceptions",
    "positioning",
    "vision",
    "penalties",
    // Defending
    "marking",
    "standing_tackle",
    "sliding_tackle",
    // Goalkeeping
    "gk_diving",
    "gk_handling",
    "gk_kicking",
    "gk_positioning",
    "gk_reflexes",
];

/// Attributes that progress at the flat rate for every youngster,
/// whatever their position.
pub const CANONICAL_NON_WEIGHTED: [&str; 6] =
    ["stamina", "agility", "balance", "jumping", "aggression", "vision"];

pub fn is_stat_column(name: &str) -> bool {
    STAT_COLUMNS.contains(&name)
}

/// Rounds half-way cases towards positive infinity (`-2.5 -> -2`, `2.5 -> 3`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Clamp into the 1..=99 rating/attribute range.
pub fn clamp_rating(value: i64) -> u8 {
    value.clamp(MIN_RATING as i64, MAX_RATING as i64) as u8
}

/// Raw attribute values keyed by column name.
///
/// Values come straight from stored rows and may be missing, `null` or
/// fractional; readers decide how to default them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AttributeSet(BTreeMap<String, Option<f64>>);

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: f64) {
        self.0.insert(name.to_string(), Some(value));
    }

    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Finite value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied().flatten().filter(|v| v.is_finite())
    }

    pub fn value_or_default(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(DEFAULT_ATTRIBUTE_VALUE)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Copy of this set with `updates` written over it.
    pub fn merged_with(&self, updates: &BTreeMap<String, u8>) -> AttributeSet {
        let mut merged = self.clone();
        for (name, value) in updates {
            merged.insert(name, f64::from(*value));
        }
        merged
    }
}

impl<'a> FromIterator<(&'a str, f64)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

/// International reputation as stored: either a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ReputationInput {
    Number(f64),
    Text(String),
}

/// International reputation star rating, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub struct InternationalReputation(u8);

impl InternationalReputation {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: i64) -> Self {
        Self(stars.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Parse a stored reputation value; absent or unparseable input is 1 star.
    pub fn parse(input: Option<&ReputationInput>) -> Self {
        let stars = match input {
            Some(ReputationInput::Number(n)) if n.is_finite() => Some(n.trunc() as i64),
            Some(ReputationInput::Text(text)) => parse_leading_integer(text),
            _ => None,
        };
        stars.map(Self::new).unwrap_or_default()
    }

    pub fn stars(&self) -> u8 {
        self.0
    }
}

impl Default for InternationalReputation {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<u8> for InternationalReputation {
    fn from(stars: u8) -> Self {
        Self::new(i64::from(stars))
    }
}

/// Integer prefix of a string such as `"4"`, `" 3 stars"` or `"-2"`.
fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_stat_columns_are_unique() {
        let unique: HashSet<&str> = STAT_COLUMNS.iter().copied().collect();
        assert_eq!(unique.len(), 33);
        for name in CANONICAL_NON_WEIGHTED {
            assert!(is_stat_column(name), "{} should be a stat column", name);
        }
    }

    #[test]
    fn test_attribute_set_defaults() {
        let mut stats = AttributeSet::new().with("finishing", 88.0).with("volleys", f64::NAN);
        stats.0.insert("curve".to_string(), None);

        assert_eq!(stats.get("finishing"), Some(88.0));
        assert_eq!(stats.get("volleys"), None, "NaN is not a usable value");
        assert_eq!(stats.get("curve"), None);
        assert_eq!(stats.value_or_default("volleys"), 50.0);
        assert_eq!(stats.value_or_default("missing"), 50.0);
    }

    #[test]
    fn test_attribute_set_json_accepts_nulls() {
        let stats: AttributeSet =
            serde_json::from_str(r#"{"finishing": 71, "vision": null, "curve": 64.5}"#).unwrap();
        assert_eq!(stats.len(), 3);
        assert_eq!(stats.get("finishing"), Some(71.0));
        assert_eq!(stats.get("vision"), None);
        assert_eq!(stats.get("curve"), Some(64.5));
    }

    #[test]
    fn test_merged_with_overwrites() {
        let stats = AttributeSet::new().with("finishing", 70.0).with("curve", 60.0);
        let mut updates = BTreeMap::new();
        updates.insert("finishing".to_string(), 74u8);
        let merged = stats.merged_with(&updates);
        assert_eq!(merged.get("finishing"), Some(74.0));
        assert_eq!(merged.get("curve"), Some(60.0));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(80.5), 81.0);
        assert_eq!(round_half_up(80.49), 80.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn test_reputation_parsing() {
        let parse = |input: Option<ReputationInput>| InternationalReputation::parse(input.as_ref()).stars();

        assert_eq!(parse(None), 1);
        assert_eq!(parse(Some(ReputationInput::Number(3.0))), 3);
        assert_eq!(parse(Some(ReputationInput::Number(4.9))), 4);
        assert_eq!(parse(Some(ReputationInput::Number(9.0))), 5);
        assert_eq!(parse(Some(ReputationInput::Number(-3.0))), 1);
        assert_eq!(parse(Some(ReputationInput::Number(f64::NAN))), 1);
        assert_eq!(parse(Some(ReputationInput::Text("5".into()))), 5);
        assert_eq!(parse(Some(ReputationInput::Text(" 2 stars".into()))), 2);
        assert_eq!(parse(Some(ReputationInput::Text("7".into()))), 5);
        assert_eq!(parse(Some(ReputationInput::Text("0".into()))), 1);
        assert_eq!(parse(Some(ReputationInput::Text("unknown".into()))), 1);
        assert_eq!(parse(Some(ReputationInput::Text("".into()))), 1);
    }

    #[test]
    fn test_reputation_json_forms() {
        let number: ReputationInput = serde_json::from_str("4").unwrap();
        let text: ReputationInput = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(InternationalReputation::parse(Some(&number)).stars(), 4);
        assert_eq!(InternationalReputation::parse(Some(&text)).stars(), 4);
    }
}
