//! Engine configuration
//!
//! Defaults reproduce the league's progression rules. A JSON file named by
//! `FFM_ENGINE_CONFIG_PATH` may override them; missing fields keep defaults.

use crate::error::{EngineError, Result};
use crate::models::{is_stat_column, CANONICAL_NON_WEIGHTED};
use crate::player::upgrade::MIN_GAMES_FOR_AVERAGE;
use once_cell::sync::OnceCell;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};
use tracing::{info, warn};

pub const ENGINE_CONFIG_PATH_ENV: &str = "FFM_ENGINE_CONFIG_PATH";

const MAX_RATE: f64 = 5.0;
const MAX_MIN_GAMES: u32 = 100;

static GLOBAL_CONFIG: OnceCell<EngineConfig> = OnceCell::new();

/// Per-OVR-point attribute movement rates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ProgressionRates {
    /// Weighted attribute that is also an individual training focus
    pub training_focus_rate: f64,
    /// Weighted attribute of the primary position
    pub weighted_rate: f64,
    /// Canonical non-weighted attribute
    pub non_weighted_rate: f64,
}

impl Default for ProgressionRates {
    fn default() -> Self {
        Self { training_focus_rate: 2.0, weighted_rate: 1.6, non_weighted_rate: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EngineConfig {
    pub progression: ProgressionRates,
    pub min_games_for_average: u32,
    pub non_weighted_attributes: Vec<String>,
    /// Derive the attribute delta from `min(new_ovr, potential)` instead of `new_ovr`
    pub apply_potential_cap: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            progression: ProgressionRates::default(),
            min_games_for_average: MIN_GAMES_FOR_AVERAGE,
            non_weighted_attributes: CANONICAL_NON_WEIGHTED.iter().map(|s| s.to_string()).collect(),
            apply_potential_cap: false,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("training_focus_rate", self.progression.training_focus_rate),
            ("weighted_rate", self.progression.weighted_rate),
            ("non_weighted_rate", self.progression.non_weighted_rate),
        ];
        for (name, rate) in rates {
            if !rate.is_finite() || rate <= 0.0 || rate > MAX_RATE {
                return Err(EngineError::InvalidConfig(format!(
                    "progression.{} must be in (0, {}], got {}",
                    name, MAX_RATE, rate
                )));
            }
        }

        if self.min_games_for_average > MAX_MIN_GAMES {
            return Err(EngineError::InvalidConfig(format!(
                "min_games_for_average must be at most {}, got {}",
                MAX_MIN_GAMES, self.min_games_for_average
            )));
        }

        for name in &self.non_weighted_attributes {
            if !is_stat_column(name) {
                return Err(EngineError::InvalidConfig(format!(
                    "non_weighted_attributes has unknown attribute {}",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Read, parse and validate a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let load_error = |message: String| EngineError::ConfigLoad {
            source_name: "file".to_string(),
            path: path.display().to_string(),
            message,
        };

        let content = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        let config = Self::from_json(&content).map_err(|e| load_error(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Config named by `FFM_ENGINE_CONFIG_PATH`; defaults when unset or blank
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(ENGINE_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::from_file(Path::new(path)).map_err(|e| match e {
            EngineError::ConfigLoad { path, message, .. } => EngineError::ConfigLoad {
                source_name: ENGINE_CONFIG_PATH_ENV.to_string(),
                path,
                message,
            },
            other => other,
        })
    }

    /// Process-wide config, loaded from the environment on first use.
    /// A broken config file is logged and replaced by defaults.
    pub fn global() -> &'static EngineConfig {
        GLOBAL_CONFIG.get_or_init(|| match Self::from_env() {
            Ok(config) => {
                info!(?config, "engine config loaded");
                config
            }
            Err(e) => {
                warn!("{}; falling back to default engine config", e);
                Self::default()
            }
        })
    }

    /// Install `config` as the process-wide config. Fails if one is already set.
    pub fn install_global(config: EngineConfig) -> Result<()> {
        config.validate()?;
        GLOBAL_CONFIG
            .set(config)
            .map_err(|_| EngineError::InvalidConfig("engine config already initialised".to_string()))
    }
}
