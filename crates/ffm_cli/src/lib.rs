//! ffm CLI library
//!
//! File plumbing around the `ffm_core` JSON API: read a request file,
//! dispatch it to an endpoint, write the response envelope.

use anyhow::{Context, Result};
use ffm_core::api::{
    batch_youngster_season_json_with_config, calculate_rating_json, calculate_wage_json,
    player_profile_json, youngster_season_json_with_config, BatchYoungsterSeasonRequest,
    ProfileRequest, RatingRequest, WageRequest, YoungsterSeasonRequest,
};
use ffm_core::EngineConfig;
use schemars::schema_for;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// JSON endpoints reachable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Rate,
    Wage,
    Profile,
    Season,
    BatchSeason,
}

impl Endpoint {
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Rate => "rate",
            Endpoint::Wage => "wage",
            Endpoint::Profile => "profile",
            Endpoint::Season => "season",
            Endpoint::BatchSeason => "batch-season",
        }
    }

    pub fn call(&self, request_json: &str, config: &EngineConfig) -> String {
        debug!(endpoint = self.name(), bytes = request_json.len(), "dispatching request");
        match self {
            Endpoint::Rate => calculate_rating_json(request_json),
            Endpoint::Wage => calculate_wage_json(request_json),
            Endpoint::Profile => player_profile_json(request_json),
            Endpoint::Season => youngster_season_json_with_config(request_json, config),
            Endpoint::BatchSeason => batch_youngster_season_json_with_config(request_json, config),
        }
    }

    /// JSON Schema of the endpoint's request body
    pub fn request_schema(&self) -> Result<serde_json::Value> {
        let schema = match self {
            Endpoint::Rate => serde_json::to_value(schema_for!(RatingRequest)),
            Endpoint::Wage => serde_json::to_value(schema_for!(WageRequest)),
            Endpoint::Profile => serde_json::to_value(schema_for!(ProfileRequest)),
            Endpoint::Season => serde_json::to_value(schema_for!(YoungsterSeasonRequest)),
            Endpoint::BatchSeason => serde_json::to_value(schema_for!(BatchYoungsterSeasonRequest)),
        };
        schema.with_context(|| format!("Failed to serialize schema for {}", self.name()))
    }
}

pub fn config_schema() -> Result<serde_json::Value> {
    serde_json::to_value(schema_for!(EngineConfig)).context("Failed to serialize config schema")
}

/// Engine config from `--config`, else from `FFM_ENGINE_CONFIG_PATH`, else defaults
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load engine config: {}", path.display()))?,
        None => EngineConfig::from_env().context("Failed to load engine config from environment")?,
    };
    info!(
        min_games_for_average = config.min_games_for_average,
        apply_potential_cap = config.apply_potential_cap,
        "engine config ready"
    );
    Ok(config)
}

pub fn read_request(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read request file: {}", path.display()))
}

/// Wage request built from `--rating` / `--positions`
pub fn wage_request(rating: f64, positions: &str) -> String {
    serde_json::json!({ "rating": rating, "positions": positions }).to_string()
}

/// Write `body` to `out`, or to stdout when no path is given
pub fn write_output(out: Option<&Path>, body: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, body)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!("Response written to {}", path.display());
        }
        None => println!("{}", body),
    }
    Ok(())
}

/// Error code of a failed response envelope, `None` on success
pub fn failure_code(response_json: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(response_json).ok()?;
    if value["success"].as_bool() == Some(true) {
        return None;
    }
    Some(value["error"]["code"].as_str().unwrap_or("UNKNOWN").to_string())
}
