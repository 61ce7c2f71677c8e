//! JSON API for player rating, wage and progression operations
//!
//! Request types accept stored league rows as-is (attributes may be missing
//! or `null`, reputation may be a number or a string).

use super::{check_schema_version, ApiError, ApiResponse};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::models::{
    is_stat_column, round_half_up, AttributeSet, ReputationInput, MAX_RATING, MIN_RATING,
};
use crate::player::progression::{MAX_POTENTIAL, MIN_POTENTIAL};
use crate::player::{
    OverallCalculator, PlayerProfile, RatingBreakdown, SeasonInput, SeasonProgression,
    WageCalculator, WageRole, YoungsterSeasonOutcome,
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

pub const MAX_GAMES_PLAYED: u32 = 200;
pub const MIN_ADJUSTED_AVERAGE: f64 = 0.0;
pub const MAX_ADJUSTED_AVERAGE: f64 = 10.0;
pub const MAX_BATCH_SIZE: usize = 500;

/// Overall rating request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RatingRequest {
    pub schema_version: Option<String>,
    pub positions: String,
    pub stats: AttributeSet,
    #[serde(default)]
    pub international_reputation: Option<ReputationInput>,
}

/// Overall rating response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RatingResponse {
    pub breakdown: RatingBreakdown,
    pub wage: u64,
    pub wage_role: WageRole,
}

/// Wage lookup request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WageRequest {
    pub schema_version: Option<String>,
    pub rating: f64,
    pub positions: String,
}

/// Wage lookup response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WageResponse {
    pub rating: f64,
    pub wage: u64,
    pub role: WageRole,
    /// False when the rating has no table row and the default row was used
    pub in_table: bool,
}

/// Player profile request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProfileRequest {
    pub schema_version: Option<String>,
    pub positions: String,
    pub stats: AttributeSet,
    #[serde(default)]
    pub international_reputation: Option<ReputationInput>,
    #[serde(default)]
    pub potential: Option<i32>,
}

/// Single youngster season request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct YoungsterSeasonRequest {
    pub schema_version: Option<String>,
    #[serde(flatten)]
    pub season: SeasonInput,
}

/// Whole-squad youngster season request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BatchYoungsterSeasonRequest {
    pub schema_version: Option<String>,
    pub players: Vec<SeasonInput>,
}

/// Outcome of one batch entry, tagged with its request index
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IndexedSeasonOutcome {
    pub index: usize,
    pub outcome: YoungsterSeasonOutcome,
}

/// Individual failure in batch operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFailure {
    pub index: usize,
    pub player_id: Option<String>,
    pub error: ApiError,
}

/// Whole-squad youngster season response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchYoungsterSeasonResponse {
    pub outcomes: Vec<IndexedSeasonOutcome>,
    pub failed_players: Vec<BatchFailure>,
    pub total_requested: usize,
    pub total_processed: usize,
    pub total_failed: usize,
}

fn check_rating_range(field: &str, value: i32) -> Result<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(EngineError::out_of_range(
            field,
            f64::from(value),
            f64::from(MIN_RATING),
            f64::from(MAX_RATING),
        ));
    }
    Ok(())
}

fn check_potential(potential: Option<i32>) -> Result<()> {
    if let Some(potential) = potential {
        if !(MIN_POTENTIAL..=MAX_POTENTIAL).contains(&potential) {
            return Err(EngineError::out_of_range(
                "potential",
                f64::from(potential),
                f64::from(MIN_POTENTIAL),
                f64::from(MAX_POTENTIAL),
            ));
        }
    }
    Ok(())
}

fn check_attribute_names<'a>(names: impl IntoIterator<Item = &'a String>) -> Result<()> {
    for name in names {
        if !is_stat_column(name) {
            return Err(EngineError::UnknownAttribute(name.clone()));
        }
    }
    Ok(())
}

/// Validate one season entry
pub fn validate_season_input(input: &SeasonInput) -> Result<()> {
    check_rating_range("base_ovr", input.base_ovr)?;

    if input.games_played > MAX_GAMES_PLAYED {
        return Err(EngineError::out_of_range(
            "games_played",
            f64::from(input.games_played),
            0.0,
            f64::from(MAX_GAMES_PLAYED),
        ));
    }

    if !input.adjusted_average.is_finite()
        || !(MIN_ADJUSTED_AVERAGE..=MAX_ADJUSTED_AVERAGE).contains(&input.adjusted_average)
    {
        return Err(EngineError::out_of_range(
            "adjusted_average",
            input.adjusted_average,
            MIN_ADJUSTED_AVERAGE,
            MAX_ADJUSTED_AVERAGE,
        ));
    }

    check_potential(input.potential)?;
    check_attribute_names(&input.ind_training_attrs)?;
    if let Some(non_weighted) = &input.non_weighted_attrs {
        check_attribute_names(non_weighted)?;
    }

    Ok(())
}

impl ProfileRequest {
    pub fn validate(&self) -> Result<()> {
        check_schema_version(self.schema_version.as_deref())?;
        check_potential(self.potential)
    }
}

impl YoungsterSeasonRequest {
    pub fn validate(&self) -> Result<()> {
        check_schema_version(self.schema_version.as_deref())?;
        validate_season_input(&self.season)
    }
}

fn parse_request<R: DeserializeOwned>(request_json: &str, kind: &str) -> std::result::Result<R, ApiError> {
    serde_json::from_str(request_json).map_err(|e| {
        error!("Failed to parse {}: {}", kind, e);
        ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e))
    })
}

fn rejected<T: Serialize>(kind: &str, error: EngineError) -> String {
    warn!("{} validation failed: {}", kind, error);
    ApiResponse::<T>::error(ApiError::from(error)).to_json()
}

/// Compute the overall rating (with breakdown) and wage of a player
///
/// # Arguments
/// * `request_json` - JSON string containing RatingRequest
///
/// # Returns
/// JSON string containing ApiResponse<RatingResponse>
pub fn calculate_rating_json(request_json: &str) -> String {
    debug!("Processing rating request");

    let request: RatingRequest = match parse_request(request_json, "RatingRequest") {
        Ok(req) => req,
        Err(error) => return ApiResponse::<RatingResponse>::error(error).to_json(),
    };

    if let Err(e) = check_schema_version(request.schema_version.as_deref()) {
        return rejected::<RatingResponse>("Rating request", e);
    }

    let breakdown = OverallCalculator::breakdown(
        &request.positions,
        &request.stats,
        request.international_reputation.as_ref(),
    );
    let wage = WageCalculator::calculate(f64::from(breakdown.overall), &request.positions);
    let wage_role = WageCalculator::role_for(&request.positions);

    debug!("Rated {} player at {}", breakdown.position, breakdown.overall);
    ApiResponse::success(RatingResponse { breakdown, wage, wage_role }).to_json()
}

/// Look up the base wage for a rating and positions string
///
/// # Returns
/// JSON string containing ApiResponse<WageResponse>
pub fn calculate_wage_json(request_json: &str) -> String {
    let request: WageRequest = match parse_request(request_json, "WageRequest") {
        Ok(req) => req,
        Err(error) => return ApiResponse::<WageResponse>::error(error).to_json(),
    };

    if let Err(e) = check_schema_version(request.schema_version.as_deref()) {
        return rejected::<WageResponse>("Wage request", e);
    }

    let in_table = request.rating.is_finite()
        && WageCalculator::table_row(round_half_up(request.rating) as i64).is_some();

    ApiResponse::success(WageResponse {
        rating: request.rating,
        wage: WageCalculator::calculate(request.rating, &request.positions),
        role: WageCalculator::role_for(&request.positions),
        in_table,
    })
    .to_json()
}

/// Build a full player profile
///
/// # Returns
/// JSON string containing ApiResponse<PlayerProfile>
pub fn player_profile_json(request_json: &str) -> String {
    let request: ProfileRequest = match parse_request(request_json, "ProfileRequest") {
        Ok(req) => req,
        Err(error) => return ApiResponse::<PlayerProfile>::error(error).to_json(),
    };

    if let Err(e) = request.validate() {
        return rejected::<PlayerProfile>("Profile request", e);
    }

    let profile = PlayerProfile::build(
        &request.positions,
        &request.stats,
        request.international_reputation.as_ref(),
        request.potential,
    );
    ApiResponse::success(profile).to_json()
}

/// Apply one youngster's season with the process-wide engine config
///
/// # Returns
/// JSON string containing ApiResponse<YoungsterSeasonOutcome>
pub fn youngster_season_json(request_json: &str) -> String {
    youngster_season_json_with_config(request_json, EngineConfig::global())
}

pub fn youngster_season_json_with_config(request_json: &str, config: &EngineConfig) -> String {
    info!("Processing youngster season request");

    let request: YoungsterSeasonRequest = match parse_request(request_json, "YoungsterSeasonRequest") {
        Ok(req) => req,
        Err(error) => return ApiResponse::<YoungsterSeasonOutcome>::error(error).to_json(),
    };

    if let Err(e) = request.validate() {
        return rejected::<YoungsterSeasonOutcome>("Youngster season request", e);
    }

    let outcome = SeasonProgression::apply(&request.season, config);
    info!(
        "Youngster season applied: {} -> {} (upgrade {})",
        outcome.base_ovr, outcome.new_ovr, outcome.decision.upgrade
    );
    ApiResponse::success(outcome).to_json()
}

/// Apply a whole squad's season with the process-wide engine config
///
/// Invalid entries are reported by index; the rest are still processed.
///
/// # Returns
/// JSON string containing ApiResponse<BatchYoungsterSeasonResponse>
pub fn batch_youngster_season_json(request_json: &str) -> String {
    batch_youngster_season_json_with_config(request_json, EngineConfig::global())
}

pub fn batch_youngster_season_json_with_config(request_json: &str, config: &EngineConfig) -> String {
    info!("Processing batch youngster season request");

    let request: BatchYoungsterSeasonRequest =
        match parse_request(request_json, "BatchYoungsterSeasonRequest") {
            Ok(req) => req,
            Err(error) => return ApiResponse::<BatchYoungsterSeasonResponse>::error(error).to_json(),
        };

    if let Err(e) = check_schema_version(request.schema_version.as_deref()) {
        return rejected::<BatchYoungsterSeasonResponse>("Batch season request", e);
    }

    if request.players.is_empty() {
        let error = ApiError::new("EMPTY_BATCH", "Batch request cannot be empty");
        return ApiResponse::<BatchYoungsterSeasonResponse>::error(error).to_json();
    }

    if request.players.len() > MAX_BATCH_SIZE {
        let error = ApiError::new(
            "BATCH_SIZE_EXCEEDED",
            &format!("Maximum batch size is {} players", MAX_BATCH_SIZE),
        );
        return ApiResponse::<BatchYoungsterSeasonResponse>::error(error).to_json();
    }

    let mut valid_indices = Vec::new();
    let mut valid_inputs = Vec::new();
    let mut failed_players = Vec::new();

    for (index, input) in request.players.iter().enumerate() {
        match validate_season_input(input) {
            Ok(()) => {
                valid_indices.push(index);
                valid_inputs.push(input.clone());
            }
            Err(e) => {
                warn!("Rejected youngster at index {}: {}", index, e);
                failed_players.push(BatchFailure {
                    index,
                    player_id: input.player_id.clone(),
                    error: ApiError::from(e),
                });
            }
        }
    }

    let outcomes: Vec<IndexedSeasonOutcome> = valid_indices
        .into_iter()
        .zip(SeasonProgression::apply_batch(&valid_inputs, config))
        .map(|(index, outcome)| IndexedSeasonOutcome { index, outcome })
        .collect();

    let response_data = BatchYoungsterSeasonResponse {
        total_requested: request.players.len(),
        total_processed: outcomes.len(),
        total_failed: failed_players.len(),
        outcomes,
        failed_players,
    };

    info!(
        "Batch season completed: {}/{} youngsters processed",
        response_data.total_processed, response_data.total_requested
    );

    ApiResponse::success(response_data).to_json()
}
