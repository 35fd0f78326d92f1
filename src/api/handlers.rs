use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::api::state::AppState;
use crate::betting::{recommend_for_date, SlateOutcome};
use crate::error::ApiError;
use crate::models::parse_date;

pub const NO_ACTIVE_PLAYERS_MESSAGE: &str = "No active players found for the selected date.";

#[derive(Debug, Deserialize)]
pub struct BetsQuery {
    pub date: Option<String>,
}

/// GET /bets?date=2024-01-15
pub async fn get_bets(
    State(state): State<AppState>,
    params: Result<Query<BetsQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) =
        params.map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))?;

    let raw = params
        .date
        .filter(|d| !d.trim().is_empty())
        .ok_or(ApiError::MissingDate)?;

    let date = parse_date(&raw).ok_or_else(|| {
        debug!("Rejecting unparseable date '{}'", raw);
        ApiError::InvalidDate(raw.clone())
    })?;

    match recommend_for_date(&state.data, date, state.odds.as_ref()) {
        SlateOutcome::NoActivePlayers => {
            Ok(Json(json!({ "message": NO_ACTIVE_PLAYERS_MESSAGE })).into_response())
        }
        SlateOutcome::Picks(picks) => {
            debug!("Serving {} picks for {}", picks.len(), date);
            Ok(Json(picks).into_response())
        }
    }
}
