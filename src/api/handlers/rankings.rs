use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use crate::api::models::{ApiError, ApiResponse};
use crate::domain::Gender;
use crate::ranking::RankingQuery;

use super::{AppState, RankingParams};

pub async fn get_rankings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RankingParams>,
) -> impl IntoResponse {
    let (gender, limit) = match validate_params(&params, None) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match state.engine.calculate_rankings(&RankingQuery { gender, limit }) {
        Ok(stats) => Json(ApiResponse::ok(stats)).into_response(),
        Err(e) => internal_error(&e),
    }
}

pub async fn get_top_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RankingParams>,
) -> impl IntoResponse {
    let max = state.config.ranking.top_limit_max;
    let (gender, limit) = match validate_params(&params, Some(max)) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    let count = limit.unwrap_or(state.config.ranking.default_top_count);
    match state.engine.top_players(count, gender) {
        Ok(stats) => Json(ApiResponse::ok(stats)).into_response(),
        Err(e) => internal_error(&e),
    }
}

pub async fn get_player_ranking(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
) -> impl IntoResponse {
    match state.engine.player_ranking(player_id) {
        Ok(Some(ranking)) => Json(ApiResponse::ok(ranking)).into_response(),
        Ok(None) => not_found("Player ranking not found"),
        Err(e) => internal_error(&e),
    }
}

pub async fn get_player_stats(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
) -> impl IntoResponse {
    match state.engine.player_stats(player_id) {
        Ok(Some(stats)) => Json(ApiResponse::ok(stats)).into_response(),
        Ok(None) => not_found("Player ranking not found"),
        Err(e) => internal_error(&e),
    }
}

/// Query validation lives at this boundary; the engine accepts any query.
fn validate_params(
    params: &RankingParams,
    max_limit: Option<usize>,
) -> Result<(Option<Gender>, Option<usize>), Response> {
    let gender = match params.gender.as_deref() {
        None => None,
        Some(raw) => match Gender::parse(raw) {
            Some(gender) => Some(gender),
            None => return Err(bad_request("gender must be 'male' or 'female'")),
        },
    };

    if params.limit == Some(0) {
        return Err(bad_request("limit must be a positive integer"));
    }
    if let (Some(limit), Some(max)) = (params.limit, max_limit) {
        if limit > max {
            return Err(bad_request(format!("limit must be at most {}", max)));
        }
    }

    Ok((gender, params.limit))
}

fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ApiError::new(message))).into_response()
}

fn not_found(message: impl Into<String>) -> Response {
    (StatusCode::NOT_FOUND, Json(ApiError::new(message))).into_response()
}

fn internal_error(error: &anyhow::Error) -> Response {
    log::error!("Ranking computation failed: {:?}", error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(format!("Ranking computation failed: {}", error))),
    )
        .into_response()
}
