use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{ApiError, ApiResponse};

use super::AppState;

/// Full cache clear, invoked after any mutation that could affect rankings
/// (medal awards, tournament edits).
pub async fn clear_ranking_cache(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let auth_header = headers.get("Authorization").and_then(|h| h.to_str().ok());
    let expected = format!("Bearer {}", state.config.server.admin_token);
    if auth_header != Some(expected.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiError::new("Invalid admin token")),
        )
            .into_response();
    }

    state.engine.clear_cache();
    log::info!("Admin cleared the ranking cache");

    Json(ApiResponse::ok_with_message((), "Ranking cache cleared")).into_response()
}
