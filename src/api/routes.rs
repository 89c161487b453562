use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    admin::clear_ranking_cache,
    rankings::{get_player_ranking, get_player_stats, get_rankings, get_top_players},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/rankings", get(get_rankings))
        .route("/api/rankings/top", get(get_top_players))
        .route("/api/rankings/player/:id", get(get_player_ranking))
        .route("/api/rankings/player/:id/stats", get(get_player_stats))
        .route("/api/admin/cache/clear", post(clear_ranking_cache))
        .with_state(state)
}
