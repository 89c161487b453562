use serde::Deserialize;

use crate::config::AppConfig;
use crate::database::SqliteStore;
use crate::ranking::RankingEngine;

pub mod admin;
pub mod rankings;

pub struct AppState {
    pub engine: RankingEngine<SqliteStore>,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct RankingParams {
    pub gender: Option<String>,
    pub limit: Option<usize>,
}
