pub mod engine;
pub mod score;
mod standings;
pub mod store;
mod tally;
pub mod types;

pub use engine::RankingEngine;
pub use score::{parse_score, GameTally};
pub use store::{PlayerStore, TournamentStore};
pub use types::{PlayerRanking, PlayerStats, RankingQuery, RankingStats};
