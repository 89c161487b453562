use anyhow::Result;

use crate::domain::{Player, Tournament};

/// Read-only view of tournament storage. Failures propagate unchanged; the
/// engine never retries.
pub trait TournamentStore {
    /// All completed tournaments with their match collections, newest first.
    fn find_completed(&self) -> Result<Vec<Tournament>>;

    /// Completed tournaments in which the player occupies any seat of any
    /// match, newest first, at most `limit`.
    fn find_by_participant(&self, player_id: i64, limit: usize) -> Result<Vec<Tournament>>;
}

/// Read-only view of player storage.
pub trait PlayerStore {
    /// Every registered player, medals included.
    fn list_players(&self) -> Result<Vec<Player>>;
}
