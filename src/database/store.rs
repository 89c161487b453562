use anyhow::Result;

use super::connection::{get_connection, DbPool};
use super::{players, tournaments};
use crate::domain::{Player, Tournament};
use crate::ranking::{PlayerStore, TournamentStore};

/// SQLite-backed implementation of the engine's store traits.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl TournamentStore for SqliteStore {
    fn find_completed(&self) -> Result<Vec<Tournament>> {
        let mut conn = get_connection(&self.pool)?;
        tournaments::find_completed(&mut conn)
    }

    fn find_by_participant(&self, player_id: i64, limit: usize) -> Result<Vec<Tournament>> {
        let mut conn = get_connection(&self.pool)?;
        tournaments::find_by_participant(&mut conn, player_id, limit)
    }
}

impl PlayerStore for SqliteStore {
    fn list_players(&self) -> Result<Vec<Player>> {
        let mut conn = get_connection(&self.pool)?;
        players::list_all(&mut conn)
    }
}
