use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use crate::domain::{Match, Tournament, TournamentStatus};

pub fn find_completed(conn: &mut DbConn) -> Result<Vec<Tournament>> {
    let sql = "SELECT id, name, start_date, status FROM tournaments WHERE status = ?1 ORDER BY start_date DESC";

    let mut stmt = conn.prepare(sql)?;
    let mut tournaments = stmt
        .query_map(
            params![TournamentStatus::Completed.as_str()],
            parse_tournament_row,
        )?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to query completed tournaments")?;
    drop(stmt);

    attach_matches(conn, &mut tournaments)?;
    Ok(tournaments)
}

/// Completed tournaments in which the player occupies any seat of any match,
/// newest first.
pub fn find_by_participant(
    conn: &mut DbConn,
    player_id: i64,
    limit: usize,
) -> Result<Vec<Tournament>> {
    let sql = "
        SELECT DISTINCT t.id, t.name, t.start_date, t.status
        FROM tournaments t
        JOIN matches m ON m.tournament_id = t.id
        WHERE t.status = ?1
          AND (m.player1_id = ?2 OR m.player2_id = ?2
            OR m.team1_player1_id = ?2 OR m.team1_player2_id = ?2
            OR m.team2_player1_id = ?2 OR m.team2_player2_id = ?2)
        ORDER BY t.start_date DESC
        LIMIT ?3
    ";

    let mut stmt = conn.prepare(sql)?;
    let mut tournaments = stmt
        .query_map(
            params![
                TournamentStatus::Completed.as_str(),
                player_id,
                limit as i64
            ],
            parse_tournament_row,
        )?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to query tournaments by participant")?;
    drop(stmt);

    attach_matches(conn, &mut tournaments)?;
    Ok(tournaments)
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        name: row.get(1)?,
        date: row.get(2)?,
        status: row.get(3)?,
        matches: Vec::new(),
    })
}

fn attach_matches(conn: &mut DbConn, tournaments: &mut [Tournament]) -> Result<()> {
    for tournament in tournaments {
        tournament.matches = list_matches(conn, tournament.id)?;
    }
    Ok(())
}

fn list_matches(conn: &mut DbConn, tournament_id: i64) -> Result<Vec<Match>> {
    let sql = "
        SELECT id, tournament_id, match_type, round, score, winner,
               player1_id, player2_id,
               team1_player1_id, team1_player2_id, team2_player1_id, team2_player2_id
        FROM matches
        WHERE tournament_id = ?1
        ORDER BY id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to query matches for tournament")?;

    Ok(rows)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        match_type: row.get(2)?,
        round: row.get(3)?,
        score: row.get(4)?,
        winner: row.get(5)?,
        player1_id: row.get(6)?,
        player2_id: row.get(7)?,
        team1_player1_id: row.get(8)?,
        team1_player2_id: row.get(9)?,
        team2_player1_id: row.get(10)?,
        team2_player2_id: row.get(11)?,
    })
}
