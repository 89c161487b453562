use std::collections::HashMap;

use anyhow::{Context, Result};

use super::connection::DbConn;
use crate::domain::{Medal, Player};

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, gender FROM players ORDER BY name";

    let mut stmt = conn.prepare(sql)?;
    let mut players = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list players")?;
    drop(stmt);

    attach_medals(conn, &mut players)?;
    Ok(players)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        gender: row.get(2)?,
        medals: Vec::new(),
    })
}

fn attach_medals(conn: &mut DbConn, players: &mut [Player]) -> Result<()> {
    let sql = "SELECT player_id, medal_type, tournament_name FROM medals ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            let player_id: i64 = row.get(0)?;
            let medal = Medal {
                medal_type: row.get(1)?,
                tournament_name: row.get(2)?,
            };
            Ok((player_id, medal))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to load medals")?;

    let mut by_player: HashMap<i64, Vec<Medal>> = HashMap::new();
    for (player_id, medal) in rows {
        by_player.entry(player_id).or_default().push(medal);
    }

    for player in players {
        if let Some(medals) = by_player.remove(&player.id) {
            player.medals = medals;
        }
    }

    Ok(())
}
