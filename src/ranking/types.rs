use std::collections::HashSet;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::domain::{Gender, MatchType, Medal};

/// Filter shape of a ranking computation. Doubles as the cache key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankingQuery {
    pub gender: Option<Gender>,
    pub limit: Option<usize>,
}

impl RankingQuery {
    /// Literal `gender:limit` combination, `all` standing in for "unfiltered"
    pub fn cache_key(&self) -> String {
        let gender = self.gender.map_or("all", |g| g.as_str());
        match self.limit {
            Some(limit) => format!("{}:{}", gender, limit),
            None => format!("{}:all", gender),
        }
    }
}

/// Running per-player totals while matches are folded in
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    pub total_points: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
    pub matches_played: u32,
    pub tournaments: HashSet<i64>,
}

impl StatAccumulator {
    pub fn record_win(&mut self, points: u32, tournament_id: i64) {
        self.total_points += points;
        self.matches_won += 1;
        self.matches_played += 1;
        self.tournaments.insert(tournament_id);
    }

    pub fn record_loss(&mut self, points: u32, tournament_id: i64) {
        self.total_points += points;
        self.matches_lost += 1;
        self.matches_played += 1;
        self.tournaments.insert(tournament_id);
    }
}

/// Outcome of folding one match into the accumulators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTally {
    Counted,
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Winner or score missing; the match has not been played out
    Undecided,
    /// Winner tag unparseable or matching neither recorded participant
    UnresolvedWinner,
    /// Singles record without both participant ids
    MissingParticipant,
}

/// One leaderboard row, derived fresh on every cache-miss computation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRanking {
    pub player_id: i64,
    pub name: String,
    pub gender: Gender,
    pub medals: Vec<Medal>,
    pub total_points: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
    pub matches_played: u32,
    /// Percentage, rounded to two decimals
    pub win_rate: f64,
    pub tournaments_played: usize,
    pub rank: usize,
}

/// Full computation result, the unit that is cached and returned
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingStats {
    pub total_tournaments: usize,
    pub total_matches: usize,
    pub last_updated: DateTime<Utc>,
    pub rankings: Vec<PlayerRanking>,
}

/// One of a player's recent decided matches, newest tournament first
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentMatch {
    pub tournament_id: i64,
    pub tournament_name: String,
    pub date: NaiveDateTime,
    pub match_type: MatchType,
    pub round: Option<String>,
    pub score: String,
    pub won: bool,
}

/// Won/played summary for one tournament, displayed as `W/P`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentPerformance {
    pub tournament_id: i64,
    pub tournament_name: String,
    pub date: NaiveDateTime,
    pub matches_won: usize,
    pub matches_played: usize,
    pub summary: String,
}

/// Detailed per-player view: ranking plus recent form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub ranking: PlayerRanking,
    pub recent_matches: Vec<RecentMatch>,
    pub tournament_performance: Vec<TournamentPerformance>,
}
