use std::collections::HashMap;

use anyhow::Result;
use chrono::{Duration, Utc};
use log::{debug, info};

use crate::cache::RankingCache;
use crate::config::settings::RankingSettings;
use crate::domain::{Gender, Match, Player, Tournament};

use super::standings::build_rankings;
use super::store::{PlayerStore, TournamentStore};
use super::tally::tally_match;
use super::types::{
    MatchTally, PlayerRanking, PlayerStats, RankingQuery, RankingStats, RecentMatch,
    StatAccumulator, TournamentPerformance,
};

/// On-demand leaderboard computation over the tournament and player stores,
/// memoized per query shape for the configured TTL.
pub struct RankingEngine<S> {
    store: S,
    cache: RankingCache,
    settings: RankingSettings,
}

impl<S> RankingEngine<S>
where
    S: TournamentStore + PlayerStore,
{
    pub fn new(store: S, settings: RankingSettings) -> Self {
        let cache = RankingCache::new(Duration::seconds(settings.cache_ttl_secs));
        Self {
            store,
            cache,
            settings,
        }
    }

    /// Compute or fetch the ranking list for a query shape.
    pub fn calculate_rankings(&self, query: &RankingQuery) -> Result<RankingStats> {
        let key = query.cache_key();

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let stats = self.compute(query)?;
        self.cache.set(key, stats.clone());
        Ok(stats)
    }

    /// Ranking of a single player from the full unfiltered list.
    ///
    /// `None` covers both an unknown id and a player with no decided
    /// matches; the two are indistinguishable at this layer.
    pub fn player_ranking(&self, player_id: i64) -> Result<Option<PlayerRanking>> {
        let stats = self.calculate_rankings(&RankingQuery::default())?;
        Ok(stats
            .rankings
            .into_iter()
            .find(|ranking| ranking.player_id == player_id))
    }

    /// Leaderboard truncated to the first `count` entries.
    pub fn top_players(&self, count: usize, gender: Option<Gender>) -> Result<RankingStats> {
        self.calculate_rankings(&RankingQuery {
            gender,
            limit: Some(count),
        })
    }

    /// Ranking plus recent form. Always assembled fresh, riding on the
    /// cached full-ranking computation for the ranking portion.
    pub fn player_stats(&self, player_id: i64) -> Result<Option<PlayerStats>> {
        let Some(ranking) = self.player_ranking(player_id)? else {
            return Ok(None);
        };

        let tournaments = self
            .store
            .find_by_participant(player_id, self.settings.recent_tournaments)?;

        Ok(Some(PlayerStats {
            ranking,
            recent_matches: collect_recent_matches(
                &tournaments,
                player_id,
                self.settings.recent_matches,
            ),
            tournament_performance: summarize_tournaments(&tournaments, player_id),
        }))
    }

    /// Drop every cached computation. Invoked by any mutation that could
    /// affect rankings.
    pub fn clear_cache(&self) {
        self.cache.invalidate_all();
    }

    fn compute(&self, query: &RankingQuery) -> Result<RankingStats> {
        let tournaments = self.store.find_completed()?;
        let players = self.tracked_players(query.gender)?;

        info!(
            "Computing rankings: {} completed tournaments, {} tracked players",
            tournaments.len(),
            players.len()
        );

        let mut stats: HashMap<i64, StatAccumulator> = players
            .iter()
            .map(|player| (player.id, StatAccumulator::default()))
            .collect();

        let mut total_matches = 0;
        for tournament in &tournaments {
            for record in &tournament.matches {
                match tally_match(record, tournament.id, &mut stats) {
                    MatchTally::Counted => total_matches += 1,
                    MatchTally::Skipped(reason) => {
                        debug!("Match {} skipped: {:?}", record.id, reason);
                    }
                }
            }
        }

        let rankings = build_rankings(&players, stats, query.limit);
        info!(
            "Ranked {} players across {} decided matches",
            rankings.len(),
            total_matches
        );

        Ok(RankingStats {
            total_tournaments: tournaments.len(),
            total_matches,
            last_updated: Utc::now(),
            rankings,
        })
    }

    fn tracked_players(&self, gender: Option<Gender>) -> Result<Vec<Player>> {
        let players = self.store.list_players()?;
        Ok(match gender {
            Some(gender) => players
                .into_iter()
                .filter(|player| player.gender == gender)
                .collect(),
            None => players,
        })
    }
}

fn collect_recent_matches(
    tournaments: &[Tournament],
    player_id: i64,
    limit: usize,
) -> Vec<RecentMatch> {
    tournaments
        .iter()
        .flat_map(|tournament| {
            tournament
                .matches
                .iter()
                .filter_map(move |record| recent_match_entry(tournament, record, player_id))
        })
        .take(limit)
        .collect()
}

fn recent_match_entry(
    tournament: &Tournament,
    record: &Match,
    player_id: i64,
) -> Option<RecentMatch> {
    if !record.is_decided() || !record.involves(player_id) {
        return None;
    }

    Some(RecentMatch {
        tournament_id: tournament.id,
        tournament_name: tournament.name.clone(),
        date: tournament.date,
        match_type: record.match_type,
        round: record.round.clone(),
        score: record.score.clone().unwrap_or_default(),
        won: record.won_by(player_id),
    })
}

fn summarize_tournaments(tournaments: &[Tournament], player_id: i64) -> Vec<TournamentPerformance> {
    tournaments
        .iter()
        .map(|tournament| {
            let played = tournament
                .matches
                .iter()
                .filter(|record| record.is_decided() && record.involves(player_id))
                .count();
            let won = tournament
                .matches
                .iter()
                .filter(|record| record.is_decided() && record.won_by(player_id))
                .count();

            TournamentPerformance {
                tournament_id: tournament.id,
                tournament_name: tournament.name.clone(),
                date: tournament.date,
                matches_won: won,
                matches_played: played,
                summary: format!("{}/{}", won, played),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchType, TournamentStatus};
    use chrono::NaiveDate;

    struct StubStore {
        tournaments: Vec<Tournament>,
        players: Vec<Player>,
    }

    impl TournamentStore for StubStore {
        fn find_completed(&self) -> Result<Vec<Tournament>> {
            Ok(self.tournaments.clone())
        }

        fn find_by_participant(&self, player_id: i64, limit: usize) -> Result<Vec<Tournament>> {
            Ok(self
                .tournaments
                .iter()
                .filter(|t| t.matches.iter().any(|m| m.involves(player_id)))
                .take(limit)
                .cloned()
                .collect())
        }
    }

    impl PlayerStore for StubStore {
        fn list_players(&self) -> Result<Vec<Player>> {
            Ok(self.players.clone())
        }
    }

    fn player(id: i64, name: &str, gender: Gender) -> Player {
        Player {
            id,
            name: name.to_string(),
            gender,
            medals: Vec::new(),
        }
    }

    fn singles(id: i64, p1: i64, p2: i64, winner: Option<i64>, score: Option<&str>) -> Match {
        Match {
            id,
            tournament_id: 1,
            match_type: MatchType::Singles,
            round: None,
            score: score.map(String::from),
            winner: winner.map(|w| w.to_string()),
            player1_id: Some(p1),
            player2_id: Some(p2),
            team1_player1_id: None,
            team1_player2_id: None,
            team2_player1_id: None,
            team2_player2_id: None,
        }
    }

    fn completed_tournament(id: i64, matches: Vec<Match>) -> Tournament {
        Tournament {
            id,
            name: format!("Open {}", id),
            date: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            status: TournamentStatus::Completed,
            matches,
        }
    }

    fn club_engine() -> RankingEngine<StubStore> {
        // one decided match (A beats B 6-2), one pending (B vs C)
        let store = StubStore {
            tournaments: vec![completed_tournament(
                1,
                vec![
                    singles(1, 10, 20, Some(10), Some("6-2")),
                    singles(2, 20, 30, None, None),
                ],
            )],
            players: vec![
                player(10, "Anna", Gender::Female),
                player(20, "Boris", Gender::Male),
                player(30, "Clara", Gender::Female),
            ],
        };
        RankingEngine::new(store, RankingSettings::default())
    }

    #[test]
    fn end_to_end_leaderboard() {
        let engine = club_engine();
        let stats = engine
            .calculate_rankings(&RankingQuery::default())
            .unwrap();

        assert_eq!(stats.total_tournaments, 1);
        assert_eq!(stats.total_matches, 1);
        assert_eq!(stats.rankings.len(), 2);

        let first = &stats.rankings[0];
        assert_eq!(first.player_id, 10);
        assert_eq!(first.total_points, 6);
        assert_eq!(first.matches_won, 1);
        assert_eq!(first.matches_played, 1);
        assert_eq!(first.win_rate, 100.0);
        assert_eq!(first.tournaments_played, 1);
        assert_eq!(first.rank, 1);

        let second = &stats.rankings[1];
        assert_eq!(second.player_id, 20);
        assert_eq!(second.total_points, 2);
        assert_eq!(second.matches_lost, 1);
        assert_eq!(second.rank, 2);

        // Clara has no decided matches and never appears
        assert!(stats.rankings.iter().all(|r| r.player_id != 30));
    }

    #[test]
    fn repeat_call_is_served_from_cache() {
        let engine = club_engine();
        let query = RankingQuery::default();

        let first = engine.calculate_rankings(&query).unwrap();
        let second = engine.calculate_rankings(&query).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.last_updated, second.last_updated);
    }

    #[test]
    fn clear_cache_forces_a_fresh_computation() {
        let engine = club_engine();
        let query = RankingQuery::default();

        let first = engine.calculate_rankings(&query).unwrap();
        engine.clear_cache();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = engine.calculate_rankings(&query).unwrap();

        assert_ne!(first.last_updated, second.last_updated);
        assert_eq!(first.rankings, second.rankings);
    }

    #[test]
    fn gender_filter_drops_untracked_players_but_not_match_totals() {
        let engine = club_engine();
        let stats = engine
            .calculate_rankings(&RankingQuery {
                gender: Some(Gender::Female),
                limit: None,
            })
            .unwrap();

        assert_eq!(stats.total_matches, 1);
        assert_eq!(stats.rankings.len(), 1);
        assert_eq!(stats.rankings[0].player_id, 10);
    }

    #[test]
    fn top_players_limits_the_list() {
        let engine = club_engine();
        let stats = engine.top_players(1, None).unwrap();

        assert_eq!(stats.rankings.len(), 1);
        assert_eq!(stats.rankings[0].player_id, 10);
    }

    #[test]
    fn unknown_and_zero_match_players_are_both_not_found() {
        let engine = club_engine();

        assert!(engine.player_ranking(999).unwrap().is_none());
        assert!(engine.player_ranking(30).unwrap().is_none());
    }

    #[test]
    fn player_stats_reports_recent_form() {
        let engine = club_engine();
        let stats = engine.player_stats(20).unwrap().unwrap();

        assert_eq!(stats.ranking.player_id, 20);
        // only the decided match shows up
        assert_eq!(stats.recent_matches.len(), 1);
        let recent = &stats.recent_matches[0];
        assert_eq!(recent.score, "6-2");
        assert!(!recent.won);

        assert_eq!(stats.tournament_performance.len(), 1);
        assert_eq!(stats.tournament_performance[0].summary, "0/1");
    }

    #[test]
    fn player_stats_for_zero_match_player_is_not_found() {
        let engine = club_engine();
        assert!(engine.player_stats(30).unwrap().is_none());
    }
}
