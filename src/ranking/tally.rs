use std::collections::HashMap;

use crate::domain::{Match, MatchOutcome, Team};

use super::score::{parse_score, GameTally};
use super::types::{MatchTally, SkipReason, StatAccumulator};

/// Fold one match into the per-player accumulators.
///
/// The accumulator map is the tracked player population: participants with no
/// entry (filtered out upstream) are ignored for their side only. One bad
/// record never fails the computation; it is reported as a skip.
pub fn tally_match(
    record: &Match,
    tournament_id: i64,
    stats: &mut HashMap<i64, StatAccumulator>,
) -> MatchTally {
    if !record.is_decided() {
        return MatchTally::Skipped(SkipReason::Undecided);
    }

    let Some(outcome) = MatchOutcome::from_match(record) else {
        return MatchTally::Skipped(SkipReason::UnresolvedWinner);
    };

    let games = parse_score(record.score.as_deref().unwrap_or(""));

    match outcome {
        MatchOutcome::Singles { winner_id } => {
            tally_singles(record, winner_id, games, tournament_id, stats)
        }
        MatchOutcome::Doubles { winning_team } => {
            tally_doubles(record, winning_team, games, tournament_id, stats);
            MatchTally::Counted
        }
    }
}

fn tally_singles(
    record: &Match,
    winner_id: i64,
    games: GameTally,
    tournament_id: i64,
    stats: &mut HashMap<i64, StatAccumulator>,
) -> MatchTally {
    let (Some(player1), Some(player2)) = (record.player1_id, record.player2_id) else {
        return MatchTally::Skipped(SkipReason::MissingParticipant);
    };

    let loser_id = if winner_id == player1 {
        player2
    } else if winner_id == player2 {
        player1
    } else {
        return MatchTally::Skipped(SkipReason::UnresolvedWinner);
    };

    if let Some(winner) = stats.get_mut(&winner_id) {
        winner.record_win(games.winner_games, tournament_id);
    }
    if let Some(loser) = stats.get_mut(&loser_id) {
        loser.record_loss(games.loser_games, tournament_id);
    }

    MatchTally::Counted
}

fn tally_doubles(
    record: &Match,
    winning_team: Team,
    games: GameTally,
    tournament_id: i64,
    stats: &mut HashMap<i64, StatAccumulator>,
) {
    let seats = [
        (Team::One, record.team1_player1_id),
        (Team::One, record.team1_player2_id),
        (Team::Two, record.team2_player1_id),
        (Team::Two, record.team2_player2_id),
    ];

    for (team, seat) in seats {
        // empty seats are skipped, untracked players too
        let Some(player_id) = seat else { continue };
        let Some(entry) = stats.get_mut(&player_id) else { continue };

        if team == winning_team {
            entry.record_win(games.winner_games, tournament_id);
        } else {
            entry.record_loss(games.loser_games, tournament_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchType;

    fn tracked(ids: &[i64]) -> HashMap<i64, StatAccumulator> {
        ids.iter()
            .map(|&id| (id, StatAccumulator::default()))
            .collect()
    }

    fn singles(winner: Option<&str>, score: Option<&str>) -> Match {
        Match {
            id: 1,
            tournament_id: 7,
            match_type: MatchType::Singles,
            round: Some("final".to_string()),
            score: score.map(String::from),
            winner: winner.map(String::from),
            player1_id: Some(1),
            player2_id: Some(2),
            team1_player1_id: None,
            team1_player2_id: None,
            team2_player1_id: None,
            team2_player2_id: None,
        }
    }

    fn doubles(winner: &str, score: &str) -> Match {
        Match {
            id: 2,
            tournament_id: 7,
            match_type: MatchType::Doubles,
            round: None,
            score: Some(score.to_string()),
            winner: Some(winner.to_string()),
            player1_id: None,
            player2_id: None,
            team1_player1_id: Some(1),
            team1_player2_id: Some(2),
            team2_player1_id: Some(3),
            team2_player2_id: Some(4),
        }
    }

    #[test]
    fn singles_attribution_splits_games_between_sides() {
        let mut stats = tracked(&[1, 2]);
        let result = tally_match(&singles(Some("1"), Some("6-2")), 7, &mut stats);

        assert_eq!(result, MatchTally::Counted);

        let winner = &stats[&1];
        assert_eq!(winner.total_points, 6);
        assert_eq!(winner.matches_won, 1);
        assert_eq!(winner.matches_played, 1);
        assert!(winner.tournaments.contains(&7));

        let loser = &stats[&2];
        assert_eq!(loser.total_points, 2);
        assert_eq!(loser.matches_lost, 1);
        assert_eq!(loser.matches_played, 1);
        assert!(loser.tournaments.contains(&7));
    }

    #[test]
    fn doubles_attribution_credits_all_four_seats() {
        let mut stats = tracked(&[1, 2, 3, 4]);
        let result = tally_match(&doubles("team1", "6-4"), 7, &mut stats);

        assert_eq!(result, MatchTally::Counted);
        for id in [1, 2] {
            assert_eq!(stats[&id].total_points, 6);
            assert_eq!(stats[&id].matches_won, 1);
            assert_eq!(stats[&id].matches_played, 1);
        }
        for id in [3, 4] {
            assert_eq!(stats[&id].total_points, 4);
            assert_eq!(stats[&id].matches_lost, 1);
            assert_eq!(stats[&id].matches_played, 1);
        }
    }

    #[test]
    fn undecided_match_is_skipped() {
        let mut stats = tracked(&[1, 2]);

        let no_winner = tally_match(&singles(None, Some("6-2")), 7, &mut stats);
        assert_eq!(no_winner, MatchTally::Skipped(SkipReason::Undecided));

        let no_score = tally_match(&singles(Some("1"), None), 7, &mut stats);
        assert_eq!(no_score, MatchTally::Skipped(SkipReason::Undecided));

        assert!(stats.values().all(|acc| acc.matches_played == 0));
    }

    #[test]
    fn winner_matching_neither_participant_is_skipped() {
        let mut stats = tracked(&[1, 2]);
        let result = tally_match(&singles(Some("99"), Some("6-2")), 7, &mut stats);

        assert_eq!(result, MatchTally::Skipped(SkipReason::UnresolvedWinner));
        assert!(stats.values().all(|acc| acc.matches_played == 0));
    }

    #[test]
    fn singles_without_both_participants_is_skipped() {
        let mut record = singles(Some("1"), Some("6-2"));
        record.player2_id = None;

        let mut stats = tracked(&[1]);
        let result = tally_match(&record, 7, &mut stats);

        assert_eq!(result, MatchTally::Skipped(SkipReason::MissingParticipant));
    }

    #[test]
    fn untracked_participant_is_ignored_for_that_side_only() {
        // player 2 filtered out of the population; the match still counts
        let mut stats = tracked(&[1]);
        let result = tally_match(&singles(Some("1"), Some("6-2")), 7, &mut stats);

        assert_eq!(result, MatchTally::Counted);
        assert_eq!(stats[&1].total_points, 6);
        assert!(!stats.contains_key(&2));
    }

    #[test]
    fn doubles_with_empty_seat_still_counts_the_rest() {
        let mut record = doubles("team2", "6-3");
        record.team1_player2_id = None;

        let mut stats = tracked(&[1, 3, 4]);
        let result = tally_match(&record, 7, &mut stats);

        assert_eq!(result, MatchTally::Counted);
        assert_eq!(stats[&1].total_points, 3);
        assert_eq!(stats[&1].matches_lost, 1);
        assert_eq!(stats[&3].total_points, 6);
        assert_eq!(stats[&4].total_points, 6);
    }
}
