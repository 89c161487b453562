use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::Player;

use super::types::{PlayerRanking, StatAccumulator};

/// Turn the accumulator map into a sorted, ranked, optionally truncated
/// leaderboard. Players with no decided matches never appear.
pub fn build_rankings(
    players: &[Player],
    mut stats: HashMap<i64, StatAccumulator>,
    limit: Option<usize>,
) -> Vec<PlayerRanking> {
    let mut rankings: Vec<PlayerRanking> = players
        .iter()
        .filter_map(|player| {
            let acc = stats.remove(&player.id)?;
            (acc.matches_played > 0).then(|| build_ranking(player, acc))
        })
        .collect();

    sort_rankings(&mut rankings);
    assign_ranks(&mut rankings);

    if let Some(limit) = limit {
        rankings.truncate(limit);
    }

    rankings
}

fn build_ranking(player: &Player, acc: StatAccumulator) -> PlayerRanking {
    PlayerRanking {
        player_id: player.id,
        name: player.name.clone(),
        gender: player.gender,
        medals: player.medals.clone(),
        total_points: acc.total_points,
        matches_won: acc.matches_won,
        matches_lost: acc.matches_lost,
        matches_played: acc.matches_played,
        win_rate: win_rate(acc.matches_won, acc.matches_played),
        tournaments_played: acc.tournaments.len(),
        rank: 0,
    }
}

fn win_rate(won: u32, played: u32) -> f64 {
    if played == 0 {
        return 0.0;
    }
    let rate = f64::from(won) / f64::from(played) * 100.0;
    (rate * 100.0).round() / 100.0
}

fn sort_rankings(rankings: &mut [PlayerRanking]) {
    rankings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| b.win_rate.partial_cmp(&a.win_rate).unwrap_or(Ordering::Equal))
            .then_with(|| b.matches_played.cmp(&a.matches_played))
    });
}

/// Dense, tie-aware rank assignment. A player whose `(total_points,
/// matches_won)` pair equals the previous player's shares its rank; everyone
/// else takes their 1-based position. The tie test deliberately ignores win
/// rate and matches played even though the sort uses them.
fn assign_ranks(rankings: &mut [PlayerRanking]) {
    let mut previous: Option<((u32, u32), usize)> = None;

    for (index, ranking) in rankings.iter_mut().enumerate() {
        let key = (ranking.total_points, ranking.matches_won);
        let rank = match previous {
            Some((prev_key, prev_rank)) if prev_key == key => prev_rank,
            _ => index + 1,
        };

        ranking.rank = rank;
        previous = Some((key, rank));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;

    fn player(id: i64) -> Player {
        Player {
            id,
            name: format!("Player {}", id),
            gender: Gender::Male,
            medals: Vec::new(),
        }
    }

    fn acc(points: u32, won: u32, lost: u32) -> StatAccumulator {
        StatAccumulator {
            total_points: points,
            matches_won: won,
            matches_lost: lost,
            matches_played: won + lost,
            tournaments: [1].into_iter().collect(),
        }
    }

    fn stats_for(entries: Vec<(i64, StatAccumulator)>) -> HashMap<i64, StatAccumulator> {
        entries.into_iter().collect()
    }

    #[test]
    fn players_without_decided_matches_are_dropped() {
        let players = [player(1), player(2)];
        let stats = stats_for(vec![
            (1, acc(6, 1, 0)),
            (2, StatAccumulator::default()),
        ]);

        let rankings = build_rankings(&players, stats, None);

        assert_eq!(rankings.len(), 1);
        assert_eq!(rankings[0].player_id, 1);
    }

    #[test]
    fn sort_is_points_then_win_rate_then_played() {
        let players = [player(1), player(2), player(3)];
        // same points: player 3 wins 2/2 (100%), player 2 wins 1/2 (50%)
        let stats = stats_for(vec![
            (1, acc(20, 3, 0)),
            (2, acc(12, 1, 1)),
            (3, acc(12, 2, 0)),
        ]);

        let rankings = build_rankings(&players, stats, None);
        let order: Vec<i64> = rankings.iter().map(|r| r.player_id).collect();

        assert_eq!(order, vec![1, 3, 2]);
    }

    #[test]
    fn win_rate_is_rounded_to_two_decimals() {
        let players = [player(1)];
        let stats = stats_for(vec![(1, acc(10, 1, 2))]);

        let rankings = build_rankings(&players, stats, None);

        assert_eq!(rankings[0].win_rate, 33.33);
    }

    #[test]
    fn equal_points_and_wins_share_a_rank() {
        let players = [player(1), player(2), player(3)];
        // 1 and 2 tie on (points, wins) despite different win rates;
        // 3 drops to its positional rank
        let stats = stats_for(vec![
            (1, acc(12, 2, 0)),
            (2, acc(12, 2, 1)),
            (3, acc(8, 1, 1)),
        ]);

        let rankings = build_rankings(&players, stats, None);

        assert_eq!(rankings[0].rank, 1);
        assert_eq!(rankings[1].rank, 1);
        assert_ne!(rankings[0].win_rate, rankings[1].win_rate);
        assert_eq!(rankings[2].rank, 3);
    }

    #[test]
    fn rank_ties_ignore_win_rate() {
        // adjacent in sort order, different win rates, same (points, wins)
        let players = [player(1), player(2)];
        let stats = stats_for(vec![
            (1, acc(10, 2, 0)),
            (2, acc(10, 2, 2)),
        ]);

        let rankings = build_rankings(&players, stats, None);

        assert_eq!(rankings[0].rank, 1);
        assert_eq!(rankings[1].rank, 1);
    }

    #[test]
    fn same_points_different_wins_do_not_tie() {
        let players = [player(1), player(2)];
        let stats = stats_for(vec![
            (1, acc(10, 2, 0)),
            (2, acc(10, 1, 0)),
        ]);

        let rankings = build_rankings(&players, stats, None);

        assert_eq!(rankings[0].rank, 1);
        assert_eq!(rankings[1].rank, 2);
    }

    #[test]
    fn limit_truncates_without_renumbering() {
        let players = [player(1), player(2), player(3)];
        let stats = stats_for(vec![
            (1, acc(12, 2, 0)),
            (2, acc(12, 2, 1)),
            (3, acc(8, 1, 1)),
        ]);

        let rankings = build_rankings(&players, stats, Some(2));

        assert_eq!(rankings.len(), 2);
        assert_eq!(rankings[0].rank, 1);
        assert_eq!(rankings[1].rank, 1);
    }
}
