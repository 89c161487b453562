use std::sync::LazyLock;

use regex::Regex;

// One set, e.g. "6-4". Anything else in a set position contributes nothing.
static SET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)-(\d+)$").expect("set pattern is valid"));

/// Games won by the match winner and loser across all sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameTally {
    pub winner_games: u32,
    pub loser_games: u32,
}

/// Parse a score string like `"6-3, 4-6, 6-2"` into total games per side.
///
/// Within each set the larger number goes to the winner regardless of which
/// side of the hyphen it appears on; the club records every set with the
/// match winner ahead. Malformed input degrades to a zero tally.
pub fn parse_score(score: &str) -> GameTally {
    let mut tally = GameTally::default();

    for set in score.split(',') {
        if let Some((high, low)) = parse_set(set.trim()) {
            tally.winner_games += high;
            tally.loser_games += low;
        }
    }

    tally
}

fn parse_set(set: &str) -> Option<(u32, u32)> {
    let captures = SET_PATTERN.captures(set)?;
    let first: u32 = captures[1].parse().ok()?;
    let second: u32 = captures[2].parse().ok()?;
    Some((first.max(second), first.min(second)))
}
