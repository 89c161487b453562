use super::models::{Match, MatchType};

/// Doubles side tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "team1" => Some(Team::One),
            "team2" => Some(Team::Two),
            _ => None,
        }
    }
}

/// Decided result of a match, parsed once from the raw record so downstream
/// logic matches on a closed type instead of comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Singles { winner_id: i64 },
    Doubles { winning_team: Team },
}

impl MatchOutcome {
    /// Parse the winner field of a decided match. Returns `None` for
    /// undecided matches and for winner tags that do not fit the match type.
    pub fn from_match(record: &Match) -> Option<Self> {
        if !record.is_decided() {
            return None;
        }

        let winner = record.winner.as_deref()?;

        match record.match_type {
            MatchType::Singles => {
                let winner_id = winner.parse::<i64>().ok()?;
                Some(MatchOutcome::Singles { winner_id })
            }
            MatchType::Doubles => {
                let winning_team = Team::parse(winner)?;
                Some(MatchOutcome::Doubles { winning_team })
            }
        }
    }
}

impl Match {
    /// Whether the player occupies any seat of this match.
    pub fn involves(&self, player_id: i64) -> bool {
        match self.match_type {
            MatchType::Singles => {
                self.player1_id == Some(player_id) || self.player2_id == Some(player_id)
            }
            MatchType::Doubles => self.team_of(player_id).is_some(),
        }
    }

    /// Which doubles side the player sits on, if any.
    pub fn team_of(&self, player_id: i64) -> Option<Team> {
        let id = Some(player_id);
        if self.team1_player1_id == id || self.team1_player2_id == id {
            Some(Team::One)
        } else if self.team2_player1_id == id || self.team2_player2_id == id {
            Some(Team::Two)
        } else {
            None
        }
    }

    /// Whether the player won this match. False for undecided matches and
    /// unresolvable winner tags.
    pub fn won_by(&self, player_id: i64) -> bool {
        match MatchOutcome::from_match(self) {
            Some(MatchOutcome::Singles { winner_id }) => {
                winner_id == player_id && self.involves(player_id)
            }
            Some(MatchOutcome::Doubles { winning_team }) => {
                self.team_of(player_id) == Some(winning_team)
            }
            None => false,
        }
    }
}
