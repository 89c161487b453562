use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Club member taking part in tournaments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub gender: Gender,
    pub medals: Vec<Medal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Medal awarded to a player, carried through to ranking output unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medal {
    #[serde(rename = "type")]
    pub medal_type: MedalType,
    #[serde(rename = "tournament")]
    pub tournament_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedalType {
    Gold,
    Silver,
    Bronze,
}

impl MedalType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "gold" => Some(MedalType::Gold),
            "silver" => Some(MedalType::Silver),
            "bronze" => Some(MedalType::Bronze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MedalType::Gold => "gold",
            MedalType::Silver => "silver",
            MedalType::Bronze => "bronze",
        }
    }
}

/// Tournament with its recorded matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub date: NaiveDateTime,
    pub status: TournamentStatus,
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl TournamentStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "upcoming" => Some(TournamentStatus::Upcoming),
            "ongoing" => Some(TournamentStatus::Ongoing),
            "completed" => Some(TournamentStatus::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "upcoming",
            TournamentStatus::Ongoing => "ongoing",
            TournamentStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Singles,
    Doubles,
}

impl MatchType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "singles" => Some(MatchType::Singles),
            "doubles" => Some(MatchType::Doubles),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Singles => "singles",
            MatchType::Doubles => "doubles",
        }
    }
}

/// Raw match record as stored.
///
/// `winner` is match-type-dependent: the winning player's id for singles,
/// the literal `"team1"`/`"team2"` tag for doubles. Singles fill
/// `player1_id`/`player2_id`; doubles fill the four seat fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub tournament_id: i64,
    pub match_type: MatchType,
    pub round: Option<String>,
    pub score: Option<String>,
    pub winner: Option<String>,
    pub player1_id: Option<i64>,
    pub player2_id: Option<i64>,
    pub team1_player1_id: Option<i64>,
    pub team1_player2_id: Option<i64>,
    pub team2_player1_id: Option<i64>,
    pub team2_player2_id: Option<i64>,
}

impl Match {
    /// A match without both a winner and a score is not yet decided.
    /// Empty strings count as absent.
    pub fn is_decided(&self) -> bool {
        self.winner.as_deref().is_some_and(|w| !w.is_empty())
            && self.score.as_deref().is_some_and(|s| !s.is_empty())
    }
}
