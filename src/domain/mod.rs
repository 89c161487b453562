pub mod models;
pub mod outcome;

pub use models::{
    Gender, Match, MatchType, Medal, MedalType, Player, Tournament, TournamentStatus,
};
pub use outcome::{MatchOutcome, Team};
