use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::config::AppConfig;
use crate::database::{self, SqliteStore};
use crate::domain::{Gender, Medal, MedalType};
use crate::ranking::{PlayerRanking, RankingEngine, RankingQuery};

/// One-shot leaderboard computation for the CLI.
pub struct StandingsService {
    config: AppConfig,
}

impl StandingsService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, gender: Option<Gender>, limit: Option<usize>) -> Result<()> {
        let pool = database::create_pool(&super::database_path())?;

        let mut conn = database::get_connection(&pool)?;
        database::setup::init_schema(&mut conn)?;
        drop(conn);

        let engine = RankingEngine::new(SqliteStore::new(pool), self.config.ranking.clone());
        let stats = engine.calculate_rankings(&RankingQuery { gender, limit })?;

        info!(
            "{} completed tournaments, {} decided matches",
            stats.total_tournaments, stats.total_matches
        );

        print_header();
        for ranking in &stats.rankings {
            print_row(ranking);
        }

        Ok(())
    }
}

fn print_header() {
    println!(
        "{:>4}  {:<24} {:>6} {:>5} {:>5} {:>7} {:>4}  {}",
        "Rank", "Player", "Points", "Won", "Lost", "Win %", "Trn", "Medals"
    );
}

fn print_row(ranking: &PlayerRanking) {
    let line = format!(
        "{:>4}  {:<24} {:>6} {:>5} {:>5} {:>7.2} {:>4}  {}",
        ranking.rank,
        ranking.name,
        ranking.total_points,
        ranking.matches_won,
        ranking.matches_lost,
        ranking.win_rate,
        ranking.tournaments_played,
        format_medals(&ranking.medals)
    );

    match ranking.rank {
        1 => println!("{}", line.yellow().bold()),
        2 => println!("{}", line.bright_white().bold()),
        3 => println!("{}", line.truecolor(205, 127, 50)),
        _ => println!("{}", line),
    }
}

fn format_medals(medals: &[Medal]) -> String {
    if medals.is_empty() {
        return "-".to_string();
    }

    let count = |wanted: MedalType| medals.iter().filter(|m| m.medal_type == wanted).count();
    format!(
        "{}G {}S {}B",
        count(MedalType::Gold),
        count(MedalType::Silver),
        count(MedalType::Bronze)
    )
}
