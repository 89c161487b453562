pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod ranking;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::domain::Gender;
use crate::services::server::ServerService;
use crate::services::standings::StandingsService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_standings(gender: Option<String>, limit: Option<usize>) -> Result<()> {
    let gender = match gender {
        Some(raw) => Some(
            Gender::parse(&raw)
                .ok_or_else(|| anyhow::anyhow!("gender must be 'male' or 'female'"))?,
        ),
        None => None,
    };

    let config = AppConfig::new();
    let service = StandingsService::new(config);
    service.run(gender, limit)
}

pub fn handle_init() -> Result<()> {
    let pool = database::create_pool(&services::database_path())?;
    let mut conn = database::get_connection(&pool)?;
    database::setup::init_schema(&mut conn)
}
