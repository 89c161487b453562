use anyhow::Result;

use tennis_club_ranking::cli::Command;
use tennis_club_ranking::{handle_init, handle_serve, handle_standings, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Standings { gender, limit } => handle_standings(gender.clone(), *limit),
        Command::Init => handle_init(),
    }
}
