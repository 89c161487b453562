use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "tennis-club ranking backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Compute the current leaderboard and print it
    Standings {
        /// Restrict to one gender (male or female)
        #[arg(short, long)]
        gender: Option<String>,
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Create the database schema
    Init,
}
