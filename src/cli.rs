use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "game-log elo ratings backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Parse game-log files into the database
    Ingest {
        /// Folder containing GL{year}.TXT game-log files
        folder: PathBuf,
        /// First season to ingest
        #[arg(long)]
        from: i32,
        /// Last season to ingest (inclusive)
        #[arg(long)]
        to: i32,
        /// Reset the database schema before ingesting
        #[arg(long)]
        fresh: bool,
    },
    /// Calculate Elo ratings from the stored games
    Process {
        /// Maximum rating change from a single game
        #[arg(short, long, default_value_t = 12.0)]
        k: f64,
        /// Logistic scale of the expected-score model
        #[arg(short, long, default_value_t = 400.0)]
        r: f64,
        /// Snapshot after every game instead of once per date
        #[arg(long)]
        per_game_snapshots: bool,
    },
    /// Dump the computed rating history as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
