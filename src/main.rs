use anyhow::Result;

use gamelog_elo::cli::Command;
use gamelog_elo::{handle_export, handle_ingest, handle_process, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
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
        Command::Ingest {
            folder,
            from,
            to,
            fresh,
        } => handle_ingest(folder, *from, *to, *fresh),
        Command::Process {
            k,
            r,
            per_game_snapshots,
        } => handle_process(*k, *r, *per_game_snapshots),
        Command::Export { output } => handle_export(output.clone()),
    }
}
