pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod parser;
pub mod rating;
pub mod services;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::rating::SnapshotPolicy;
use crate::services::export::ExportService;
use crate::services::ingestion::IngestionService;
use crate::services::processing::ProcessingService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_ingest(folder: &Path, from: i32, to: i32, fresh: bool) -> Result<()> {
    let config = AppConfig::new();
    let service = IngestionService::new(config, folder.to_path_buf(), from, to, fresh);
    service.run()
}

pub fn handle_process(k: f64, r: f64, per_game_snapshots: bool) -> Result<()> {
    let mut config = AppConfig::new();
    config.elo.k = k;
    config.elo.r = r;
    if per_game_snapshots {
        config.elo.snapshot_policy = SnapshotPolicy::PerContest;
    }

    let service = ProcessingService::new(config);
    service.run()
}

pub fn handle_export(output: Option<PathBuf>) -> Result<()> {
    let service = ExportService::new(output);
    service.run()
}
