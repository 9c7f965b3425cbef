use anyhow::Result;
use log::info;

use super::database_path;
use crate::config::AppConfig;
use crate::database;
use crate::rating::{self, SnapshotDate};

/// Loads the stored contest feed, runs the Elo engine over it, and replaces
/// the persisted rating history.
pub struct ProcessingService {
    config: AppConfig,
}

impl ProcessingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        info!("=== Starting Rating Processing ===\n");

        let pool = database::create_pool(&database_path())?;
        let mut conn = database::get_connection(&pool)?;

        let contests = database::games::list_contests(&mut conn)?;
        info!("  → Loaded {} contests from the games table", contests.len());

        let history = rating::compute_ratings(&contests, &self.config.elo)?;
        let teams = history
            .iter()
            .filter(|row| row.date == SnapshotDate::Start)
            .count();
        info!(
            "  → Computed {} snapshot rows across {} teams",
            history.len(),
            teams
        );

        let written = database::ratings::replace_all(&mut conn, &history)?;
        info!("  → Replaced elos table with {} rows\n", written);

        info!("=== Processing Complete ===");
        Ok(())
    }
}
