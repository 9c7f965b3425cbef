use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use log::{info, warn};

use super::database_path;
use crate::config::AppConfig;
use crate::database;
use crate::domain::expand_game;
use crate::parser;

/// Parses game-log files for a range of seasons and loads the per-team rows
/// into the games table.
pub struct IngestionService {
    config: AppConfig,
    folder: PathBuf,
    from_season: i32,
    to_season: i32,
    fresh: bool,
}

impl IngestionService {
    pub fn new(
        config: AppConfig,
        folder: PathBuf,
        from_season: i32,
        to_season: i32,
        fresh: bool,
    ) -> Self {
        Self {
            config,
            folder,
            from_season,
            to_season,
            fresh,
        }
    }

    pub fn run(&self) -> Result<()> {
        if self.from_season > self.to_season {
            bail!(
                "Invalid season range: {}..{}",
                self.from_season,
                self.to_season
            );
        }

        info!("=== Starting Game-Log Ingestion ===\n");

        let pool = database::create_pool(&database_path())?;
        let mut conn = database::get_connection(&pool)?;

        if self.fresh {
            database::setup::reset_database(&mut conn)?;
        }

        let mut inserted = 0usize;
        let mut skipped = 0usize;

        for season in self.from_season..=self.to_season {
            let path = self.season_file(season);
            if !path.exists() {
                warn!("No game-log file for season {}: {}", season, path.display());
                continue;
            }

            let (new_rows, dup_rows) = self.ingest_file(&mut conn, &path, season)?;
            inserted += new_rows;
            skipped += dup_rows;
        }

        info!(
            "  → Inserted {} team-game rows ({} duplicates skipped)\n",
            inserted, skipped
        );
        info!("=== Ingestion Complete ===");
        Ok(())
    }

    fn season_file(&self, season: i32) -> PathBuf {
        let settings = &self.config.ingest;
        self.folder.join(format!(
            "{}{}.{}",
            settings.file_prefix, season, settings.file_extension
        ))
    }

    fn ingest_file(
        &self,
        conn: &mut database::DbConn,
        path: &Path,
        season: i32,
    ) -> Result<(usize, usize)> {
        let records = parser::parse_file(path)?;
        info!(
            "  Season {}: {} games from {}",
            season,
            records.len(),
            path.display()
        );

        let mut inserted = 0;
        let mut skipped = 0;
        for record in &records {
            for row in expand_game(record, season) {
                if database::games::insert_team_game(conn, &row)? {
                    inserted += 1;
                } else {
                    skipped += 1;
                }
            }
        }

        Ok((inserted, skipped))
    }
}
