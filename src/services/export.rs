use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use super::database_path;
use crate::database;

/// Dumps the persisted rating history as JSON, for downstream reporting.
pub struct ExportService {
    output: Option<PathBuf>,
}

impl ExportService {
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }

    pub fn run(&self) -> Result<()> {
        let pool = database::create_pool(&database_path())?;
        let mut conn = database::get_connection(&pool)?;

        let rows = database::ratings::list_all(&mut conn)?;
        let json =
            serde_json::to_string_pretty(&rows).context("Failed to serialize rating history")?;

        match &self.output {
            Some(path) => {
                fs::write(path, json)
                    .with_context(|| format!("Failed to write export to {}", path.display()))?;
                info!("Exported {} rating rows to {}", rows.len(), path.display());
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}
