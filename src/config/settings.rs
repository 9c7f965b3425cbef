use crate::rating::SnapshotPolicy;

/// Elo engine parameters. Historical defaults: K=12, R=400, baseline 1200.
pub struct EloSettings {
    /// Maximum rating change from a single contest.
    pub k: f64,
    /// Logistic scale: rating gap at which the favorite's odds reach 10:1.
    pub r: f64,
    pub baseline_rating: f64,
    pub snapshot_policy: SnapshotPolicy,
}

impl Default for EloSettings {
    fn default() -> Self {
        Self {
            k: 12.0,
            r: 400.0,
            baseline_rating: 1200.0,
            snapshot_policy: SnapshotPolicy::default(),
        }
    }
}

pub struct IngestSettings {
    /// Game-log files are named `{prefix}{year}.{extension}`.
    pub file_prefix: &'static str,
    pub file_extension: &'static str,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            file_prefix: "GL",
            file_extension: "TXT",
        }
    }
}

pub struct AppConfig {
    pub elo: EloSettings,
    pub ingest: IngestSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            elo: EloSettings::default(),
            ingest: IngestSettings::default(),
        }
    }
}
