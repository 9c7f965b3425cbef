pub mod export;
pub mod ingestion;
pub mod processing;

/// Database location, overridable the same way across all commands.
pub(crate) fn database_path() -> String {
    std::env::var("DATABASE_PATH").unwrap_or_else(|_| "gamedb.db".to_string())
}
