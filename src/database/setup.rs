use anyhow::{Context, Result};

use super::connection::DbConn;

/// Drops and recreates the games and elos tables from the bundled schema.
/// Safe to run on a fresh or an existing database.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");

    for (idx, statement) in split_sql_statements(schema_sql).iter().enumerate() {
        conn.execute(statement, [])
            .with_context(|| format!("Failed to execute schema statement {}", idx + 1))?;
    }

    log::info!("Database schema reset");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::create_test_connection;

    #[test]
    fn reset_is_repeatable() {
        let mut conn = create_test_connection().unwrap();
        reset_database(&mut conn).unwrap();
        reset_database(&mut conn).unwrap();

        let games: i64 = conn
            .query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))
            .unwrap();
        let elos: i64 = conn
            .query_row("SELECT COUNT(*) FROM elos", [], |row| row.get(0))
            .unwrap();
        assert_eq!(games, 0);
        assert_eq!(elos, 0);
    }
}
