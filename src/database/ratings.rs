use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::EloRow;
use crate::rating::RatingSnapshotRow;

/// Replaces the elos table contents with a freshly computed history, in one
/// transaction so readers never see a half-written table.
pub fn replace_all(conn: &mut DbConn, rows: &[RatingSnapshotRow]) -> Result<usize> {
    let tx = conn
        .transaction()
        .context("Failed to open transaction for elos replace")?;

    tx.execute("DELETE FROM elos", [])
        .context("Failed to clear elos table")?;

    {
        let mut stmt = tx
            .prepare("INSERT INTO elos (teamid, date, rating) VALUES (?1, ?2, ?3)")
            .context("Failed to prepare elos insert")?;

        for row in rows {
            stmt.execute(params![row.team, row.date.to_string(), row.rating])
                .with_context(|| {
                    format!("Failed to insert rating for {} at {}", row.team, row.date)
                })?;
        }
    }

    tx.commit().context("Failed to commit elos replace")?;
    Ok(rows.len())
}

fn parse_elo_row(row: &rusqlite::Row) -> rusqlite::Result<EloRow> {
    Ok(EloRow {
        id: row.get(0)?,
        teamid: row.get(1)?,
        date: row.get(2)?,
        rating: row.get(3)?,
        created_at: row.get(4)?,
    })
}

// "start" must sort before every ISO date, hence the CASE.
const DATE_ORDER: &str = "CASE WHEN date = 'start' THEN 0 ELSE 1 END, date";

pub fn list_all(conn: &mut DbConn) -> Result<Vec<EloRow>> {
    let sql = format!(
        "SELECT id, teamid, date, rating, created_at FROM elos ORDER BY teamid, {DATE_ORDER}"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_elo_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list elo rows")?;

    Ok(rows)
}

pub fn list_by_team(conn: &mut DbConn, teamid: &str) -> Result<Vec<EloRow>> {
    let sql = format!(
        "SELECT id, teamid, date, rating, created_at FROM elos WHERE teamid = ?1 ORDER BY {DATE_ORDER}"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![teamid], parse_elo_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("Failed to list elo rows for team {teamid}"))?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::create_test_connection;
    use crate::database::setup::reset_database;
    use crate::rating::SnapshotDate;
    use chrono::NaiveDate;

    fn snapshot(team: &str, date: SnapshotDate, rating: f64) -> RatingSnapshotRow {
        RatingSnapshotRow {
            team: team.to_string(),
            date,
            rating,
        }
    }

    fn played(y: i32, m: u32, d: u32) -> SnapshotDate {
        SnapshotDate::Played(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn replace_then_list_round_trips_with_start_first() {
        let mut conn = create_test_connection().unwrap();
        reset_database(&mut conn).unwrap();

        let history = vec![
            snapshot("NYA", SnapshotDate::Start, 1200.0),
            snapshot("NYA", played(2019, 4, 1), 1206.0),
            snapshot("BOS", SnapshotDate::Start, 1200.0),
            snapshot("BOS", played(2019, 4, 1), 1194.0),
        ];
        assert_eq!(replace_all(&mut conn, &history).unwrap(), 4);

        let rows = list_all(&mut conn).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].teamid, "BOS");
        assert_eq!(rows[0].date, "start");
        assert_eq!(rows[1].date, "2019-04-01");
        assert_eq!(rows[2].teamid, "NYA");
        assert_eq!(rows[2].date, "start");

        let nya = list_by_team(&mut conn, "NYA").unwrap();
        assert_eq!(nya.len(), 2);
        assert!((nya[1].rating - 1206.0).abs() < 1e-9);
    }

    #[test]
    fn replace_discards_the_previous_history() {
        let mut conn = create_test_connection().unwrap();
        reset_database(&mut conn).unwrap();

        replace_all(&mut conn, &[snapshot("NYA", SnapshotDate::Start, 1200.0)]).unwrap();
        replace_all(&mut conn, &[snapshot("BOS", SnapshotDate::Start, 1200.0)]).unwrap();

        let rows = list_all(&mut conn).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].teamid, "BOS");
    }
}
