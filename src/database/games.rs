use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use rusqlite::params;

use super::connection::DbConn;
use crate::domain::TeamGame;
use crate::rating::{ContestRecord, Outcome};

/// Inserts one per-team game row. Returns false when the row's gid already
/// exists (re-ingesting a season is a no-op).
pub fn insert_team_game(conn: &mut DbConn, game: &TeamGame) -> Result<bool> {
    let sql = "INSERT OR IGNORE INTO games (season, date, gnum, teamid, opponent, gid, host, outs, result, runs_scored, runs_allowed, line, line_opp) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";

    let changed = conn
        .execute(
            sql,
            params![
                game.season,
                game.date,
                game.gnum,
                game.teamid,
                game.opponent,
                game.gid,
                game.host.as_str(),
                game.outs,
                game.result.as_str(),
                game.runs_scored,
                game.runs_allowed,
                game.line,
                game.line_opp,
            ],
        )
        .with_context(|| format!("Failed to insert game {}", game.gid))?;

    Ok(changed > 0)
}

/// Rebuilds the pairwise contest feed from the per-team table. Each game
/// appears exactly once from the visitor's perspective; ordering by
/// (date, gnum) gives the engine its chronological feed.
pub fn list_contests(conn: &mut DbConn) -> Result<Vec<ContestRecord>> {
    let sql = "SELECT date, gnum, teamid, opponent, result FROM games WHERE host = 'V' ORDER BY date, gnum";

    let mut stmt = conn.prepare(sql)?;
    let raw = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, NaiveDate>(0)?,
                row.get::<_, u32>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to load contests from games table")?;

    raw.into_iter()
        .map(|(date, seq, visitor, home, result)| {
            Ok(ContestRecord {
                date,
                seq,
                visitor,
                home,
                outcome: outcome_from_visitor_result(&result)?,
            })
        })
        .collect()
}

fn outcome_from_visitor_result(result: &str) -> Result<Outcome> {
    match result {
        "W" => Ok(Outcome::VisitorWin),
        "L" => Ok(Outcome::HomeWin),
        "T" => Ok(Outcome::Tie),
        other => bail!("Unknown result letter in games table: {other:?}"),
    }
}

pub fn count_all(conn: &mut DbConn) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))
        .context("Failed to count games")
}
