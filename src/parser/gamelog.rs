use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use super::formats;
use crate::domain::GameLogRecord;
use crate::rating::Outcome;

/// Parses a whole game-log file, one game per non-empty line.
pub fn parse_file(path: &Path) -> Result<Vec<GameLogRecord>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read game-log file: {}", path.display()))?;

    let mut records = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_line(line).with_context(|| {
            format!("Failed to parse {} line {}", path.display(), line_no + 1)
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Parses one game-log line into a game record, deriving the outcome.
pub fn parse_line(line: &str) -> Result<GameLogRecord> {
    let fields = split_fields(line);
    if fields.len() < formats::MIN_FIELDS {
        bail!(
            "Game-log line has {} fields, expected at least {}",
            fields.len(),
            formats::MIN_FIELDS
        );
    }

    let date = parse_date(&fields[formats::DATE])?;
    let gnum = fields[formats::GAME_NUM]
        .parse::<u32>()
        .with_context(|| format!("Invalid game number: {:?}", fields[formats::GAME_NUM]))?;
    let score_vis = parse_score(&fields[formats::SCORE_VIS], "visiting")?;
    let score_home = parse_score(&fields[formats::SCORE_HOME], "home")?;
    let outcome = derive_outcome(&fields[formats::FORFEIT], score_vis, score_home)?;

    Ok(GameLogRecord {
        date,
        gnum,
        team_vis: fields[formats::TEAM_VIS].clone(),
        team_home: fields[formats::TEAM_HOME].clone(),
        score_vis,
        score_home,
        outs: optional_int(&fields[formats::OUTS]),
        line_vis: optional_text(&fields[formats::LINE_VIS]),
        line_home: optional_text(&fields[formats::LINE_HOME]),
        outcome,
    })
}

/// Splits a comma-separated line with double-quoted text fields. Quotes wrap
/// whole fields; commas inside quotes do not split.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .with_context(|| format!("Invalid game date: {raw:?}"))
}

fn parse_score(raw: &str, side: &str) -> Result<i32> {
    raw.parse::<i32>()
        .with_context(|| format!("Invalid {side} score: {raw:?}"))
}

/// A non-empty forfeit field decides the game directly; otherwise the score
/// comparison does, with equal scores a tie.
fn derive_outcome(forfeit: &str, score_vis: i32, score_home: i32) -> Result<Outcome> {
    if !forfeit.is_empty() {
        return match forfeit {
            "V" => Ok(Outcome::VisitorWin),
            "H" => Ok(Outcome::HomeWin),
            "T" => Ok(Outcome::Tie),
            other => bail!("Unknown forfeit code: {other:?}"),
        };
    }

    if score_vis > score_home {
        Ok(Outcome::VisitorWin)
    } else if score_home > score_vis {
        Ok(Outcome::HomeWin)
    } else {
        Ok(Outcome::Tie)
    }
}

fn optional_int(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok()
}

fn optional_text(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
