use super::models::{GameLogRecord, Host, TeamGame, TeamResult};

/// Expands one game into its two per-team rows (visitor and home
/// perspectives, mirrored results and scores).
pub fn expand_game(record: &GameLogRecord, season: i32) -> [TeamGame; 2] {
    [
        team_row(record, season, Host::Visitor),
        team_row(record, season, Host::Home),
    ]
}

fn team_row(record: &GameLogRecord, season: i32, host: Host) -> TeamGame {
    let (teamid, opponent, runs_scored, runs_allowed, line, line_opp) = match host {
        Host::Visitor => (
            &record.team_vis,
            &record.team_home,
            record.score_vis,
            record.score_home,
            &record.line_vis,
            &record.line_home,
        ),
        Host::Home => (
            &record.team_home,
            &record.team_vis,
            record.score_home,
            record.score_vis,
            &record.line_home,
            &record.line_vis,
        ),
    };

    TeamGame {
        season,
        date: record.date,
        gnum: record.gnum,
        teamid: teamid.clone(),
        opponent: opponent.clone(),
        gid: format!("{}{}{}", teamid, record.date.format("%Y%m%d"), record.gnum),
        host,
        outs: record.outs,
        result: TeamResult::from_outcome(record.outcome, host),
        runs_scored,
        runs_allowed,
        line: line.clone(),
        line_opp: line_opp.clone(),
    }
}
