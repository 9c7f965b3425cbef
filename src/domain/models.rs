use chrono::NaiveDate;

use crate::rating::Outcome;

/// One parsed game-log line: a single game between two teams.
#[derive(Debug, Clone)]
pub struct GameLogRecord {
    pub date: NaiveDate,
    /// Per-day game number (0 for single games, 1/2 for doubleheaders).
    pub gnum: u32,
    pub team_vis: String,
    pub team_home: String,
    pub score_vis: i32,
    pub score_home: i32,
    /// Game length in outs, when the log carries it.
    pub outs: Option<i32>,
    pub line_vis: Option<String>,
    pub line_home: Option<String>,
    pub outcome: Outcome,
}

/// Which side of the game a per-team row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    Visitor,
    Home,
}

impl Host {
    pub fn as_str(&self) -> &str {
        match self {
            Host::Visitor => "V",
            Host::Home => "H",
        }
    }
}

/// Game result from one team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamResult {
    Win,
    Loss,
    Tie,
}

impl TeamResult {
    pub fn from_outcome(outcome: Outcome, host: Host) -> Self {
        match (outcome, host) {
            (Outcome::Tie, _) => TeamResult::Tie,
            (Outcome::VisitorWin, Host::Visitor) | (Outcome::HomeWin, Host::Home) => {
                TeamResult::Win
            }
            _ => TeamResult::Loss,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TeamResult::Win => "W",
            TeamResult::Loss => "L",
            TeamResult::Tie => "T",
        }
    }
}

/// One row of the normalized per-team-per-game table.
#[derive(Debug, Clone)]
pub struct TeamGame {
    pub season: i32,
    pub date: NaiveDate,
    pub gnum: u32,
    pub teamid: String,
    pub opponent: String,
    /// teamid + date + gnum; unique per team appearance.
    pub gid: String,
    pub host: Host,
    pub outs: Option<i32>,
    pub result: TeamResult,
    pub runs_scored: i32,
    pub runs_allowed: i32,
    pub line: Option<String>,
    pub line_opp: Option<String>,
}
