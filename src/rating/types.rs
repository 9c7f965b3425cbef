use std::fmt;

use chrono::NaiveDate;

pub type TeamId = String;
pub type RatingValue = f64;

/// Game outcome from the contest's point of view (visitor vs. home).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    VisitorWin,
    HomeWin,
    Tie,
}

impl Outcome {
    /// Actual scores (S_visitor, S_home) for the Elo update.
    pub fn scores(&self) -> (f64, f64) {
        match self {
            Outcome::VisitorWin => (1.0, 0.0),
            Outcome::HomeWin => (0.0, 1.0),
            Outcome::Tie => (0.5, 0.5),
        }
    }
}

/// One pairwise contest, already ordered by (date, seq) upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct ContestRecord {
    pub date: NaiveDate,
    /// Per-day ordinal (doubleheader game number), breaks same-date ties.
    pub seq: u32,
    pub visitor: TeamId,
    pub home: TeamId,
    pub outcome: Outcome,
}

/// Snapshot date axis: the synthetic pre-season marker sorts before every
/// played date and renders as the literal "start".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SnapshotDate {
    Start,
    Played(NaiveDate),
}

impl fmt::Display for SnapshotDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotDate::Start => write!(f, "start"),
            SnapshotDate::Played(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// One row of the rating history: a team's rating as of a snapshot date.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSnapshotRow {
    pub team: TeamId,
    pub date: SnapshotDate,
    pub rating: RatingValue,
}

/// When the engine records a full cross-section of all teams' ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotPolicy {
    /// Once per distinct date, after every contest of that date has been
    /// applied. Documented behavior.
    #[default]
    DateTransition,
    /// After every single contest; same-date duplicates are expected.
    /// Parity option for datasets produced by the per-game variant.
    PerContest,
}
