//! Column positions in Retrosheet game-log files.
//!
//! Full lines carry 161 fields; only the ones below matter here. Positions
//! follow the Retrosheet game-log descriptor (0-based).

/// Game date, `%Y%m%d`.
pub const DATE: usize = 0;
/// Per-day game number: 0 for single games, 1/2 for doubleheaders.
pub const GAME_NUM: usize = 1;
pub const TEAM_VIS: usize = 3;
pub const TEAM_HOME: usize = 6;
pub const SCORE_VIS: usize = 9;
pub const SCORE_HOME: usize = 10;
/// Game length in outs.
pub const OUTS: usize = 11;
/// Forfeit information: "V"/"H"/"T", empty for games decided on the field.
pub const FORFEIT: usize = 14;
/// Line scores (runs per inning as a digit string).
pub const LINE_VIS: usize = 19;
pub const LINE_HOME: usize = 20;

/// A line must reach the home line score to be usable.
pub const MIN_FIELDS: usize = 21;
