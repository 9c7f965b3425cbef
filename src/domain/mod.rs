pub mod expansion;
pub mod models;

pub use expansion::expand_game;
pub use models::{GameLogRecord, Host, TeamGame, TeamResult};
