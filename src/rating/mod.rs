pub mod elo;
pub mod types;

pub use elo::compute_ratings;
pub use types::{
    ContestRecord, Outcome, RatingSnapshotRow, RatingValue, SnapshotDate, SnapshotPolicy, TeamId,
};
