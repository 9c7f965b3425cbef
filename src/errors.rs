use chrono::NaiveDate;

/// Contract errors raised by the rating engine. Application-level failures
/// (I/O, parsing, database) stay on `anyhow` with context.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EloError {
    #[error("invalid rating parameter: {name} must be positive, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("contest feed is not sorted: {current} follows {previous}")]
    UnsortedFeed {
        previous: NaiveDate,
        current: NaiveDate,
    },

    #[error("contest references unknown team: {team_id}")]
    UnknownTeam { team_id: String },

    #[error("self-play contest for team {team_id} on {date}")]
    SelfPlay { team_id: String, date: NaiveDate },
}
