use chrono::NaiveDateTime;
use serde::Serialize;

/// One stored rating snapshot row. The date column holds either the literal
/// "start" (pre-season baseline) or an ISO date.
#[derive(Debug, Clone, Serialize)]
pub struct EloRow {
    #[serde(skip_serializing)]
    pub id: i32,
    pub teamid: String,
    pub date: String,
    pub rating: f64,
    #[serde(skip_serializing)]
    pub created_at: Option<NaiveDateTime>,
}
