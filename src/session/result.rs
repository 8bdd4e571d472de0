use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of one verification, kept in the in-memory session history.
/// Nothing here is persisted; the history lives and dies with the run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrillOutcome {
    pub lesson_id: u32,
    pub drill_index: usize,
    pub title: Option<String>,
    pub correct: bool,
    pub timestamp: DateTime<Utc>,
}

impl DrillOutcome {
    pub fn new(lesson_id: u32, drill_index: usize, title: Option<String>, correct: bool) -> Self {
        Self {
            lesson_id,
            drill_index,
            title,
            correct,
            timestamp: Utc::now(),
        }
    }
}
