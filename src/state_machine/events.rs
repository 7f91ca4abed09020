use serde::{Deserialize, Serialize};
use std::fmt;

/// Events that can trigger survey status transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyEvent {
    /// Start collecting responses
    Run,
    /// Stop collecting responses
    Pause,
}

impl SurveyEvent {
    /// Get a string representation of the event type for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Run => "run",
            Self::Pause => "pause",
        }
    }
}

impl fmt::Display for SurveyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_type())
    }
}
