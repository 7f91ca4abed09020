use serde::{Deserialize, Serialize};
use std::fmt;

/// Survey lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStatus {
    /// Initial state when the survey is created
    Draft,
    /// Survey is running and collecting responses
    Ready,
    /// Survey was paused while running
    Paused,
}

impl SurveyStatus {
    /// Check if the survey is collecting responses
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Ready => "ready",
            Self::Paused => "paused",
        }
    }
}

impl fmt::Display for SurveyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SurveyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "ready" => Ok(Self::Ready),
            "paused" => Ok(Self::Paused),
            _ => Err(format!("Invalid survey status: {s}")),
        }
    }
}

/// Default state for new surveys
impl Default for SurveyStatus {
    fn default() -> Self {
        Self::Draft
    }
}
