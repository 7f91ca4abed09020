//! # System Constants
//!
//! Operational boundaries of the survey core: field limits, defaults and
//! lifecycle event identifiers used in structured logs.

// Re-export state types for convenience
pub use crate::state_machine::SurveyStatus;

/// Survey field limits
pub mod fields {
    /// Minimum survey name length, in characters
    pub const NAME_MIN_LENGTH: usize = 3;
    /// Maximum survey name length, in characters
    pub const NAME_MAX_LENGTH: usize = 127;
}

/// Lifecycle events emitted to the structured log
pub mod events {
    pub const SURVEY_CREATED: &str = "survey.created";
    pub const SURVEY_VIEWED: &str = "survey.viewed";
    pub const SURVEY_UPDATED: &str = "survey.updated";
    pub const SURVEY_DELETED: &str = "survey.deleted";
    pub const SURVEY_STARTED: &str = "survey.started";
    pub const SURVEY_PAUSED: &str = "survey.paused";
    pub const SURVEY_LISTED: &str = "survey.listed";
}

/// System-wide defaults
pub mod system {
    /// Compare-and-set attempts before a status transition reports a conflict
    pub const DEFAULT_MAX_TRANSITION_ATTEMPTS: u32 = 3;
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    pub const DEFAULT_ACQUIRE_TIMEOUT_SECONDS: u64 = 5;
    pub const DEFAULT_CONFIG_PATH: &str = "config/survey.toml";
    pub const ENV_PREFIX: &str = "SURVEY";
}
