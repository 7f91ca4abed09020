//! Error types for the survey core.
//!
//! Every lifecycle operation returns a [`SurveyError`] on failure. Domain
//! failures map onto the tagged [`LifecycleOutcome`] consumed by the transport
//! layer; infrastructure failures (store, configuration) do not.

use crate::state_machine::{SurveyEvent, SurveyStatus, TransitionError};
use crate::store::StoreError;
use crate::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// No survey with this identifier is visible to the acting user. Raised
    /// both for absent records and for records owned by someone else.
    #[error("Survey \"{uuid}\" not found")]
    NotFound { uuid: String },

    #[error("Survey \"{uuid}\" cannot {event} from status {current}")]
    InvalidStatus {
        uuid: String,
        current: SurveyStatus,
        event: SurveyEvent,
    },

    #[error("Survey \"{uuid}\" is already running")]
    AlreadyRunning { uuid: String },

    #[error("Survey \"{uuid}\" is already paused")]
    AlreadyPaused { uuid: String },

    #[error("Survey \"{uuid}\" changed concurrently; gave up after {attempts} attempts")]
    Conflict { uuid: String, attempts: u32 },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Tagged result of a lifecycle operation, as seen by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleOutcome {
    Ok,
    NotFound,
    InvalidStatus,
    AlreadyRunning,
    AlreadyPaused,
    Deleted,
}

impl fmt::Display for LifecycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::InvalidStatus => write!(f, "INVALID_STATUS"),
            Self::AlreadyRunning => write!(f, "ALREADY_RUNNING"),
            Self::AlreadyPaused => write!(f, "ALREADY_PAUSED"),
            Self::Deleted => write!(f, "DELETED"),
        }
    }
}

impl SurveyError {
    pub(crate) fn not_found(uuid: impl Into<String>) -> Self {
        Self::NotFound { uuid: uuid.into() }
    }

    /// Attach the survey identifier to a transition failure.
    pub(crate) fn from_transition(uuid: impl Into<String>, err: TransitionError) -> Self {
        let uuid = uuid.into();
        match err {
            TransitionError::InvalidStatus { current, event } => Self::InvalidStatus {
                uuid,
                current,
                event,
            },
            TransitionError::AlreadyRunning => Self::AlreadyRunning { uuid },
            TransitionError::AlreadyPaused => Self::AlreadyPaused { uuid },
        }
    }

    /// The tagged outcome for domain failures, `None` for validation and
    /// infrastructure errors.
    pub fn outcome(&self) -> Option<LifecycleOutcome> {
        match self {
            Self::NotFound { .. } => Some(LifecycleOutcome::NotFound),
            Self::InvalidStatus { .. } => Some(LifecycleOutcome::InvalidStatus),
            Self::AlreadyRunning { .. } => Some(LifecycleOutcome::AlreadyRunning),
            Self::AlreadyPaused { .. } => Some(LifecycleOutcome::AlreadyPaused),
            Self::Validation(_)
            | Self::Conflict { .. }
            | Self::Store(_)
            | Self::Configuration(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<ValidationErrors> for SurveyError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, SurveyError>;
