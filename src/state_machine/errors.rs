use super::{events::SurveyEvent, states::SurveyStatus};
use thiserror::Error;

/// Why a status transition was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Invalid status transition: cannot {event} from {current}")]
    InvalidStatus {
        current: SurveyStatus,
        event: SurveyEvent,
    },

    #[error("Survey is already running")]
    AlreadyRunning,

    #[error("Survey is already paused")]
    AlreadyPaused,
}

pub type TransitionResult<T> = Result<T, TransitionError>;
