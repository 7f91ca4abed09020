use super::{
    errors::{TransitionError, TransitionResult},
    events::SurveyEvent,
    states::SurveyStatus,
};

/// Determine the target status for an event applied to the current status.
///
/// Source-state checks run before the idempotency guards, so a survey in an
/// unrelated state reports `InvalidStatus` while one already sitting in the
/// event's target state reports the matching "already" error. `Run` is only
/// accepted from `Draft`; a paused survey cannot be run again.
pub fn determine_target_status(
    current: SurveyStatus,
    event: SurveyEvent,
) -> TransitionResult<SurveyStatus> {
    match (current, event) {
        (SurveyStatus::Draft, SurveyEvent::Run) => Ok(SurveyStatus::Ready),
        (SurveyStatus::Ready, SurveyEvent::Run) => Err(TransitionError::AlreadyRunning),

        (SurveyStatus::Ready, SurveyEvent::Pause) => Ok(SurveyStatus::Paused),
        (SurveyStatus::Paused, SurveyEvent::Pause) => Err(TransitionError::AlreadyPaused),

        (current, event) => Err(TransitionError::InvalidStatus { current, event }),
    }
}

/// The single status an event may be applied from
pub fn required_source_status(event: SurveyEvent) -> SurveyStatus {
    match event {
        SurveyEvent::Run => SurveyStatus::Draft,
        SurveyEvent::Pause => SurveyStatus::Ready,
    }
}
