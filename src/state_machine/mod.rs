// State machine module for the survey lifecycle
//
// Status transitions are decided by a pure function over (status, event) so
// they can be checked without a store; persistence happens in the lifecycle
// layer through a compare-and-set on the expected status.

pub mod errors;
pub mod events;
pub mod states;
pub mod survey_state_machine;

// Re-export main types for convenient access
pub use errors::{TransitionError, TransitionResult};
pub use events::SurveyEvent;
pub use states::SurveyStatus;
pub use survey_state_machine::{determine_target_status, required_source_status};
