#![allow(dead_code)]

use proptest::prelude::*;
use survey_core::{SurveyEvent, SurveyPayload, SurveyStatus};

/// Strategy for generating names inside the accepted 3..=127 character range
pub fn valid_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 ,.!?éü日本]{1,125}[a-zA-Z0-9]"
}

/// Strategy for generating names that are too short after trimming
pub fn short_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,2}"
}

/// Strategy for generating names longer than 127 characters
pub fn long_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9é]{128,200}"
}

/// Strategy for generating optional descriptions
pub fn description_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9 .,!?]{0,255}")
}

/// Strategy for generating valid SurveyPayload instances
pub fn valid_payload_strategy() -> impl Strategy<Value = SurveyPayload> {
    (valid_name_strategy(), description_strategy())
        .prop_map(|(name, description)| SurveyPayload { name, description })
}

pub fn status_strategy() -> impl Strategy<Value = SurveyStatus> {
    prop_oneof![
        Just(SurveyStatus::Draft),
        Just(SurveyStatus::Ready),
        Just(SurveyStatus::Paused),
    ]
}

pub fn event_strategy() -> impl Strategy<Value = SurveyEvent> {
    prop_oneof![Just(SurveyEvent::Run), Just(SurveyEvent::Pause)]
}
