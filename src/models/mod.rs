//! # Models
//!
//! Survey records and the payloads used to create and edit them.

pub mod survey;

pub use survey::{NewSurvey, Survey, SurveyPayload};
