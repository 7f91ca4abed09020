//! # Survey Lifecycle
//!
//! Create, edit, update, delete, run and pause operations over a
//! [`SurveyStore`](crate::store::SurveyStore). Each operation either returns
//! the survey (or its new status) or a typed [`SurveyError`](crate::error::SurveyError);
//! failures never mutate the stored record.

pub mod survey_lifecycle;

pub use survey_lifecycle::SurveyLifecycle;
