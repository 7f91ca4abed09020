//! Input validation for survey payloads
//!
//! Validation runs before any store call and collects every field error
//! instead of stopping at the first one. Names are measured in characters
//! after surrounding whitespace is trimmed, matching how payloads are
//! normalized before they are persisted.

use crate::constants::fields::{NAME_MAX_LENGTH, NAME_MIN_LENGTH};
use crate::models::SurveyPayload;
use serde::Serialize;
use std::fmt;

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

/// All field errors found in one payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors reported for the given field
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    fn push(&mut self, field: &'static str, reason: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            reason: reason.into(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.reason))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

pub type ValidationResult = Result<(), ValidationErrors>;

/// Validates a create/update payload
pub fn validate_survey_payload(payload: &SurveyPayload) -> ValidationResult {
    let mut errors = ValidationErrors::default();

    let name = payload.name.trim();
    let length = name.chars().count();

    if length == 0 {
        errors.push("name", "The name field is required.");
    } else if length < NAME_MIN_LENGTH {
        errors.push(
            "name",
            format!("The name must be at least {NAME_MIN_LENGTH} characters."),
        );
    } else if length > NAME_MAX_LENGTH {
        errors.push(
            "name",
            format!("The name may not be greater than {NAME_MAX_LENGTH} characters."),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
