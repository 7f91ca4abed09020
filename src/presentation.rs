//! # Presentation Mapping
//!
//! Turns lifecycle results into the flash notice and navigation target a web
//! front end shows the user. All user-facing wording lives here so the
//! lifecycle itself stays free of presentation concerns.

use crate::error::SurveyError;
use crate::state_machine::required_source_status;
use serde::{Deserialize, Serialize};

/// Lifecycle operation a notice is reported for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Edit,
    Update,
    Delete,
    Run,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Where the user is sent after the operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "uuid", rename_all = "snake_case")]
pub enum Redirect {
    Dashboard,
    EditSurvey(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub redirect: Redirect,
}

impl Notice {
    fn success(message: String, redirect: Redirect) -> Self {
        Self {
            level: NoticeLevel::Success,
            message,
            redirect,
        }
    }

    fn warning(message: String, redirect: Redirect) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message,
            redirect,
        }
    }
}

/// Notice for a lifecycle result.
///
/// `uuid` is the identifier as the caller supplied it, or the newly assigned
/// one after a successful create. A successful edit renders the edit page
/// directly, so its notice carries an empty message.
pub fn notice_for<T>(operation: Operation, uuid: &str, result: &Result<T, SurveyError>) -> Notice {
    match result {
        Ok(_) => success_notice(operation, uuid),
        Err(err) => failure_notice(operation, uuid, err),
    }
}

fn success_notice(operation: Operation, uuid: &str) -> Notice {
    let edit = Redirect::EditSurvey(uuid.to_string());
    match operation {
        Operation::Create => {
            Notice::success(format!("Survey {uuid} successfully created!"), edit)
        }
        Operation::Edit => Notice::success(String::new(), edit),
        Operation::Update => Notice::success(
            format!("Survey {uuid} successfully updated!"),
            Redirect::Dashboard,
        ),
        Operation::Delete => Notice::success(
            format!("Survey \"{uuid}\" successfully removed!"),
            Redirect::Dashboard,
        ),
        Operation::Run => Notice::success(format!("Survey \"{uuid}\" is now running."), edit),
        Operation::Pause => Notice::success(format!("Survey \"{uuid}\" is now paused."), edit),
    }
}

fn failure_notice(operation: Operation, uuid: &str, err: &SurveyError) -> Notice {
    let edit = Redirect::EditSurvey(uuid.to_string());
    match err {
        SurveyError::NotFound { .. } => Notice::warning(
            format!("Survey \"{uuid}\" not found."),
            Redirect::Dashboard,
        ),
        SurveyError::InvalidStatus { event, .. } => {
            let expected = required_source_status(*event);
            Notice::warning(
                format!("Survey \"{uuid}\" invalid status, it should be \"{expected}\"."),
                edit,
            )
        }
        SurveyError::AlreadyRunning { .. } => {
            Notice::warning(format!("Survey \"{uuid}\" already running."), edit)
        }
        SurveyError::AlreadyPaused { .. } => {
            Notice::warning(format!("Survey \"{uuid}\" already paused."), edit)
        }
        SurveyError::Validation(errors) => {
            let redirect = match operation {
                Operation::Update => edit,
                _ => Redirect::Dashboard,
            };
            let message = errors
                .errors
                .first()
                .map(|e| e.reason.clone())
                .unwrap_or_default();
            Notice::warning(message, redirect)
        }
        SurveyError::Conflict { .. } => Notice::warning(
            format!("Survey \"{uuid}\" was changed by another request, please try again."),
            edit,
        ),
        SurveyError::Store(_) | SurveyError::Configuration(_) => Notice {
            level: NoticeLevel::Error,
            message: "Something went wrong.".to_string(),
            redirect: Redirect::Dashboard,
        },
    }
}
