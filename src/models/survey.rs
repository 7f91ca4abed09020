use crate::state_machine::SurveyStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Survey owned by a single user
/// Maps to `surveys` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    /// Internal row identifier; never leaves the process
    #[serde(skip)]
    pub id: i64,
    pub uuid: Uuid,
    pub owner_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: SurveyStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// New Survey for creation (without generated fields)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSurvey {
    pub uuid: Uuid,
    pub owner_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: SurveyStatus,
}

/// User-supplied fields for create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl SurveyPayload {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }

    /// Trim surrounding whitespace and collapse a blank description to `None`
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        }
    }
}

impl NewSurvey {
    /// Draft survey for `owner_id` with a freshly generated uuid
    pub fn draft(owner_id: i64, payload: &SurveyPayload) -> Self {
        let payload = payload.normalized();
        Self {
            uuid: Uuid::new_v4(),
            owner_id,
            name: payload.name,
            description: payload.description,
            status: SurveyStatus::Draft,
        }
    }
}

impl Survey {
    /// Overwrite the content fields from a payload; status and identity are untouched
    pub fn apply_payload(&mut self, payload: &SurveyPayload) {
        let payload = payload.normalized();
        self.name = payload.name;
        self.description = payload.description;
    }

    pub fn is_owned_by(&self, owner_id: i64) -> bool {
        self.owner_id == owner_id
    }
}
