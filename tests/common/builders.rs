//! Test data builders for survey lifecycle tests

#![allow(dead_code)]

use survey_core::{Survey, SurveyLifecycle, SurveyPayload, SurveyStore};

pub const OWNER: i64 = 1001;
pub const OTHER_OWNER: i64 = 2002;

/// Builder pattern for creating test surveys through the lifecycle
pub struct SurveyBuilder {
    owner_id: i64,
    name: String,
    description: Option<String>,
}

impl SurveyBuilder {
    pub fn new() -> Self {
        Self {
            owner_id: OWNER,
            name: "Customer satisfaction".to_string(),
            description: Some("Collected after every support ticket".to_string()),
        }
    }

    pub fn owned_by(mut self, owner_id: i64) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn without_description(mut self) -> Self {
        self.description = None;
        self
    }

    pub fn payload(&self) -> SurveyPayload {
        SurveyPayload::new(self.name.clone(), self.description.clone())
    }

    pub async fn create<S: SurveyStore>(self, lifecycle: &SurveyLifecycle<S>) -> Survey {
        lifecycle
            .create(self.owner_id, &self.payload())
            .await
            .expect("Failed to create test survey")
    }
}

impl Default for SurveyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn payload(name: &str, description: Option<&str>) -> SurveyPayload {
    SurveyPayload::new(name, description.map(str::to_string))
}
