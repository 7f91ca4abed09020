use crate::config::LifecycleConfig;
use crate::constants::{events, system::DEFAULT_MAX_TRANSITION_ATTEMPTS};
use crate::error::{LifecycleOutcome, Result, SurveyError};
use crate::logging::{log_error, log_survey_operation};
use crate::models::{NewSurvey, Survey, SurveyPayload};
use crate::state_machine::{determine_target_status, SurveyEvent, SurveyStatus};
use crate::store::{StoreError, SurveyStore};
use crate::validation::{validate_survey_payload, ValidationResult};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Survey lifecycle orchestration over an ownership-scoped store.
///
/// Identifiers arrive as untrusted strings. One that does not parse as a
/// uuid is reported exactly like a well-formed uuid nobody visible owns.
pub struct SurveyLifecycle<S> {
    store: S,
    max_transition_attempts: u32,
}

impl<S: SurveyStore> SurveyLifecycle<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            max_transition_attempts: DEFAULT_MAX_TRANSITION_ATTEMPTS,
        }
    }

    pub fn with_config(store: S, config: &LifecycleConfig) -> Self {
        Self {
            store,
            max_transition_attempts: config.max_transition_attempts.max(1),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Check a payload without touching the store
    pub fn validate(&self, payload: &SurveyPayload) -> ValidationResult {
        validate_survey_payload(payload)
    }

    /// Create a draft survey owned by `owner_id`
    #[instrument(skip(self, payload))]
    pub async fn create(&self, owner_id: i64, payload: &SurveyPayload) -> Result<Survey> {
        let result = self.create_inner(owner_id, payload).await;
        match &result {
            Ok(survey) => log_survey_operation(
                events::SURVEY_CREATED,
                &survey.uuid.to_string(),
                owner_id,
                survey.status.as_str(),
                None,
            ),
            Err(err) => self.log_failure(events::SURVEY_CREATED, "", owner_id, err),
        }
        result
    }

    async fn create_inner(&self, owner_id: i64, payload: &SurveyPayload) -> Result<Survey> {
        validate_survey_payload(payload)?;
        let survey = self.store.create(NewSurvey::draft(owner_id, payload)).await?;
        Ok(survey)
    }

    /// Fetch an owned survey for editing
    #[instrument(skip(self))]
    pub async fn edit(&self, uuid: &str, owner_id: i64) -> Result<Survey> {
        let result = self.find_owned(uuid, owner_id).await;
        match &result {
            Ok(survey) => debug!(
                event = events::SURVEY_VIEWED,
                status = %survey.status,
                "Survey loaded for editing"
            ),
            Err(err) => self.log_failure(events::SURVEY_VIEWED, uuid, owner_id, err),
        }
        result
    }

    /// Overwrite name and description of an owned survey; status is untouched
    #[instrument(skip(self, payload))]
    pub async fn update(&self, uuid: &str, owner_id: i64, payload: &SurveyPayload) -> Result<Survey> {
        let result = self.update_inner(uuid, owner_id, payload).await;
        match &result {
            Ok(survey) => log_survey_operation(
                events::SURVEY_UPDATED,
                uuid,
                owner_id,
                survey.status.as_str(),
                None,
            ),
            Err(err) => self.log_failure(events::SURVEY_UPDATED, uuid, owner_id, err),
        }
        result
    }

    async fn update_inner(&self, uuid: &str, owner_id: i64, payload: &SurveyPayload) -> Result<Survey> {
        validate_survey_payload(payload)?;

        let mut survey = self.find_owned(uuid, owner_id).await?;
        survey.apply_payload(payload);

        match self.store.save(&survey).await {
            Ok(saved) => Ok(saved),
            // Deleted between the read and the write
            Err(StoreError::RecordMissing { .. }) => Err(SurveyError::not_found(uuid)),
            Err(err) => Err(err.into()),
        }
    }

    /// Delete an owned survey in any status
    #[instrument(skip(self))]
    pub async fn delete(&self, uuid: &str, owner_id: i64) -> Result<LifecycleOutcome> {
        let result = self.delete_inner(uuid, owner_id).await;
        match &result {
            Ok(outcome) => log_survey_operation(
                events::SURVEY_DELETED,
                uuid,
                owner_id,
                &outcome.to_string(),
                None,
            ),
            Err(err) => self.log_failure(events::SURVEY_DELETED, uuid, owner_id, err),
        }
        result
    }

    async fn delete_inner(&self, uuid: &str, owner_id: i64) -> Result<LifecycleOutcome> {
        let parsed = parse_uuid(uuid).ok_or_else(|| SurveyError::not_found(uuid))?;
        if self.store.delete_by_owner(parsed, owner_id).await? {
            Ok(LifecycleOutcome::Deleted)
        } else {
            Err(SurveyError::not_found(uuid))
        }
    }

    /// Start collecting responses: `draft` -> `ready`
    #[instrument(skip(self))]
    pub async fn run(&self, uuid: &str, owner_id: i64) -> Result<SurveyStatus> {
        self.transition(uuid, owner_id, SurveyEvent::Run, events::SURVEY_STARTED)
            .await
    }

    /// Stop collecting responses: `ready` -> `paused`
    #[instrument(skip(self))]
    pub async fn pause(&self, uuid: &str, owner_id: i64) -> Result<SurveyStatus> {
        self.transition(uuid, owner_id, SurveyEvent::Pause, events::SURVEY_PAUSED)
            .await
    }

    /// All surveys owned by `owner_id`, oldest first
    #[instrument(skip(self))]
    pub async fn list(&self, owner_id: i64) -> Result<Vec<Survey>> {
        let surveys = self.store.list_by_owner(owner_id).await?;
        debug!(event = events::SURVEY_LISTED, count = surveys.len(), "Listed surveys");
        Ok(surveys)
    }

    async fn transition(
        &self,
        uuid: &str,
        owner_id: i64,
        event: SurveyEvent,
        log_event: &str,
    ) -> Result<SurveyStatus> {
        let result = self.transition_inner(uuid, owner_id, event).await;
        match &result {
            Ok(status) => log_survey_operation(
                log_event,
                uuid,
                owner_id,
                &LifecycleOutcome::Ok.to_string(),
                Some(status.as_str()),
            ),
            Err(err) => self.log_failure(log_event, uuid, owner_id, err),
        }
        result
    }

    /// Read, decide, compare-and-set. A missed swap means another request
    /// changed or removed the survey in between, so the decision is redone
    /// against the fresh record.
    async fn transition_inner(
        &self,
        uuid: &str,
        owner_id: i64,
        event: SurveyEvent,
    ) -> Result<SurveyStatus> {
        let parsed = parse_uuid(uuid).ok_or_else(|| SurveyError::not_found(uuid))?;

        for attempt in 1..=self.max_transition_attempts {
            let survey = self
                .store
                .get_by_owner(parsed, owner_id)
                .await?
                .ok_or_else(|| SurveyError::not_found(uuid))?;

            let target = determine_target_status(survey.status, event)
                .map_err(|err| SurveyError::from_transition(uuid, err))?;

            if self
                .store
                .transition_status(parsed, owner_id, survey.status, target)
                .await?
            {
                return Ok(target);
            }

            debug!(
                attempt = attempt,
                expected = %survey.status,
                event = %event,
                "Status changed concurrently, re-reading survey"
            );
        }

        Err(SurveyError::Conflict {
            uuid: uuid.to_string(),
            attempts: self.max_transition_attempts,
        })
    }

    async fn find_owned(&self, uuid: &str, owner_id: i64) -> Result<Survey> {
        let parsed = parse_uuid(uuid).ok_or_else(|| SurveyError::not_found(uuid))?;
        self.store
            .get_by_owner(parsed, owner_id)
            .await?
            .ok_or_else(|| SurveyError::not_found(uuid))
    }

    fn log_failure(&self, operation: &str, uuid: &str, owner_id: i64, err: &SurveyError) {
        match err.outcome() {
            Some(outcome) => warn!(
                operation = operation,
                uuid = uuid,
                owner_id = owner_id,
                outcome = %outcome,
                "Survey operation refused"
            ),
            None if matches!(err, SurveyError::Validation(_)) => debug!(
                operation = operation,
                owner_id = owner_id,
                error = %err,
                "Survey payload rejected"
            ),
            None => log_error("survey_lifecycle", operation, &err.to_string(), Some(uuid)),
        }
    }
}

fn parse_uuid(uuid: &str) -> Option<Uuid> {
    Uuid::parse_str(uuid.trim()).ok()
}
