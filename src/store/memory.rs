use super::{StoreError, StoreResult, SurveyStore};
use crate::models::{NewSurvey, Survey};
use crate::state_machine::SurveyStatus;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::{mapref::entry::Entry, DashMap};
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;
use uuid::Uuid;

/// In-process survey store.
///
/// Records are keyed by uuid; each read-modify-write happens under the map's
/// per-entry lock, which gives the single-record atomicity the lifecycle
/// relies on for compare-and-set transitions.
#[derive(Debug)]
pub struct InMemorySurveyStore {
    surveys: DashMap<Uuid, Survey>,
    next_id: AtomicI64,
}

impl InMemorySurveyStore {
    pub fn new() -> Self {
        Self {
            surveys: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored surveys across all owners
    pub fn len(&self) -> usize {
        self.surveys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surveys.is_empty()
    }
}

impl Default for InMemorySurveyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SurveyStore for InMemorySurveyStore {
    async fn get_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<Option<Survey>> {
        Ok(self
            .surveys
            .get(&uuid)
            .filter(|survey| survey.is_owned_by(owner_id))
            .map(|survey| survey.value().clone()))
    }

    async fn list_by_owner(&self, owner_id: i64) -> StoreResult<Vec<Survey>> {
        let mut surveys: Vec<Survey> = self
            .surveys
            .iter()
            .filter(|entry| entry.is_owned_by(owner_id))
            .map(|entry| entry.value().clone())
            .collect();
        surveys.sort_by_key(|survey| survey.id);
        Ok(surveys)
    }

    async fn create(&self, new_survey: NewSurvey) -> StoreResult<Survey> {
        match self.surveys.entry(new_survey.uuid) {
            Entry::Occupied(_) => Err(StoreError::DuplicateUuid {
                uuid: new_survey.uuid,
            }),
            Entry::Vacant(slot) => {
                let now = Utc::now().naive_utc();
                let survey = Survey {
                    id: self.next_id.fetch_add(1, Ordering::Relaxed),
                    uuid: new_survey.uuid,
                    owner_id: new_survey.owner_id,
                    name: new_survey.name,
                    description: new_survey.description,
                    status: new_survey.status,
                    created_at: now,
                    updated_at: now,
                };
                slot.insert(survey.clone());
                debug!(survey_id = survey.id, uuid = %survey.uuid, "Stored survey in memory");
                Ok(survey)
            }
        }
    }

    async fn save(&self, survey: &Survey) -> StoreResult<Survey> {
        match self.surveys.get_mut(&survey.uuid) {
            Some(mut stored) if stored.is_owned_by(survey.owner_id) => {
                stored.name = survey.name.clone();
                stored.description = survey.description.clone();
                stored.updated_at = Utc::now().naive_utc();
                Ok(stored.value().clone())
            }
            _ => Err(StoreError::RecordMissing { uuid: survey.uuid }),
        }
    }

    async fn delete_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<bool> {
        Ok(self
            .surveys
            .remove_if(&uuid, |_, survey| survey.is_owned_by(owner_id))
            .is_some())
    }

    async fn transition_status(
        &self,
        uuid: Uuid,
        owner_id: i64,
        expected: SurveyStatus,
        next: SurveyStatus,
    ) -> StoreResult<bool> {
        match self.surveys.get_mut(&uuid) {
            Some(mut stored) if stored.is_owned_by(owner_id) && stored.status == expected => {
                stored.status = next;
                stored.updated_at = Utc::now().naive_utc();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
