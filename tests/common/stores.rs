//! Store test doubles that simulate concurrent requests

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use survey_core::store::StoreResult;
use survey_core::{InMemorySurveyStore, NewSurvey, Survey, SurveyStatus, SurveyStore};
use uuid::Uuid;

/// Lets another "request" win the first status transition.
///
/// On the first compare-and-set it applies the same transition itself before
/// forwarding the caller's swap, which then misses.
pub struct RacingStore {
    pub inner: InMemorySurveyStore,
    raced: AtomicBool,
}

impl RacingStore {
    pub fn new() -> Self {
        Self {
            inner: InMemorySurveyStore::new(),
            raced: AtomicBool::new(false),
        }
    }
}

/// Every compare-and-set misses, as if the record never stopped changing
pub struct ContendedStore {
    pub inner: InMemorySurveyStore,
    pub attempts: AtomicU32,
}

impl ContendedStore {
    pub fn new() -> Self {
        Self {
            inner: InMemorySurveyStore::new(),
            attempts: AtomicU32::new(0),
        }
    }
}

/// Deletes the record right before every write, as if another request removed it
pub struct VanishingStore {
    pub inner: InMemorySurveyStore,
}

/// Starts the survey right before every name/description write, as if a
/// concurrent run committed between the read and the save
pub struct StartingStore {
    pub inner: InMemorySurveyStore,
}

#[async_trait]
impl SurveyStore for RacingStore {
    async fn get_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<Option<Survey>> {
        self.inner.get_by_owner(uuid, owner_id).await
    }

    async fn list_by_owner(&self, owner_id: i64) -> StoreResult<Vec<Survey>> {
        self.inner.list_by_owner(owner_id).await
    }

    async fn create(&self, new_survey: NewSurvey) -> StoreResult<Survey> {
        self.inner.create(new_survey).await
    }

    async fn save(&self, survey: &Survey) -> StoreResult<Survey> {
        self.inner.save(survey).await
    }

    async fn delete_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<bool> {
        self.inner.delete_by_owner(uuid, owner_id).await
    }

    async fn transition_status(
        &self,
        uuid: Uuid,
        owner_id: i64,
        expected: SurveyStatus,
        next: SurveyStatus,
    ) -> StoreResult<bool> {
        if !self.raced.swap(true, Ordering::SeqCst) {
            self.inner
                .transition_status(uuid, owner_id, expected, next)
                .await?;
        }
        self.inner
            .transition_status(uuid, owner_id, expected, next)
            .await
    }
}

#[async_trait]
impl SurveyStore for ContendedStore {
    async fn get_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<Option<Survey>> {
        self.inner.get_by_owner(uuid, owner_id).await
    }

    async fn list_by_owner(&self, owner_id: i64) -> StoreResult<Vec<Survey>> {
        self.inner.list_by_owner(owner_id).await
    }

    async fn create(&self, new_survey: NewSurvey) -> StoreResult<Survey> {
        self.inner.create(new_survey).await
    }

    async fn save(&self, survey: &Survey) -> StoreResult<Survey> {
        self.inner.save(survey).await
    }

    async fn delete_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<bool> {
        self.inner.delete_by_owner(uuid, owner_id).await
    }

    async fn transition_status(
        &self,
        _uuid: Uuid,
        _owner_id: i64,
        _expected: SurveyStatus,
        _next: SurveyStatus,
    ) -> StoreResult<bool> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Ok(false)
    }
}

#[async_trait]
impl SurveyStore for VanishingStore {
    async fn get_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<Option<Survey>> {
        self.inner.get_by_owner(uuid, owner_id).await
    }

    async fn list_by_owner(&self, owner_id: i64) -> StoreResult<Vec<Survey>> {
        self.inner.list_by_owner(owner_id).await
    }

    async fn create(&self, new_survey: NewSurvey) -> StoreResult<Survey> {
        self.inner.create(new_survey).await
    }

    async fn save(&self, survey: &Survey) -> StoreResult<Survey> {
        self.inner.delete_by_owner(survey.uuid, survey.owner_id).await?;
        self.inner.save(survey).await
    }

    async fn delete_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<bool> {
        self.inner.delete_by_owner(uuid, owner_id).await
    }

    async fn transition_status(
        &self,
        uuid: Uuid,
        owner_id: i64,
        expected: SurveyStatus,
        next: SurveyStatus,
    ) -> StoreResult<bool> {
        self.inner.delete_by_owner(uuid, owner_id).await?;
        self.inner
            .transition_status(uuid, owner_id, expected, next)
            .await
    }
}

#[async_trait]
impl SurveyStore for StartingStore {
    async fn get_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<Option<Survey>> {
        self.inner.get_by_owner(uuid, owner_id).await
    }

    async fn list_by_owner(&self, owner_id: i64) -> StoreResult<Vec<Survey>> {
        self.inner.list_by_owner(owner_id).await
    }

    async fn create(&self, new_survey: NewSurvey) -> StoreResult<Survey> {
        self.inner.create(new_survey).await
    }

    async fn save(&self, survey: &Survey) -> StoreResult<Survey> {
        self.inner
            .transition_status(
                survey.uuid,
                survey.owner_id,
                SurveyStatus::Draft,
                SurveyStatus::Ready,
            )
            .await?;
        self.inner.save(survey).await
    }

    async fn delete_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<bool> {
        self.inner.delete_by_owner(uuid, owner_id).await
    }

    async fn transition_status(
        &self,
        uuid: Uuid,
        owner_id: i64,
        expected: SurveyStatus,
        next: SurveyStatus,
    ) -> StoreResult<bool> {
        self.inner
            .transition_status(uuid, owner_id, expected, next)
            .await
    }
}
