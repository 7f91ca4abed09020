//! # Survey Store
//!
//! Ownership-scoped persistence for survey records. Every read and write is
//! keyed on both the survey uuid and the acting owner, so a record owned by
//! someone else is indistinguishable from a missing one.
//!
//! - [`InMemorySurveyStore`] - reference implementation backed by a concurrent map
//! - [`PgSurveyStore`] - PostgreSQL implementation over an SQLx pool

pub mod errors;
pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemorySurveyStore;
#[cfg(feature = "postgres")]
pub use postgres::PgSurveyStore;

use crate::models::{NewSurvey, Survey};
use crate::state_machine::SurveyStatus;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Repository interface for survey records
#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Find a survey by uuid, only if `owner_id` owns it
    async fn get_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<Option<Survey>>;

    /// All surveys owned by `owner_id`, oldest first
    async fn list_by_owner(&self, owner_id: i64) -> StoreResult<Vec<Survey>>;

    /// Insert a new survey, assigning its internal id and timestamps
    async fn create(&self, new_survey: NewSurvey) -> StoreResult<Survey>;

    /// Persist name and description of an existing owned survey and return
    /// the record as stored, including its refreshed `updated_at` and
    /// whatever status it holds at write time.
    ///
    /// Status is written only through [`SurveyStore::transition_status`].
    async fn save(&self, survey: &Survey) -> StoreResult<Survey>;

    /// Delete a survey if `owner_id` owns it; reports whether a row went away
    async fn delete_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<bool>;

    /// Compare-and-set the status of an owned survey.
    ///
    /// Returns `false` without writing when the survey is missing, not owned,
    /// or no longer in `expected`.
    async fn transition_status(
        &self,
        uuid: Uuid,
        owner_id: i64,
        expected: SurveyStatus,
        next: SurveyStatus,
    ) -> StoreResult<bool>;
}

#[async_trait]
impl<S: SurveyStore + ?Sized> SurveyStore for Arc<S> {
    async fn get_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<Option<Survey>> {
        (**self).get_by_owner(uuid, owner_id).await
    }

    async fn list_by_owner(&self, owner_id: i64) -> StoreResult<Vec<Survey>> {
        (**self).list_by_owner(owner_id).await
    }

    async fn create(&self, new_survey: NewSurvey) -> StoreResult<Survey> {
        (**self).create(new_survey).await
    }

    async fn save(&self, survey: &Survey) -> StoreResult<Survey> {
        (**self).save(survey).await
    }

    async fn delete_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<bool> {
        (**self).delete_by_owner(uuid, owner_id).await
    }

    async fn transition_status(
        &self,
        uuid: Uuid,
        owner_id: i64,
        expected: SurveyStatus,
        next: SurveyStatus,
    ) -> StoreResult<bool> {
        (**self)
            .transition_status(uuid, owner_id, expected, next)
            .await
    }
}
