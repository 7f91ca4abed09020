use super::{StoreError, StoreResult, SurveyStore};
use crate::models::{NewSurvey, Survey};
use crate::state_machine::SurveyStatus;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

/// Raw `surveys` row; status is stored as text
#[derive(Debug, FromRow)]
struct SurveyRow {
    id: i64,
    uuid: Uuid,
    user_id: i64,
    name: String,
    description: Option<String>,
    status: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl TryFrom<SurveyRow> for Survey {
    type Error = StoreError;

    fn try_from(row: SurveyRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<SurveyStatus>()
            .map_err(|_| StoreError::CorruptStatus {
                uuid: row.uuid,
                status: row.status.clone(),
            })?;

        Ok(Survey {
            id: row.id,
            uuid: row.uuid,
            owner_id: row.user_id,
            name: row.name,
            description: row.description,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// PostgreSQL-backed survey store.
///
/// Every statement carries `user_id` in its predicate; ownership is never
/// checked after the fact.
#[derive(Debug, Clone)]
pub struct PgSurveyStore {
    pool: PgPool,
}

impl PgSurveyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SurveyStore for PgSurveyStore {
    async fn get_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<Option<Survey>> {
        let row = sqlx::query_as::<_, SurveyRow>(
            r#"
            SELECT id, uuid, user_id, name, description, status, created_at, updated_at
            FROM surveys
            WHERE uuid = $1 AND user_id = $2
            "#,
        )
        .bind(uuid)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Survey::try_from).transpose()
    }

    async fn list_by_owner(&self, owner_id: i64) -> StoreResult<Vec<Survey>> {
        let rows = sqlx::query_as::<_, SurveyRow>(
            r#"
            SELECT id, uuid, user_id, name, description, status, created_at, updated_at
            FROM surveys
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Survey::try_from).collect()
    }

    async fn create(&self, new_survey: NewSurvey) -> StoreResult<Survey> {
        let row = sqlx::query_as::<_, SurveyRow>(
            r#"
            INSERT INTO surveys (uuid, user_id, name, description, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING id, uuid, user_id, name, description, status, created_at, updated_at
            "#,
        )
        .bind(new_survey.uuid)
        .bind(new_survey.owner_id)
        .bind(&new_survey.name)
        .bind(&new_survey.description)
        .bind(new_survey.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let duplicate =
                matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation());
            if duplicate {
                StoreError::DuplicateUuid {
                    uuid: new_survey.uuid,
                }
            } else {
                StoreError::Database(e)
            }
        })?;

        debug!(survey_id = row.id, uuid = %row.uuid, "Inserted survey row");
        Survey::try_from(row)
    }

    async fn save(&self, survey: &Survey) -> StoreResult<Survey> {
        let row = sqlx::query_as::<_, SurveyRow>(
            r#"
            UPDATE surveys
            SET name = $3, description = $4, updated_at = NOW()
            WHERE uuid = $1 AND user_id = $2
            RETURNING id, uuid, user_id, name, description, status, created_at, updated_at
            "#,
        )
        .bind(survey.uuid)
        .bind(survey.owner_id)
        .bind(&survey.name)
        .bind(&survey.description)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Survey::try_from)
            .transpose()?
            .ok_or(StoreError::RecordMissing { uuid: survey.uuid })
    }

    async fn delete_by_owner(&self, uuid: Uuid, owner_id: i64) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM surveys
            WHERE uuid = $1 AND user_id = $2
            "#,
        )
        .bind(uuid)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn transition_status(
        &self,
        uuid: Uuid,
        owner_id: i64,
        expected: SurveyStatus,
        next: SurveyStatus,
    ) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE surveys
            SET status = $4, updated_at = NOW()
            WHERE uuid = $1 AND user_id = $2 AND status = $3
            "#,
        )
        .bind(uuid)
        .bind(owner_id)
        .bind(expected.as_str())
        .bind(next.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
