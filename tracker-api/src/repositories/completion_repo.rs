use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;
use tracker_core::domain::{
    models::{CompletionRecord, CompletionSet, TrackerId},
    ports::outbound::CompletionRepository,
    TrackerError,
};
use uuid::Uuid;

use super::repo_error::RepositoryError;

pub struct PgCompletionRepository {
    pool: PgPool,
}

impl PgCompletionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct DatabaseCompletion {
    tracker_id: Uuid,
    completed_on: Date,
}

#[async_trait]
impl CompletionRepository for PgCompletionRepository {
    async fn list_completions(&self) -> Result<CompletionSet, TrackerError> {
        let rows = sqlx::query_as::<_, DatabaseCompletion>(
            "SELECT tracker_id, completed_on FROM completions",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(rows
            .into_iter()
            .map(|row| CompletionRecord::new(row.tracker_id.into(), row.completed_on))
            .collect())
    }

    async fn add_completion(&self, record: &CompletionRecord) -> Result<(), TrackerError> {
        sqlx::query(
            r#"
            INSERT INTO completions (tracker_id, completed_on)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(record.tracker_id.as_uuid())
        .bind(record.date)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn remove_completion(&self, record: &CompletionRecord) -> Result<(), TrackerError> {
        sqlx::query("DELETE FROM completions WHERE tracker_id = $1 AND completed_on = $2")
            .bind(record.tracker_id.as_uuid())
            .bind(record.date)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn delete_for_tracker(&self, tracker_id: &TrackerId) -> Result<usize, TrackerError> {
        let result = sqlx::query("DELETE FROM completions WHERE tracker_id = $1")
            .bind(tracker_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result.rows_affected() as usize)
    }
}
