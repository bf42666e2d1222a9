use async_trait::async_trait;
use sqlx::PgPool;
use tracker_core::domain::{models::Filter, ports::outbound::PreferencesRepository, TrackerError};

use super::repo_error::RepositoryError;

const FILTER_KEY: &str = "filter_type";
const ONBOARDING_KEY: &str = "onboarding_completed";

/// Key-value preference store in the `preferences` table.
pub struct PgPreferencesRepository {
    pool: PgPool,
}

impl PgPreferencesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let value = sqlx::query_scalar("SELECT value FROM preferences WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO preferences (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Decode a stored filter index; anything unreadable means `All`.
fn decode_filter(value: Option<&str>) -> Filter {
    value
        .and_then(|v| v.trim().parse::<i32>().ok())
        .map(Filter::from_index)
        .unwrap_or_default()
}

#[async_trait]
impl PreferencesRepository for PgPreferencesRepository {
    async fn get_filter(&self) -> Result<Filter, TrackerError> {
        let value = self.get(FILTER_KEY).await?;
        Ok(decode_filter(value.as_deref()))
    }

    async fn set_filter(&self, filter: Filter) -> Result<(), TrackerError> {
        self.set(FILTER_KEY, &filter.index().to_string()).await?;
        Ok(())
    }

    async fn onboarding_completed(&self) -> Result<bool, TrackerError> {
        let value = self.get(ONBOARDING_KEY).await?;
        Ok(value.as_deref() == Some("true"))
    }

    async fn set_onboarding_completed(&self) -> Result<(), TrackerError> {
        self.set(ONBOARDING_KEY, "true").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_stored_indexes() {
        assert_eq!(decode_filter(Some("2")), Filter::Completed);
        assert_eq!(decode_filter(Some(" 3 ")), Filter::Incomplete);
        assert_eq!(decode_filter(Some("7")), Filter::All);
        assert_eq!(decode_filter(Some("garbage")), Filter::All);
        assert_eq!(decode_filter(None), Filter::All);
    }
}
