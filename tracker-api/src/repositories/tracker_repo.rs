use async_trait::async_trait;
use sqlx::PgPool;
use tracker_core::domain::{
    models::{Schedule, Tracker, TrackerId, WeekDay},
    ports::outbound::TrackerRepository,
    TrackerError,
};
use uuid::Uuid;

use super::repo_error::RepositoryError;

pub struct PgTrackerRepository {
    pool: PgPool,
}

impl PgTrackerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DatabaseTracker {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub emoji: String,
    /// Gregorian weekday numbers, Sunday = 1.
    pub schedule: Vec<i16>,
    pub is_pinned: bool,
    pub category: String,
}

impl From<DatabaseTracker> for Tracker {
    fn from(row: DatabaseTracker) -> Self {
        let schedule: Schedule = row
            .schedule
            .iter()
            .filter_map(|n| u8::try_from(*n).ok().and_then(WeekDay::from_number))
            .collect();

        Tracker::new(row.id, row.name, row.category)
            .with_schedule(schedule)
            .with_appearance(row.color, row.emoji)
            .pinned(row.is_pinned)
    }
}

fn schedule_numbers(schedule: &Schedule) -> Vec<i16> {
    schedule.days().map(|day| i16::from(day.number())).collect()
}

#[async_trait]
impl TrackerRepository for PgTrackerRepository {
    async fn list_trackers(&self) -> Result<Vec<Tracker>, TrackerError> {
        let rows = sqlx::query_as::<_, DatabaseTracker>(
            r#"
            SELECT id, name, color, emoji, schedule, is_pinned, category
            FROM trackers
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(rows.into_iter().map(Tracker::from).collect())
    }

    async fn get_tracker(&self, id: &TrackerId) -> Result<Option<Tracker>, TrackerError> {
        let row = sqlx::query_as::<_, DatabaseTracker>(
            r#"
            SELECT id, name, color, emoji, schedule, is_pinned, category
            FROM trackers
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(Tracker::from))
    }

    async fn upsert_tracker(&self, tracker: &Tracker) -> Result<(), TrackerError> {
        sqlx::query(
            r#"
            INSERT INTO trackers (id, name, color, emoji, schedule, is_pinned, category)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                color = EXCLUDED.color,
                emoji = EXCLUDED.emoji,
                schedule = EXCLUDED.schedule,
                is_pinned = EXCLUDED.is_pinned,
                category = EXCLUDED.category
            "#,
        )
        .bind(tracker.id.as_uuid())
        .bind(&tracker.name)
        .bind(&tracker.color)
        .bind(&tracker.emoji)
        .bind(schedule_numbers(&tracker.schedule))
        .bind(tracker.is_pinned)
        .bind(&tracker.category)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn delete_tracker(&self, id: &TrackerId) -> Result<bool, TrackerError> {
        let result = sqlx::query("DELETE FROM trackers WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_survives_database_encoding() {
        let schedule = Schedule::new([WeekDay::Sunday, WeekDay::Wednesday]);
        let numbers = schedule_numbers(&schedule);
        assert_eq!(numbers.len(), 2);
        assert!(numbers.contains(&1));
        assert!(numbers.contains(&4));

        let row = DatabaseTracker {
            id: Uuid::new_v4(),
            name: "Swim".to_string(),
            color: "#33CF69".to_string(),
            emoji: "🏊".to_string(),
            schedule: numbers,
            is_pinned: true,
            category: "Health".to_string(),
        };
        let tracker = Tracker::from(row);
        assert_eq!(tracker.schedule, schedule);
        assert!(tracker.is_pinned);
    }

    #[test]
    fn out_of_range_weekdays_are_dropped() {
        let row = DatabaseTracker {
            id: Uuid::new_v4(),
            name: "Odd".to_string(),
            color: String::new(),
            emoji: String::new(),
            schedule: vec![0, 2, 9, -1],
            is_pinned: false,
            category: "Misc".to_string(),
        };
        let tracker = Tracker::from(row);
        assert_eq!(tracker.schedule, Schedule::new([WeekDay::Monday]));
    }
}
