use async_trait::async_trait;
use sqlx::PgPool;
use tracker_core::domain::{
    models::TrackerId,
    ports::outbound::{CategoryMembership, CategoryRepository},
    TrackerError,
};
use uuid::Uuid;

use super::repo_error::RepositoryError;

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct DatabaseMembership {
    title: String,
    tracker_id: Option<Uuid>,
}

/// Fold title-ordered join rows into one membership per category.
fn group_memberships(rows: Vec<DatabaseMembership>) -> Vec<CategoryMembership> {
    let mut memberships: Vec<CategoryMembership> = Vec::new();

    for row in rows {
        let is_same = memberships
            .last()
            .is_some_and(|current| current.title == row.title);
        if !is_same {
            memberships.push(CategoryMembership::new(row.title));
        }
        if let (Some(current), Some(id)) = (memberships.last_mut(), row.tracker_id) {
            current.tracker_ids.push(TrackerId::from(id));
        }
    }

    memberships
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_categories(&self) -> Result<Vec<CategoryMembership>, TrackerError> {
        let rows = sqlx::query_as::<_, DatabaseMembership>(
            r#"
            SELECT c.title, ct.tracker_id
            FROM categories c
            LEFT JOIN category_trackers ct ON ct.category_title = c.title
            ORDER BY c.title, ct.attached_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(group_memberships(rows))
    }

    async fn create_category(&self, title: &str) -> Result<(), TrackerError> {
        sqlx::query(
            r#"
            INSERT INTO categories (title)
            VALUES ($1)
            ON CONFLICT (title) DO NOTHING
            "#,
        )
        .bind(title)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn delete_category(&self, title: &str) -> Result<Option<Vec<TrackerId>>, TrackerError> {
        let mut tx = self.pool.begin().await.map_err(RepositoryError::from)?;

        let attached: Vec<Uuid> = sqlx::query_scalar(
            r#"
            SELECT tracker_id
            FROM category_trackers
            WHERE category_title = $1
            ORDER BY attached_at
            "#,
        )
        .bind(title)
        .fetch_all(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        let deleted = sqlx::query("DELETE FROM categories WHERE title = $1")
            .bind(title)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        if deleted.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(attached.into_iter().map(TrackerId::from).collect()))
    }

    async fn attach_tracker(&self, title: &str, tracker_id: &TrackerId) -> Result<(), TrackerError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM categories WHERE title = $1)")
                .bind(title)
                .fetch_one(&self.pool)
                .await
                .map_err(RepositoryError::from)?;

        if !exists {
            return Err(TrackerError::CategoryNotFound(title.to_string()));
        }

        sqlx::query(
            r#"
            INSERT INTO category_trackers (tracker_id, category_title)
            VALUES ($1, $2)
            ON CONFLICT (tracker_id) DO UPDATE SET
                category_title = EXCLUDED.category_title,
                attached_at = NOW()
            "#,
        )
        .bind(tracker_id.as_uuid())
        .bind(title)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn detach_tracker(&self, tracker_id: &TrackerId) -> Result<(), TrackerError> {
        sqlx::query("DELETE FROM category_trackers WHERE tracker_id = $1")
            .bind(tracker_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_join_rows_by_title() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let rows = vec![
            DatabaseMembership {
                title: "Empty".to_string(),
                tracker_id: None,
            },
            DatabaseMembership {
                title: "Work".to_string(),
                tracker_id: Some(a),
            },
            DatabaseMembership {
                title: "Work".to_string(),
                tracker_id: Some(b),
            },
        ];

        let memberships = group_memberships(rows);

        assert_eq!(memberships.len(), 2);
        assert_eq!(memberships[0], CategoryMembership::new("Empty"));
        assert_eq!(
            memberships[1].tracker_ids,
            vec![TrackerId::from(a), TrackerId::from(b)]
        );
    }
}
