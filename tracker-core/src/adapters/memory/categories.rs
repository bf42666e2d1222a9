use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::poisoned;
use crate::domain::{
    models::TrackerId,
    ports::outbound::{CategoryMembership, CategoryRepository},
    TrackerError,
};

/// Category store backed by a title-ordered map.
#[derive(Clone, Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<BTreeMap<String, Vec<TrackerId>>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title of the category `tracker_id` is attached to, if any.
    pub fn category_of(&self, tracker_id: &TrackerId) -> Option<String> {
        let categories = self.categories.read().ok()?;
        categories
            .iter()
            .find(|(_, ids)| ids.contains(tracker_id))
            .map(|(title, _)| title.clone())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list_categories(&self) -> Result<Vec<CategoryMembership>, TrackerError> {
        let categories = self.categories.read().map_err(poisoned)?;
        Ok(categories
            .iter()
            .map(|(title, ids)| CategoryMembership {
                title: title.clone(),
                tracker_ids: ids.clone(),
            })
            .collect())
    }

    async fn create_category(&self, title: &str) -> Result<(), TrackerError> {
        let mut categories = self.categories.write().map_err(poisoned)?;
        categories.entry(title.to_string()).or_default();
        Ok(())
    }

    async fn delete_category(&self, title: &str) -> Result<Option<Vec<TrackerId>>, TrackerError> {
        let mut categories = self.categories.write().map_err(poisoned)?;
        Ok(categories.remove(title))
    }

    async fn attach_tracker(&self, title: &str, tracker_id: &TrackerId) -> Result<(), TrackerError> {
        let mut categories = self.categories.write().map_err(poisoned)?;
        if !categories.contains_key(title) {
            return Err(TrackerError::CategoryNotFound(title.to_string()));
        }

        for ids in categories.values_mut() {
            ids.retain(|id| id != tracker_id);
        }
        if let Some(ids) = categories.get_mut(title) {
            ids.push(*tracker_id);
        }
        Ok(())
    }

    async fn detach_tracker(&self, tracker_id: &TrackerId) -> Result<(), TrackerError> {
        let mut categories = self.categories.write().map_err(poisoned)?;
        for ids in categories.values_mut() {
            ids.retain(|id| id != tracker_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_is_idempotent_and_sorted() {
        let repo = InMemoryCategoryRepository::new();
        repo.create_category("Work").await.unwrap();
        repo.create_category("Home").await.unwrap();
        repo.create_category("Work").await.unwrap();

        let titles: Vec<String> = repo
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["Home", "Work"]);
    }

    #[tokio::test]
    async fn attach_moves_tracker_between_categories() {
        let repo = InMemoryCategoryRepository::new();
        let id = TrackerId::generate();
        repo.create_category("Work").await.unwrap();
        repo.create_category("Home").await.unwrap();

        repo.attach_tracker("Work", &id).await.unwrap();
        repo.attach_tracker("Home", &id).await.unwrap();

        assert_eq!(repo.category_of(&id).as_deref(), Some("Home"));
        let work = repo
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.title == "Work")
            .unwrap();
        assert!(work.tracker_ids.is_empty());
    }

    #[tokio::test]
    async fn attach_to_missing_category_fails() {
        let repo = InMemoryCategoryRepository::new();
        let result = repo.attach_tracker("Nowhere", &TrackerId::generate()).await;
        assert!(matches!(result, Err(TrackerError::CategoryNotFound(_))));
    }

    #[tokio::test]
    async fn delete_returns_attached_trackers() {
        let repo = InMemoryCategoryRepository::new();
        let id = TrackerId::generate();
        repo.create_category("Work").await.unwrap();
        repo.attach_tracker("Work", &id).await.unwrap();

        assert_eq!(repo.delete_category("Work").await.unwrap(), Some(vec![id]));
        assert_eq!(repo.delete_category("Work").await.unwrap(), None);
    }
}
