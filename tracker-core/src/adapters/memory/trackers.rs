use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::poisoned;
use crate::domain::{
    models::{Tracker, TrackerId},
    ports::outbound::TrackerRepository,
    TrackerError,
};

/// Tracker store backed by an in-memory HashMap.
#[derive(Clone, Default)]
pub struct InMemoryTrackerRepository {
    trackers: Arc<RwLock<HashMap<TrackerId, Tracker>>>,
}

impl InMemoryTrackerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add initial trackers to the repository.
    pub fn with_trackers(self, trackers: Vec<Tracker>) -> Self {
        if let Ok(mut stored) = self.trackers.write() {
            for tracker in trackers {
                stored.insert(tracker.id, tracker);
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.trackers.read().map(|t| t.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TrackerRepository for InMemoryTrackerRepository {
    async fn list_trackers(&self) -> Result<Vec<Tracker>, TrackerError> {
        let trackers = self.trackers.read().map_err(poisoned)?;
        Ok(trackers.values().cloned().collect())
    }

    async fn get_tracker(&self, id: &TrackerId) -> Result<Option<Tracker>, TrackerError> {
        let trackers = self.trackers.read().map_err(poisoned)?;
        Ok(trackers.get(id).cloned())
    }

    async fn upsert_tracker(&self, tracker: &Tracker) -> Result<(), TrackerError> {
        let mut trackers = self.trackers.write().map_err(poisoned)?;
        trackers.insert(tracker.id, tracker.clone());
        Ok(())
    }

    async fn delete_tracker(&self, id: &TrackerId) -> Result<bool, TrackerError> {
        let mut trackers = self.trackers.write().map_err(poisoned)?;
        Ok(trackers.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_replaces_by_id() {
        let repo = InMemoryTrackerRepository::new();
        let tracker = Tracker::new(TrackerId::generate(), "Read", "Study");

        repo.upsert_tracker(&tracker).await.unwrap();
        repo.upsert_tracker(&tracker.clone().pinned(true)).await.unwrap();

        assert_eq!(repo.len(), 1);
        let stored = repo.get_tracker(&tracker.id).await.unwrap().unwrap();
        assert!(stored.is_pinned);
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let tracker = Tracker::new(TrackerId::generate(), "Read", "Study");
        let repo = InMemoryTrackerRepository::new().with_trackers(vec![tracker.clone()]);

        assert!(repo.delete_tracker(&tracker.id).await.unwrap());
        assert!(!repo.delete_tracker(&tracker.id).await.unwrap());
        assert!(repo.is_empty());
    }
}
