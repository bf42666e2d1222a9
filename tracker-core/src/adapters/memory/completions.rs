use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::poisoned;
use crate::domain::{
    models::{CompletionRecord, CompletionSet, TrackerId},
    ports::outbound::CompletionRepository,
    TrackerError,
};

/// Completion store backed by a [`CompletionSet`].
#[derive(Clone, Default)]
pub struct InMemoryCompletionRepository {
    completions: Arc<RwLock<CompletionSet>>,
}

impl InMemoryCompletionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(self, records: Vec<CompletionRecord>) -> Self {
        if let Ok(mut stored) = self.completions.write() {
            for record in records {
                stored.insert(record);
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.completions.read().map(|c| c.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CompletionRepository for InMemoryCompletionRepository {
    async fn list_completions(&self) -> Result<CompletionSet, TrackerError> {
        let completions = self.completions.read().map_err(poisoned)?;
        Ok(completions.clone())
    }

    async fn add_completion(&self, record: &CompletionRecord) -> Result<(), TrackerError> {
        let mut completions = self.completions.write().map_err(poisoned)?;
        completions.insert(*record);
        Ok(())
    }

    async fn remove_completion(&self, record: &CompletionRecord) -> Result<(), TrackerError> {
        let mut completions = self.completions.write().map_err(poisoned)?;
        completions.remove(record);
        Ok(())
    }

    async fn delete_for_tracker(&self, tracker_id: &TrackerId) -> Result<usize, TrackerError> {
        let mut completions = self.completions.write().map_err(poisoned)?;
        let remaining: CompletionSet = completions
            .iter()
            .filter(|record| record.tracker_id != *tracker_id)
            .copied()
            .collect();
        let removed = completions.len() - remaining.len();
        *completions = remaining;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[tokio::test]
    async fn delete_for_tracker_keeps_others() {
        let a = TrackerId::generate();
        let b = TrackerId::generate();
        let repo = InMemoryCompletionRepository::new().with_records(vec![
            CompletionRecord::new(a, date!(2024 - 03 - 04)),
            CompletionRecord::new(a, date!(2024 - 03 - 05)),
            CompletionRecord::new(b, date!(2024 - 03 - 05)),
        ]);

        assert_eq!(repo.delete_for_tracker(&a).await.unwrap(), 2);
        let remaining = repo.list_completions().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert!(remaining.contains(&b, date!(2024 - 03 - 05)));
    }

    #[tokio::test]
    async fn add_twice_keeps_one_record() {
        let repo = InMemoryCompletionRepository::new();
        let record = CompletionRecord::new(TrackerId::generate(), date!(2024 - 03 - 04));

        repo.add_completion(&record).await.unwrap();
        repo.add_completion(&record).await.unwrap();
        assert_eq!(repo.len(), 1);

        repo.remove_completion(&record).await.unwrap();
        repo.remove_completion(&record).await.unwrap();
        assert!(repo.is_empty());
    }
}
