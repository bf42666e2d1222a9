use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::poisoned;
use crate::domain::{models::Filter, ports::outbound::PreferencesRepository, TrackerError};

#[derive(Debug, Default)]
struct Preferences {
    filter: Option<Filter>,
    onboarding_completed: bool,
}

/// Preference store kept in process memory.
#[derive(Clone, Default)]
pub struct InMemoryPreferencesRepository {
    preferences: Arc<RwLock<Preferences>>,
}

impl InMemoryPreferencesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferencesRepository for InMemoryPreferencesRepository {
    async fn get_filter(&self) -> Result<Filter, TrackerError> {
        let preferences = self.preferences.read().map_err(poisoned)?;
        Ok(preferences.filter.unwrap_or_default())
    }

    async fn set_filter(&self, filter: Filter) -> Result<(), TrackerError> {
        let mut preferences = self.preferences.write().map_err(poisoned)?;
        preferences.filter = Some(filter);
        Ok(())
    }

    async fn onboarding_completed(&self) -> Result<bool, TrackerError> {
        let preferences = self.preferences.read().map_err(poisoned)?;
        Ok(preferences.onboarding_completed)
    }

    async fn set_onboarding_completed(&self) -> Result<(), TrackerError> {
        let mut preferences = self.preferences.write().map_err(poisoned)?;
        preferences.onboarding_completed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn remembers_filter_and_onboarding() {
        let repo = InMemoryPreferencesRepository::new();
        assert_eq!(repo.get_filter().await.unwrap(), Filter::All);
        assert!(!repo.onboarding_completed().await.unwrap());

        repo.set_filter(Filter::Incomplete).await.unwrap();
        repo.set_onboarding_completed().await.unwrap();

        assert_eq!(repo.get_filter().await.unwrap(), Filter::Incomplete);
        assert!(repo.onboarding_completed().await.unwrap());
    }
}
