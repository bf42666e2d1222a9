//! User preference storage port (outbound).
//!
//! Simple key-value settings: the last selected list filter and whether
//! onboarding has been shown.

use async_trait::async_trait;

use crate::domain::{models::Filter, TrackerError};

/// No-op implementation of PreferencesRepository.
///
/// Used when the service is created without a preference store; nothing is
/// remembered and defaults are returned.
#[async_trait]
impl PreferencesRepository for () {
    async fn get_filter(&self) -> Result<Filter, TrackerError> {
        Ok(Filter::default())
    }

    async fn set_filter(&self, _filter: Filter) -> Result<(), TrackerError> {
        Ok(())
    }

    async fn onboarding_completed(&self) -> Result<bool, TrackerError> {
        Ok(false)
    }

    async fn set_onboarding_completed(&self) -> Result<(), TrackerError> {
        Ok(())
    }
}

/// Outbound port for user preferences.
#[async_trait]
pub trait PreferencesRepository: Send + Sync + 'static {
    /// The last selected filter, or [`Filter::All`] if none was stored.
    async fn get_filter(&self) -> Result<Filter, TrackerError>;

    async fn set_filter(&self, filter: Filter) -> Result<(), TrackerError>;

    async fn onboarding_completed(&self) -> Result<bool, TrackerError>;

    /// Onboarding can only be completed, never reset.
    async fn set_onboarding_completed(&self) -> Result<(), TrackerError>;
}
