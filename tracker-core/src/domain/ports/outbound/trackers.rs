use async_trait::async_trait;

use crate::domain::{
    models::{Tracker, TrackerId},
    TrackerError,
};

/// Outbound port for tracker persistence.
#[async_trait]
pub trait TrackerRepository: Send + Sync + 'static {
    async fn list_trackers(&self) -> Result<Vec<Tracker>, TrackerError>;

    async fn get_tracker(&self, id: &TrackerId) -> Result<Option<Tracker>, TrackerError>;

    /// Insert the tracker, or replace the stored one with the same id.
    async fn upsert_tracker(&self, tracker: &Tracker) -> Result<(), TrackerError>;

    /// Returns `false` if there was nothing to delete.
    async fn delete_tracker(&self, id: &TrackerId) -> Result<bool, TrackerError>;
}
