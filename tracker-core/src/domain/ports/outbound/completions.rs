use async_trait::async_trait;

use crate::domain::{
    models::{CompletionRecord, CompletionSet, TrackerId},
    TrackerError,
};

/// Outbound port for completion records.
///
/// Adding a record that already exists and removing one that doesn't are
/// both no-ops.
#[async_trait]
pub trait CompletionRepository: Send + Sync + 'static {
    async fn list_completions(&self) -> Result<CompletionSet, TrackerError>;

    async fn add_completion(&self, record: &CompletionRecord) -> Result<(), TrackerError>;

    async fn remove_completion(&self, record: &CompletionRecord) -> Result<(), TrackerError>;

    /// Delete every record of a tracker, returning how many were removed.
    async fn delete_for_tracker(&self, tracker_id: &TrackerId) -> Result<usize, TrackerError>;
}
