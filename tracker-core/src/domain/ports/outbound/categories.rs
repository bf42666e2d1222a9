//! Category repository port (outbound).

use async_trait::async_trait;

use crate::domain::{models::TrackerId, TrackerError};

/// A category title and the ids of the trackers attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMembership {
    pub title: String,
    pub tracker_ids: Vec<TrackerId>,
}

impl CategoryMembership {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tracker_ids: Vec::new(),
        }
    }
}

/// Outbound port for categories and tracker-to-category association.
///
/// A tracker is attached to at most one category. Reassigning a tracker is a
/// detach followed by an attach.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    async fn list_categories(&self) -> Result<Vec<CategoryMembership>, TrackerError>;

    /// Create a category. Creating an existing title is a no-op.
    async fn create_category(&self, title: &str) -> Result<(), TrackerError>;

    /// Delete a category, returning the ids of the trackers that were attached.
    ///
    /// Returns `None` if no category has this title.
    async fn delete_category(&self, title: &str) -> Result<Option<Vec<TrackerId>>, TrackerError>;

    /// Attach a tracker to an existing category, detaching it from any other.
    async fn attach_tracker(&self, title: &str, tracker_id: &TrackerId) -> Result<(), TrackerError>;

    /// Detach a tracker from whatever category holds it.
    async fn detach_tracker(&self, tracker_id: &TrackerId) -> Result<(), TrackerError>;
}
