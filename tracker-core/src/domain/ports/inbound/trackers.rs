use async_trait::async_trait;
use time::Date;

use crate::domain::{
    engine::ToggleAction,
    models::{
        Category, Filter, NewTracker, Statistics, Tracker, TrackerId, TrackerList,
        UpdateTracker,
    },
    TrackerError,
};

/// Inbound port for tracker list operations.
///
/// This trait defines the use cases that HTTP handlers can invoke.
/// It orchestrates the outbound ports (repositories, clock) to fulfill requests.
#[async_trait]
pub trait TrackerService: Send + Sync + 'static {
    // ========================================================================
    // Tracker List
    // ========================================================================

    /// Sections to render for `reference_date`.
    ///
    /// When `filter` is `None` the stored filter preference is used. The
    /// returned list carries the filter and date actually applied.
    async fn visible_sections(
        &self,
        reference_date: Date,
        filter: Option<Filter>,
    ) -> Result<TrackerList, TrackerError>;

    /// Mark or unmark `tracker_id` as done on `date`.
    ///
    /// Completing an irregular event detaches it from its category;
    /// un-completing it attaches it again.
    async fn toggle_completion(
        &self,
        tracker_id: &TrackerId,
        date: Date,
    ) -> Result<ToggleAction, TrackerError>;

    // ========================================================================
    // Categories
    // ========================================================================

    /// Categories ordered by title, each with trackers ordered by name.
    async fn list_categories(&self) -> Result<Vec<Category>, TrackerError>;

    async fn create_category(&self, title: &str) -> Result<(), TrackerError>;

    /// Delete a category together with its trackers and their completions.
    async fn delete_category(&self, title: &str) -> Result<(), TrackerError>;

    // ========================================================================
    // Trackers
    // ========================================================================

    async fn create_tracker(&self, request: NewTracker) -> Result<Tracker, TrackerError>;

    async fn update_tracker(
        &self,
        id: &TrackerId,
        request: UpdateTracker,
    ) -> Result<Tracker, TrackerError>;

    /// Delete a tracker and its completion records.
    async fn delete_tracker(&self, id: &TrackerId) -> Result<(), TrackerError>;

    async fn set_pinned(&self, id: &TrackerId, pinned: bool) -> Result<Tracker, TrackerError>;

    // ========================================================================
    // Statistics & Preferences
    // ========================================================================

    async fn statistics(&self) -> Result<Statistics, TrackerError>;

    async fn selected_filter(&self) -> Result<Filter, TrackerError>;

    async fn select_filter(&self, filter: Filter) -> Result<(), TrackerError>;

    async fn onboarding_completed(&self) -> Result<bool, TrackerError>;

    async fn complete_onboarding(&self) -> Result<(), TrackerError>;
}
