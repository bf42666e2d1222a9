use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use async_trait::async_trait;
use itertools::Itertools;
use time::Date;
use tokio::sync::Mutex;

use crate::domain::{
    engine::{compute_statistics, compute_visible_sections, toggle_completion, ToggleAction},
    models::{
        Category, CompletionRecord, CompletionSet, Filter, NewTracker, Statistics, Tracker,
        TrackerId, TrackerList, UpdateTracker,
    },
    ports::{
        inbound::TrackerService,
        outbound::{
            CategoryRepository, Clock, CompletionRepository, PreferencesRepository, SystemClock,
            TrackerRepository,
        },
    },
    TrackerError,
};

/// Implementation of the TrackerService inbound port.
///
/// Fetches a snapshot from the repositories, runs the pure engine over it and
/// writes the resulting changes back. Every store is injected; the
/// preference store defaults to the no-op `()` repository.
///
/// Operations that read the stores and write back a decision based on that
/// read hold `write_lock` for their whole duration.
pub struct TrackerServiceImpl<C, T, R, P = ()> {
    categories: Arc<C>,
    trackers: Arc<T>,
    completions: Arc<R>,
    preferences: Arc<P>,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

impl<C, T, R> TrackerServiceImpl<C, T, R, ()> {
    pub fn new(categories: Arc<C>, trackers: Arc<T>, completions: Arc<R>) -> Self {
        Self {
            categories,
            trackers,
            completions,
            preferences: Arc::new(()),
            clock: Arc::new(SystemClock),
            write_lock: Mutex::new(()),
        }
    }
}

impl<C, T, R, P> TrackerServiceImpl<C, T, R, P> {
    pub fn with_preferences<Q>(self, preferences: Arc<Q>) -> TrackerServiceImpl<C, T, R, Q> {
        TrackerServiceImpl {
            categories: self.categories,
            trackers: self.trackers,
            completions: self.completions,
            preferences,
            clock: self.clock,
            write_lock: self.write_lock,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

impl<C, T, R, P> TrackerServiceImpl<C, T, R, P>
where
    C: CategoryRepository,
    T: TrackerRepository,
    R: CompletionRepository,
    P: PreferencesRepository,
{
    /// Join category memberships with tracker data.
    ///
    /// Categories come out ordered by title, trackers by name. Memberships
    /// pointing at unknown trackers are skipped.
    async fn load_categories(&self) -> Result<(Vec<Category>, Vec<Tracker>), TrackerError> {
        let memberships = self.categories.list_categories().await?;
        let trackers = self.trackers.list_trackers().await?;
        let by_id: HashMap<TrackerId, &Tracker> = trackers.iter().map(|t| (t.id, t)).collect();

        let categories = memberships
            .into_iter()
            .sorted_by(|a, b| a.title.cmp(&b.title))
            .map(|membership| {
                let members = membership
                    .tracker_ids
                    .iter()
                    .filter_map(|id| {
                        let tracker = by_id.get(id).map(|t| (*t).clone());
                        if tracker.is_none() {
                            tracing::warn!(
                                "Category '{}' references unknown tracker {}",
                                membership.title,
                                id
                            );
                        }
                        tracker
                    })
                    .sorted_by(|a, b| a.name.cmp(&b.name))
                    .collect();
                Category::new(membership.title).with_trackers(members)
            })
            .collect();

        Ok((categories, trackers))
    }

    async fn require_tracker(&self, id: &TrackerId) -> Result<Tracker, TrackerError> {
        self.trackers
            .get_tracker(id)
            .await?
            .ok_or(TrackerError::TrackerNotFound(*id))
    }

    async fn attached_category(&self, id: &TrackerId) -> Result<Option<String>, TrackerError> {
        Ok(self
            .categories
            .list_categories()
            .await?
            .into_iter()
            .find(|membership| membership.tracker_ids.contains(id))
            .map(|membership| membership.title))
    }

    /// Bring category membership in line with the tracker's state.
    ///
    /// A completed irregular event belongs to no category; every other
    /// tracker is attached to `tracker.category`.
    async fn reconcile_membership(
        &self,
        tracker: &Tracker,
        completions: &CompletionSet,
    ) -> Result<(), TrackerError> {
        let attached = self.attached_category(&tracker.id).await?;
        let belongs = !(tracker.is_irregular() && completions.count_for(&tracker.id) > 0);

        match (belongs, attached) {
            (true, Some(title)) if title == tracker.category => {}
            (true, _) => {
                self.categories.create_category(&tracker.category).await?;
                self.categories
                    .attach_tracker(&tracker.category, &tracker.id)
                    .await?;
                tracing::debug!(
                    "Tracker '{}' attached to '{}'",
                    tracker.name,
                    tracker.category
                );
            }
            (false, Some(_)) => {
                // One-off events leave the list once done.
                self.categories.detach_tracker(&tracker.id).await?;
                tracing::info!("Irregular event '{}' completed and detached", tracker.name);
            }
            (false, None) => {}
        }
        Ok(())
    }
}

fn validated_name(name: &str) -> Result<String, TrackerError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::InvalidName(name.to_string()));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl<C, T, R, P> TrackerService for TrackerServiceImpl<C, T, R, P>
where
    C: CategoryRepository,
    T: TrackerRepository,
    R: CompletionRepository,
    P: PreferencesRepository,
{
    async fn visible_sections(
        &self,
        reference_date: Date,
        filter: Option<Filter>,
    ) -> Result<TrackerList, TrackerError> {
        let filter = match filter {
            Some(filter) => filter,
            None => self.preferences.get_filter().await?,
        };
        let today = self.clock.today();

        let (categories, trackers) = self.load_categories().await?;
        let completions = self.completions.list_completions().await?;
        let pinned: HashSet<TrackerId> = trackers
            .iter()
            .filter(|t| t.is_pinned)
            .map(|t| t.id)
            .collect();

        let sections = compute_visible_sections(
            &categories,
            &completions,
            reference_date,
            filter,
            &pinned,
            today,
        );

        Ok(TrackerList {
            reference_date: filter.effective_date(reference_date, today),
            filter,
            sections,
        })
    }

    async fn toggle_completion(
        &self,
        tracker_id: &TrackerId,
        date: Date,
    ) -> Result<ToggleAction, TrackerError> {
        let _guard = self.write_lock.lock().await;
        let tracker = self.require_tracker(tracker_id).await?;
        let completions = self.completions.list_completions().await?;
        let record = CompletionRecord::new(tracker.id, date);

        let (updated, action) =
            toggle_completion(tracker.id, date, &completions, self.clock.today());

        match action {
            ToggleAction::Added => {
                self.completions.add_completion(&record).await?;
                self.reconcile_membership(&tracker, &updated).await?;
            }
            ToggleAction::Removed => {
                self.completions.remove_completion(&record).await?;
                self.reconcile_membership(&tracker, &updated).await?;
            }
            ToggleAction::Rejected => {
                tracing::debug!(
                    "Rejected completion of '{}' on future date {}",
                    tracker.name,
                    date
                );
            }
        }

        Ok(action)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, TrackerError> {
        let (categories, _) = self.load_categories().await?;
        Ok(categories)
    }

    async fn create_category(&self, title: &str) -> Result<(), TrackerError> {
        let title = validated_name(title)?;
        let _guard = self.write_lock.lock().await;
        self.categories.create_category(&title).await
    }

    async fn delete_category(&self, title: &str) -> Result<(), TrackerError> {
        let _guard = self.write_lock.lock().await;
        let attached = self
            .categories
            .delete_category(title)
            .await?
            .ok_or_else(|| TrackerError::CategoryNotFound(title.to_string()))?;

        // Detached irregular events still name this category.
        let detached: Vec<TrackerId> = self
            .trackers
            .list_trackers()
            .await?
            .into_iter()
            .filter(|t| t.category == title)
            .map(|t| t.id)
            .collect();

        for id in attached.into_iter().chain(detached).unique() {
            self.trackers.delete_tracker(&id).await?;
            self.completions.delete_for_tracker(&id).await?;
        }

        tracing::info!("Deleted category '{}'", title);
        Ok(())
    }

    async fn create_tracker(&self, request: NewTracker) -> Result<Tracker, TrackerError> {
        let name = validated_name(&request.name)?;
        let category = validated_name(&request.category)?;

        let tracker = Tracker::new(TrackerId::generate(), name, category)
            .with_schedule(request.schedule)
            .with_appearance(request.color, request.emoji);

        let _guard = self.write_lock.lock().await;
        self.categories.create_category(&tracker.category).await?;
        self.trackers.upsert_tracker(&tracker).await?;
        self.categories
            .attach_tracker(&tracker.category, &tracker.id)
            .await?;

        tracing::info!("Created tracker '{}' in '{}'", tracker.name, tracker.category);
        Ok(tracker)
    }

    async fn update_tracker(
        &self,
        id: &TrackerId,
        mut request: UpdateTracker,
    ) -> Result<Tracker, TrackerError> {
        if let Some(name) = request.name.as_deref() {
            request.name = Some(validated_name(name)?);
        }
        if let Some(category) = request.category.as_deref() {
            request.category = Some(validated_name(category)?);
        }

        let _guard = self.write_lock.lock().await;
        let current = self.require_tracker(id).await?;
        let updated = request.apply(current);
        self.trackers.upsert_tracker(&updated).await?;

        // Category and schedule edits can both change where the tracker
        // belongs: turning a completed event into a habit brings it back.
        let completions = self.completions.list_completions().await?;
        self.reconcile_membership(&updated, &completions).await?;

        Ok(updated)
    }

    async fn delete_tracker(&self, id: &TrackerId) -> Result<(), TrackerError> {
        let _guard = self.write_lock.lock().await;
        let tracker = self.require_tracker(id).await?;

        self.categories.detach_tracker(id).await?;
        self.trackers.delete_tracker(id).await?;
        let removed = self.completions.delete_for_tracker(id).await?;

        tracing::info!(
            "Deleted tracker '{}' and {} completion records",
            tracker.name,
            removed
        );
        Ok(())
    }

    async fn set_pinned(&self, id: &TrackerId, pinned: bool) -> Result<Tracker, TrackerError> {
        let _guard = self.write_lock.lock().await;
        let tracker = self.require_tracker(id).await?.pinned(pinned);
        self.trackers.upsert_tracker(&tracker).await?;
        Ok(tracker)
    }

    async fn statistics(&self) -> Result<Statistics, TrackerError> {
        let completions = self.completions.list_completions().await?;
        Ok(compute_statistics(&completions, self.clock.today()))
    }

    async fn selected_filter(&self) -> Result<Filter, TrackerError> {
        self.preferences.get_filter().await
    }

    async fn select_filter(&self, filter: Filter) -> Result<(), TrackerError> {
        self.preferences.set_filter(filter).await
    }

    async fn onboarding_completed(&self) -> Result<bool, TrackerError> {
        self.preferences.onboarding_completed().await
    }

    async fn complete_onboarding(&self) -> Result<(), TrackerError> {
        self.preferences.set_onboarding_completed().await
    }
}
