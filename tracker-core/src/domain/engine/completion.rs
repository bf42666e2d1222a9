use serde::Serialize;
use time::Date;

use crate::domain::models::{CompletionRecord, CompletionSet, TrackerId};

/// Outcome of [`toggle_completion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ToggleAction {
    Added,
    Removed,
    /// The date lies after `today`; nothing changed.
    Rejected,
}

/// Flip the completion of `tracker_id` on `date`.
///
/// Completing in advance is not allowed: a `date` later than `today` leaves
/// the set untouched and reports [`ToggleAction::Rejected`].
pub fn toggle_completion(
    tracker_id: TrackerId,
    date: Date,
    completions: &CompletionSet,
    today: Date,
) -> (CompletionSet, ToggleAction) {
    if date > today {
        return (completions.clone(), ToggleAction::Rejected);
    }

    let record = CompletionRecord::new(tracker_id, date);
    let mut updated = completions.clone();

    let action = if updated.remove(&record) {
        ToggleAction::Removed
    } else {
        updated.insert(record);
        ToggleAction::Added
    };

    (updated, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2024 - 03 - 08);

    #[test]
    fn adds_then_removes() {
        let id = TrackerId::generate();
        let original = CompletionSet::new();

        let (added, action) = toggle_completion(id, TODAY, &original, TODAY);
        assert_eq!(action, ToggleAction::Added);
        assert!(added.contains(&id, TODAY));

        let (removed, action) = toggle_completion(id, TODAY, &added, TODAY);
        assert_eq!(action, ToggleAction::Removed);
        assert_eq!(removed, original);
    }

    #[test]
    fn past_dates_are_allowed() {
        let id = TrackerId::generate();
        let (set, action) = toggle_completion(id, date!(2023 - 12 - 31), &CompletionSet::new(), TODAY);
        assert_eq!(action, ToggleAction::Added);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn future_dates_are_rejected_both_ways() {
        let id = TrackerId::generate();
        let tomorrow = date!(2024 - 03 - 09);
        let original: CompletionSet = [CompletionRecord::new(id, TODAY)].into_iter().collect();

        let (first, action) = toggle_completion(id, tomorrow, &original, TODAY);
        assert_eq!(action, ToggleAction::Rejected);
        assert_eq!(first, original);

        let (second, action) = toggle_completion(id, tomorrow, &first, TODAY);
        assert_eq!(action, ToggleAction::Rejected);
        assert_eq!(second, original);
    }

    #[test]
    fn other_trackers_are_untouched() {
        let a = TrackerId::generate();
        let b = TrackerId::generate();
        let original: CompletionSet = [CompletionRecord::new(b, TODAY)].into_iter().collect();

        let (updated, _) = toggle_completion(a, TODAY, &original, TODAY);
        assert!(updated.contains(&b, TODAY));
        assert_eq!(updated.count_for(&b), 1);
    }
}
