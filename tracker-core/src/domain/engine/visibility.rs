//! Decides which trackers the list shows for a day.

use std::collections::{HashMap, HashSet};

use time::Date;

use crate::domain::models::{
    Category, CompletionSet, Filter, Section, SectionTitle, Tracker, TrackerId, VisibleTracker,
};

/// Compute the ordered, sectioned tracker list for `reference_date`.
///
/// `today` is the caller's current date; the [`Filter::Today`] filter
/// replaces `reference_date` with it. Pinned trackers are moved into a
/// leading [`SectionTitle::Pinned`] section. Trackers not scheduled on the
/// reference date, or rejected by the filter, are left out, and sections
/// that end up empty are dropped. Categories sharing a title are merged into
/// one section at the position of the first.
///
/// The result depends only on the arguments.
pub fn compute_visible_sections(
    categories: &[Category],
    completions: &CompletionSet,
    reference_date: Date,
    filter: Filter,
    pinned_ids: &HashSet<TrackerId>,
    today: Date,
) -> Vec<Section> {
    let reference_date = filter.effective_date(reference_date, today);

    let mut pinned = Vec::new();
    let mut sections = Vec::new();

    for (title, trackers) in merge_by_title(categories) {
        let mut visible = Vec::new();

        for tracker in trackers {
            if !tracker.schedule.is_due_on(reference_date) {
                continue;
            }

            let entry = VisibleTracker {
                tracker: tracker.clone(),
                is_completed: completions.contains(&tracker.id, reference_date),
                completion_count: completions.count_for(&tracker.id),
            };

            if !passes(filter, &entry) {
                continue;
            }

            if pinned_ids.contains(&tracker.id) {
                pinned.push(entry);
            } else {
                visible.push(entry);
            }
        }

        if !visible.is_empty() {
            sections.push(Section {
                title: SectionTitle::Category(title.to_string()),
                trackers: visible,
            });
        }
    }

    if !pinned.is_empty() {
        sections.insert(
            0,
            Section {
                title: SectionTitle::Pinned,
                trackers: pinned,
            },
        );
    }

    sections
}

fn passes(filter: Filter, entry: &VisibleTracker) -> bool {
    match filter {
        Filter::All | Filter::Today => true,
        Filter::Completed => entry.is_completed,
        Filter::Incomplete => !entry.is_completed,
    }
}

/// Group trackers by category title, keeping first-seen order of both
/// titles and trackers. A tracker id seen twice is kept once.
fn merge_by_title(categories: &[Category]) -> Vec<(&str, Vec<&Tracker>)> {
    let mut groups: Vec<(&str, Vec<&Tracker>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut seen: HashSet<TrackerId> = HashSet::new();

    for category in categories {
        let position = *positions.entry(category.title.as_str()).or_insert_with(|| {
            groups.push((category.title.as_str(), Vec::new()));
            groups.len() - 1
        });

        for tracker in &category.trackers {
            if seen.insert(tracker.id) {
                groups[position].1.push(tracker);
            }
        }
    }

    groups
}
