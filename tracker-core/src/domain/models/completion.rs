use std::collections::BTreeSet;

use time::{Date, OffsetDateTime};

use super::TrackerId;

/// Marks a tracker as completed on a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompletionRecord {
    pub tracker_id: TrackerId,
    pub date: Date,
}

impl CompletionRecord {
    pub fn new(tracker_id: TrackerId, date: Date) -> Self {
        Self { tracker_id, date }
    }

    /// Build a record from a timestamp, keeping only its calendar day.
    pub fn at(tracker_id: TrackerId, timestamp: OffsetDateTime) -> Self {
        Self::new(tracker_id, timestamp.date())
    }
}

/// Set of completion records keyed by `(tracker_id, day)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet(BTreeSet<CompletionRecord>);

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, tracker_id: &TrackerId, date: Date) -> bool {
        self.0.contains(&CompletionRecord::new(*tracker_id, date))
    }

    /// Number of days `tracker_id` has been completed on.
    pub fn count_for(&self, tracker_id: &TrackerId) -> usize {
        self.0
            .iter()
            .filter(|record| record.tracker_id == *tracker_id)
            .count()
    }

    /// Returns `false` if the record was already present.
    pub fn insert(&mut self, record: CompletionRecord) -> bool {
        self.0.insert(record)
    }

    /// Returns `false` if the record was not present.
    pub fn remove(&mut self, record: &CompletionRecord) -> bool {
        self.0.remove(record)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompletionRecord> {
        self.0.iter()
    }
}

impl FromIterator<CompletionRecord> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = CompletionRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for CompletionSet {
    type Item = CompletionRecord;
    type IntoIter = std::collections::btree_set::IntoIter<CompletionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
