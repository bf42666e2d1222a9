use std::fmt;

use time::Date;

use super::{Filter, Tracker};

/// Heading of a rendered section.
///
/// The display name of `Pinned` is a presentation concern; `Display` gives
/// the untranslated one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionTitle {
    Pinned,
    Category(String),
}

impl fmt::Display for SectionTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionTitle::Pinned => write!(f, "Pinned"),
            SectionTitle::Category(title) => write!(f, "{}", title),
        }
    }
}

/// A tracker as shown for a particular day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleTracker {
    pub tracker: Tracker,
    pub is_completed: bool,
    /// Completions across all dates.
    pub completion_count: usize,
}

/// One titled group of the tracker list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: SectionTitle,
    pub trackers: Vec<VisibleTracker>,
}

impl Section {
    pub fn is_pinned(&self) -> bool {
        self.title == SectionTitle::Pinned
    }
}

/// The rendered tracker list together with the day and filter it was
/// computed for.
///
/// `reference_date` is the effective day: under [`Filter::Today`] it is the
/// current date, whatever day was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerList {
    pub reference_date: Date,
    pub filter: Filter,
    pub sections: Vec<Section>,
}

impl TrackerList {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
