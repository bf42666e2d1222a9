use serde::{Deserialize, Serialize};

use super::Tracker;

/// A named grouping of trackers. The title is the grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub title: String,
    pub trackers: Vec<Tracker>,
}

impl Category {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            trackers: Vec::new(),
        }
    }

    pub fn with_trackers(mut self, trackers: Vec<Tracker>) -> Self {
        self.trackers = trackers;
        self
    }
}
