use serde::Serialize;

/// Aggregate completion statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Total number of completion records.
    pub trackers_completed: usize,
    /// Distinct days with at least one completion.
    pub completed_days: usize,
    /// Longest run of consecutive days with at least one completion.
    pub best_streak: usize,
    /// Run of consecutive completed days ending today, or yesterday if
    /// nothing has been completed yet today.
    pub current_streak: usize,
}

impl Statistics {
    pub fn is_empty(&self) -> bool {
        self.trackers_completed == 0
    }
}
