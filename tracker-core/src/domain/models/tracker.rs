use serde::{Deserialize, Serialize};

use super::{Schedule, TrackerId};

/// A trackable habit (recurring) or irregular event (one-off).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracker {
    pub id: TrackerId,
    pub name: String,
    /// Hex color string, e.g. "#FD4C49".
    pub color: String,
    pub emoji: String,
    pub schedule: Schedule,
    pub is_pinned: bool,
    /// Title of the category the tracker belongs to.
    ///
    /// Kept after an irregular event is detached from its category so it can
    /// be re-attached when un-completed.
    pub category: String,
}

impl Tracker {
    pub fn new(id: impl Into<TrackerId>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: String::new(),
            emoji: String::new(),
            schedule: Schedule::irregular(),
            is_pinned: false,
            category: category.into(),
        }
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_appearance(mut self, color: impl Into<String>, emoji: impl Into<String>) -> Self {
        self.color = color.into();
        self.emoji = emoji.into();
        self
    }

    pub fn pinned(mut self, is_pinned: bool) -> Self {
        self.is_pinned = is_pinned;
        self
    }

    pub fn is_irregular(&self) -> bool {
        self.schedule.is_irregular()
    }
}

/// Request to create a new tracker.
#[derive(Debug, Clone)]
pub struct NewTracker {
    pub name: String,
    pub color: String,
    pub emoji: String,
    pub schedule: Schedule,
    pub category: String,
}

impl NewTracker {
    pub fn new(name: impl Into<String>, category: impl Into<String>, schedule: Schedule) -> Self {
        Self {
            name: name.into(),
            color: String::new(),
            emoji: String::new(),
            schedule,
            category: category.into(),
        }
    }

    pub fn with_appearance(mut self, color: impl Into<String>, emoji: impl Into<String>) -> Self {
        self.color = color.into();
        self.emoji = emoji.into();
        self
    }
}

/// Request to edit an existing tracker. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateTracker {
    pub name: Option<String>,
    pub color: Option<String>,
    pub emoji: Option<String>,
    pub schedule: Option<Schedule>,
    pub category: Option<String>,
}

impl UpdateTracker {
    /// Apply the edit to `tracker`, returning the updated value.
    pub fn apply(self, mut tracker: Tracker) -> Tracker {
        if let Some(name) = self.name {
            tracker.name = name;
        }
        if let Some(color) = self.color {
            tracker.color = color;
        }
        if let Some(emoji) = self.emoji {
            tracker.emoji = emoji;
        }
        if let Some(schedule) = self.schedule {
            tracker.schedule = schedule;
        }
        if let Some(category) = self.category {
            tracker.category = category;
        }
        tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::WeekDay;

    #[test]
    fn update_only_touches_given_fields() {
        let tracker = Tracker::new(TrackerId::generate(), "Read", "Study")
            .with_schedule(Schedule::new([WeekDay::Monday]))
            .with_appearance("#FF0000", "📚");

        let updated = UpdateTracker {
            name: Some("Read more".to_string()),
            category: Some("Leisure".to_string()),
            ..Default::default()
        }
        .apply(tracker.clone());

        assert_eq!(updated.id, tracker.id);
        assert_eq!(updated.name, "Read more");
        assert_eq!(updated.category, "Leisure");
        assert_eq!(updated.schedule, tracker.schedule);
        assert_eq!(updated.emoji, "📚");
    }

    #[test]
    fn new_tracker_defaults_to_irregular() {
        let tracker = Tracker::new(TrackerId::generate(), "Buy flowers", "Home");
        assert!(tracker.is_irregular());
        assert!(!tracker.is_pinned);
    }
}
