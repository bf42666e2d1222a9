//! HTTP response types for tracker endpoints.
//!
//! These types serialize to the JSON format expected by the frontend.

use serde::Serialize;
use time::Date;
use tracker_core::domain::{
    engine::ToggleAction,
    models::{Category, Filter, Section, Tracker, TrackerList, VisibleTracker, WeekDay},
};

/// Tracker response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerResponse {
    pub id: String,
    pub name: String,
    pub color: String,
    pub emoji: String,
    /// Scheduled weekdays. Empty for irregular events.
    pub schedule: Vec<WeekDay>,
    pub is_irregular: bool,
    pub is_pinned: bool,
    pub category: String,
}

impl From<Tracker> for TrackerResponse {
    fn from(tracker: Tracker) -> Self {
        Self {
            id: tracker.id.to_string(),
            is_irregular: tracker.is_irregular(),
            schedule: tracker.schedule.days().collect(),
            name: tracker.name,
            color: tracker.color,
            emoji: tracker.emoji,
            is_pinned: tracker.is_pinned,
            category: tracker.category,
        }
    }
}

/// A tracker as shown on the requested day.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleTrackerResponse {
    pub tracker: TrackerResponse,
    pub is_completed: bool,
    /// Completions across all days.
    pub completion_count: usize,
}

impl From<VisibleTracker> for VisibleTrackerResponse {
    fn from(visible: VisibleTracker) -> Self {
        Self {
            tracker: visible.tracker.into(),
            is_completed: visible.is_completed,
            completion_count: visible.completion_count,
        }
    }
}

/// Section of the tracker list. The pinned section has `is_pinned` set and
/// an untranslated title.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub title: String,
    pub is_pinned: bool,
    pub trackers: Vec<VisibleTrackerResponse>,
}

impl From<Section> for SectionResponse {
    fn from(section: Section) -> Self {
        Self {
            title: section.title.to_string(),
            is_pinned: section.is_pinned(),
            trackers: section.trackers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response for the sections endpoint. An empty `sections` list means the
/// empty state should be shown.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionsResponse {
    /// Day the sections were computed for, `YYYY-MM-DD`.
    pub date: String,
    pub filter: Filter,
    pub sections: Vec<SectionResponse>,
}

impl From<TrackerList> for SectionsResponse {
    fn from(list: TrackerList) -> Self {
        Self {
            date: format_date(list.reference_date),
            filter: list.filter,
            sections: list.sections.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub title: String,
    pub trackers: Vec<TrackerResponse>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            title: category.title,
            trackers: category.trackers.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleCompletionResponse {
    pub action: ToggleAction,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResponse {
    pub filter: Filter,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResponse {
    pub completed: bool,
}

fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn formats_dates_with_zero_padding() {
        assert_eq!(format_date(date!(2024 - 03 - 06)), "2024-03-06");
    }

    #[test]
    fn sections_response_uses_the_effective_date() {
        let list = TrackerList {
            reference_date: date!(2024 - 03 - 08),
            filter: Filter::Today,
            sections: Vec::new(),
        };

        let response = SectionsResponse::from(list);
        assert_eq!(response.date, "2024-03-08");
        assert_eq!(response.filter, Filter::Today);
        assert!(response.sections.is_empty());
    }
}
