use std::collections::BTreeSet;

use time::Date;

use crate::domain::models::{CompletionSet, Statistics};

/// Summarise completions as of `today`.
pub fn compute_statistics(completions: &CompletionSet, today: Date) -> Statistics {
    let days: BTreeSet<Date> = completions.iter().map(|record| record.date).collect();

    let mut best_streak = 0;
    let mut run = 0;
    let mut previous: Option<Date> = None;
    for day in &days {
        run = match previous.and_then(Date::next_day) {
            Some(expected) if expected == *day => run + 1,
            _ => 1,
        };
        best_streak = best_streak.max(run);
        previous = Some(*day);
    }

    Statistics {
        trackers_completed: completions.len(),
        completed_days: days.len(),
        best_streak,
        current_streak: current_streak(&days, today),
    }
}

fn current_streak(days: &BTreeSet<Date>, today: Date) -> usize {
    let mut cursor = if days.contains(&today) {
        Some(today)
    } else {
        today.previous_day()
    };

    let mut streak = 0;
    while let Some(day) = cursor.filter(|day| days.contains(day)) {
        streak += 1;
        cursor = day.previous_day();
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{CompletionRecord, TrackerId};
    use time::macros::date;

    fn completions(entries: &[(TrackerId, Date)]) -> CompletionSet {
        entries
            .iter()
            .map(|(id, date)| CompletionRecord::new(*id, *date))
            .collect()
    }

    #[test]
    fn empty_set_has_empty_statistics() {
        let stats = compute_statistics(&CompletionSet::new(), date!(2024 - 03 - 08));
        assert!(stats.is_empty());
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn counts_records_and_days() {
        let a = TrackerId::generate();
        let b = TrackerId::generate();
        let set = completions(&[
            (a, date!(2024 - 03 - 01)),
            (b, date!(2024 - 03 - 01)),
            (a, date!(2024 - 03 - 03)),
        ]);

        let stats = compute_statistics(&set, date!(2024 - 03 - 08));
        assert_eq!(stats.trackers_completed, 3);
        assert_eq!(stats.completed_days, 2);
        assert_eq!(stats.best_streak, 1);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn best_streak_spans_month_boundary() {
        let a = TrackerId::generate();
        let set = completions(&[
            (a, date!(2024 - 02 - 28)),
            (a, date!(2024 - 02 - 29)),
            (a, date!(2024 - 03 - 01)),
            (a, date!(2024 - 03 - 05)),
        ]);

        let stats = compute_statistics(&set, date!(2024 - 03 - 08));
        assert_eq!(stats.best_streak, 3);
    }

    #[test]
    fn current_streak_may_end_yesterday() {
        let a = TrackerId::generate();
        let set = completions(&[
            (a, date!(2024 - 03 - 05)),
            (a, date!(2024 - 03 - 06)),
            (a, date!(2024 - 03 - 07)),
        ]);

        assert_eq!(compute_statistics(&set, date!(2024 - 03 - 08)).current_streak, 3);
        assert_eq!(compute_statistics(&set, date!(2024 - 03 - 07)).current_streak, 3);
        assert_eq!(compute_statistics(&set, date!(2024 - 03 - 09)).current_streak, 0);
    }
}
