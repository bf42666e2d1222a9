use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use time::{Date, Weekday};

/// A day of the week a habit can be scheduled on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(ascii_case_insensitive, serialize_all = "camelCase")]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekDay {
    /// Gregorian weekday number, Sunday = 1 through Saturday = 7.
    pub fn number(self) -> u8 {
        match self {
            WeekDay::Sunday => 1,
            WeekDay::Monday => 2,
            WeekDay::Tuesday => 3,
            WeekDay::Wednesday => 4,
            WeekDay::Thursday => 5,
            WeekDay::Friday => 6,
            WeekDay::Saturday => 7,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        WeekDay::iter().find(|day| day.number() == number)
    }

    pub fn of(date: Date) -> Self {
        date.weekday().into()
    }
}

impl From<Weekday> for WeekDay {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => WeekDay::Monday,
            Weekday::Tuesday => WeekDay::Tuesday,
            Weekday::Wednesday => WeekDay::Wednesday,
            Weekday::Thursday => WeekDay::Thursday,
            Weekday::Friday => WeekDay::Friday,
            Weekday::Saturday => WeekDay::Saturday,
            Weekday::Sunday => WeekDay::Sunday,
        }
    }
}

/// The weekdays a tracker is active on.
///
/// An empty schedule marks an irregular event: it is shown every day until
/// its first completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule(BTreeSet<WeekDay>);

impl Schedule {
    pub fn new(days: impl IntoIterator<Item = WeekDay>) -> Self {
        Self(days.into_iter().collect())
    }

    pub fn every_day() -> Self {
        Self(WeekDay::iter().collect())
    }

    pub fn irregular() -> Self {
        Self::default()
    }

    pub fn is_irregular(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, day: WeekDay) -> bool {
        self.0.contains(&day)
    }

    /// Whether a tracker with this schedule is due on `date`.
    ///
    /// Irregular events are due every day.
    pub fn is_due_on(&self, date: Date) -> bool {
        self.is_irregular() || self.contains(WeekDay::of(date))
    }

    pub fn days(&self) -> impl Iterator<Item = WeekDay> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<WeekDay> for Schedule {
    fn from_iter<I: IntoIterator<Item = WeekDay>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn sunday_is_day_one() {
        assert_eq!(WeekDay::Sunday.number(), 1);
        assert_eq!(WeekDay::Saturday.number(), 7);
        assert_eq!(WeekDay::from_number(2), Some(WeekDay::Monday));
        assert_eq!(WeekDay::from_number(0), None);
        assert_eq!(WeekDay::from_number(8), None);
    }

    #[test]
    fn weekday_of_date() {
        // 2024-01-01 was a Monday
        assert_eq!(WeekDay::of(date!(2024 - 01 - 01)), WeekDay::Monday);
        assert_eq!(WeekDay::of(date!(2024 - 01 - 07)), WeekDay::Sunday);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("MONDAY".parse::<WeekDay>().unwrap(), WeekDay::Monday);
        assert_eq!("friday".parse::<WeekDay>().unwrap(), WeekDay::Friday);
        assert!("funday".parse::<WeekDay>().is_err());
    }

    #[test]
    fn habit_is_due_only_on_its_days() {
        let schedule = Schedule::new([WeekDay::Monday, WeekDay::Wednesday]);
        assert!(schedule.is_due_on(date!(2024 - 01 - 01)));
        assert!(!schedule.is_due_on(date!(2024 - 01 - 02)));
        assert!(schedule.is_due_on(date!(2024 - 01 - 03)));
    }

    #[test]
    fn irregular_event_is_due_every_day() {
        let schedule = Schedule::irregular();
        assert!(schedule.is_irregular());
        for offset in 0..7 {
            let day = date!(2024 - 01 - 01) + time::Duration::days(offset);
            assert!(schedule.is_due_on(day));
        }
    }

    #[test]
    fn every_day_has_seven_days() {
        assert_eq!(Schedule::every_day().days().count(), 7);
        assert!(!Schedule::every_day().is_irregular());
    }
}
