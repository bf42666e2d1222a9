use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use time::Date;

/// User-selected narrowing of the tracker list.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(ascii_case_insensitive, serialize_all = "camelCase")]
pub enum Filter {
    #[default]
    All,
    /// Recenters the list on the current date.
    Today,
    Completed,
    Incomplete,
}

impl Filter {
    /// Stable integer encoding used by the preference store.
    pub fn index(self) -> i32 {
        match self {
            Filter::All => 0,
            Filter::Today => 1,
            Filter::Completed => 2,
            Filter::Incomplete => 3,
        }
    }

    /// Decode a stored index. Unknown values fall back to `All`.
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => Filter::Today,
            2 => Filter::Completed,
            3 => Filter::Incomplete,
            _ => Filter::All,
        }
    }

    /// The day a list is computed for. `Today` ignores the requested date.
    pub fn effective_date(self, requested: Date, today: Date) -> Date {
        match self {
            Filter::Today => today,
            _ => requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use time::macros::date;

    #[test]
    fn index_encoding_is_stable() {
        for filter in Filter::iter() {
            assert_eq!(Filter::from_index(filter.index()), filter);
        }
        assert_eq!(Filter::Incomplete.index(), 3);
    }

    #[test]
    fn unknown_index_falls_back_to_all() {
        assert_eq!(Filter::from_index(-1), Filter::All);
        assert_eq!(Filter::from_index(42), Filter::All);
    }

    #[test]
    fn parses_from_query_strings() {
        assert_eq!("today".parse::<Filter>().unwrap(), Filter::Today);
        assert_eq!("Incomplete".parse::<Filter>().unwrap(), Filter::Incomplete);
    }

    #[test]
    fn today_filter_recenters_the_date() {
        let requested = date!(2024 - 03 - 04);
        let today = date!(2024 - 03 - 08);

        assert_eq!(Filter::Today.effective_date(requested, today), today);
        assert_eq!(Filter::All.effective_date(requested, today), requested);
        assert_eq!(Filter::Completed.effective_date(requested, today), requested);
    }
}
