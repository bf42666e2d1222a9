pub(crate) mod categories;
pub(crate) mod error;
pub(crate) mod preferences;
pub(crate) mod statistics;
pub(crate) mod trackers;

pub(crate) use error::ApiError;

use time::{macros::format_description, Date};

/// Parse a `YYYY-MM-DD` date from a query string or payload.
fn parse_date(value: &str) -> Result<Date, ApiError> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|_| ApiError::bad_request(format!("invalid date '{}', expected YYYY-MM-DD", value)))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("2024-03-06").unwrap(), date!(2024 - 03 - 06));
        assert!(parse_date("06/03/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }
}
