//! The `YYYY-MM` month filter used for listing, summaries and exports.

use std::{fmt::Display, ops::Range, str::FromStr};

use serde::Deserialize;
use time::{Date, Month};

use crate::Error;

/// The query string for endpoints that require a month.
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    /// The month as `YYYY-MM`.
    pub month: Option<String>,
}

/// A half-open date range covering one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthFilter {
    token: String,
    start: Date,
    end: Date,
}

impl MonthFilter {
    /// Parse a required month parameter.
    ///
    /// # Errors
    /// Returns [Error::InvalidMonth] if `month` is missing or malformed.
    pub fn from_query(month: Option<&str>) -> Result<Self, Error> {
        month.unwrap_or_default().parse()
    }

    /// The first day of the month.
    pub fn start(&self) -> Date {
        self.start
    }

    /// The first day of the following month.
    pub fn end(&self) -> Date {
        self.end
    }

    /// The dates in the month, `[start, end)`.
    pub fn range(&self) -> Range<Date> {
        self.start..self.end
    }

    /// The month as it was given, e.g. "2024-03".
    pub fn as_str(&self) -> &str {
        &self.token
    }
}

impl FromStr for MonthFilter {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMonth(token.to_owned());
        let bytes = token.as_bytes();

        let is_well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);

        if !is_well_formed {
            return Err(invalid());
        }

        let year: i32 = token[..4].parse().map_err(|_| invalid())?;
        let month: u8 = token[5..].parse().map_err(|_| invalid())?;
        let month = Month::try_from(month).map_err(|_| invalid())?;

        let start = Date::from_calendar_date(year, month, 1).map_err(|_| invalid())?;
        let end = match month {
            Month::December => Date::from_calendar_date(year + 1, Month::January, 1),
            month => Date::from_calendar_date(year, month.next(), 1),
        }
        .map_err(|_| invalid())?;

        Ok(Self {
            token: token.to_owned(),
            start,
            end,
        })
    }
}

impl Display for MonthFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{Error, expense::month::MonthFilter};

    #[test]
    fn computes_half_open_range() {
        let month: MonthFilter = "2024-03".parse().unwrap();

        assert_eq!(month.start(), date!(2024 - 03 - 01));
        assert_eq!(month.end(), date!(2024 - 04 - 01));
    }

    #[test]
    fn excludes_adjacent_days() {
        let range = "2024-03".parse::<MonthFilter>().unwrap().range();

        assert!(range.contains(&date!(2024 - 03 - 01)));
        assert!(range.contains(&date!(2024 - 03 - 31)));
        assert!(!range.contains(&date!(2024 - 02 - 29)));
        assert!(!range.contains(&date!(2024 - 04 - 01)));
    }

    #[test]
    fn december_rolls_over_to_next_year() {
        let month: MonthFilter = "2023-12".parse().unwrap();

        assert_eq!(month.end(), date!(2024 - 01 - 01));
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in ["", "2024", "2024-3", "24-03", "2024/03", "2024-03-01", "２０２４-03"] {
            assert_eq!(
                token.parse::<MonthFilter>(),
                Err(Error::InvalidMonth(token.to_owned())),
                "{token:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_months() {
        assert!("2024-00".parse::<MonthFilter>().is_err());
        assert!("2024-13".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn missing_month_is_invalid() {
        assert_eq!(
            MonthFilter::from_query(None),
            Err(Error::InvalidMonth(String::new()))
        );
    }
}
