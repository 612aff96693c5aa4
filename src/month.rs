//! The "displayed month" key

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month (year and month, no day-of-month component).
///
/// This is the key the availability store is refreshed by: browsing to another
/// month replaces the whole availability payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month. `month` is 1-based (1 = January)
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!(month >= 1 && month <= 12);
        Self { year, month }
    }

    /// The month this date belongs to
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn year(&self) -> i32 { self.year }
    pub fn month(&self) -> u32 { self.month }

    /// Build the date for a given day of this month, or `None` if that day
    /// does not exist (e.g. day 31 of a 30-day month).
    /// Callers must use this rather than letting dates overflow into the next month.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// How many days this month has (leap years included)
    pub fn day_count(&self) -> u32 {
        (28..=31)
            .rev()
            .find(|&day| self.day(day).is_some())
            .unwrap_or(28)
    }

    /// Returns whether this date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The month right after this one
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// The month right before this one
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_counts() {
        assert_eq!(Month::new(2020, 11).day_count(), 30);
        assert_eq!(Month::new(2020, 12).day_count(), 31);
        assert_eq!(Month::new(2020, 2).day_count(), 29); // leap year
        assert_eq!(Month::new(2021, 2).day_count(), 28);
    }

    #[test]
    fn nonexistent_days_are_rejected() {
        let november = Month::new(2020, 11);
        assert!(november.day(30).is_some());
        assert!(november.day(31).is_none());
        assert!(november.day(0).is_none());
    }

    #[test]
    fn navigation_wraps_around_year_boundaries() {
        assert_eq!(Month::new(2020, 12).next(), Month::new(2021, 1));
        assert_eq!(Month::new(2021, 1).prev(), Month::new(2020, 12));
        assert_eq!(Month::new(2020, 11).next(), Month::new(2020, 12));
    }

    #[test]
    fn display() {
        assert_eq!(Month::new(2020, 3).to_string(), "2020-03");
    }
}
