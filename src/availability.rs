//! Provider availability for the displayed month

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::month::Month;
use crate::utils::is_weekend;

/// One entry of the month-availability payload: whether a given day of the
/// displayed month can be booked with the provider.
///
/// Immutable once received; the whole payload is superseded on month change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// Day of month, 1 to 31
    pub day: u32,
    pub available: bool,
}

/// Holds which days of the displayed month are bookable.
///
/// The store owns exactly one generation of data: a completed month fetch
/// replaces the whole payload, nothing is ever merged. A failed fetch leaves
/// the previous generation in place.
#[derive(Clone, Debug)]
pub struct AvailabilityStore {
    month: Month,
    days: Vec<DayAvailability>,
    generation: u64,
}

impl AvailabilityStore {
    /// An empty store for the given month, before any payload has been received
    pub fn new(month: Month) -> Self {
        Self { month, days: Vec::new(), generation: 0 }
    }

    /// The month the current payload belongs to
    pub fn month(&self) -> Month { self.month }

    /// The current availability payload, as delivered by the source
    pub fn days(&self) -> &[DayAvailability] { &self.days }

    /// How many payloads this store has received so far
    pub fn generation(&self) -> u64 { self.generation }

    /// Replace the whole payload with a fresh month fetch
    pub fn replace(&mut self, month: Month, days: Vec<DayAvailability>) {
        self.month = month;
        self.days = days;
        self.generation += 1;
    }

    /// The days of the current month that are excluded from selection.
    /// See [`compute_disabled_days`]
    pub fn disabled_days(&self, today: NaiveDate) -> Vec<NaiveDate> {
        compute_disabled_days(self.month, &self.days, today)
    }
}

/// Lists every day of `month` that must be excluded from selection:
/// * days strictly before `today` (time-of-day is ignored; today itself is never disabled),
/// * days the availability payload explicitly marks as not bookable.
///
/// The payload is optional enrichment: a day with no payload entry is not
/// disabled beyond the past-date rule. Weekends are disabled too, by a fixed
/// policy that does not depend on the month or the payload; that rule lives in
/// [`is_day_open`] and is applied on top of this set everywhere.
///
/// Candidate days that do not exist in `month` (day 31 of a 30-day month...)
/// are skipped rather than being allowed to roll over into the next month.
pub fn compute_disabled_days(month: Month, availability: &[DayAvailability], today: NaiveDate) -> Vec<NaiveDate> {
    let mut disabled = Vec::new();

    for day in 1..=31 {
        let date = match month.day(day) {
            None => continue,
            Some(date) => date,
        };

        let explicitly_closed = availability
            .iter()
            .any(|entry| entry.day == day && entry.available == false);

        if date < today || explicitly_closed {
            disabled.push(date);
        }
    }

    disabled
}

/// Whether this day is open for selection at all: on a weekday (Monday to
/// Friday, fixed policy) and not in the disabled set
pub fn is_day_open(date: NaiveDate, disabled_days: &[NaiveDate]) -> bool {
    is_weekend(date) == false && disabled_days.contains(&date) == false
}
