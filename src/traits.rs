use std::error::Error;

use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate};

use crate::appointment::Appointment;
use crate::availability::DayAvailability;
use crate::month::Month;

/// Supplies the current instant.
///
/// The engine never reads the wall clock directly: everything clock-dependent
/// ("today", the past-date rule, the next-appointment lookup) goes through this
/// trait, so tests can pin an arbitrary instant with a
/// [`FixedClock`](crate::clock::FixedClock) instead of depending on wall-clock state.
pub trait Clock {
    /// The current instant, in the local time zone
    fn now(&self) -> DateTime<Local>;

    /// Today's calendar date, per this clock
    fn today(&self) -> NaiveDate {
        self.now().naive_local().date()
    }
}

/// The data-fetch collaborator the engine pulls its schedule data from.
///
/// This is usually an HTTP client ([`BookingClient`](crate::client::BookingClient)),
/// but can be an in-memory source ([`MockScheduleSource`](crate::mock_source::MockScheduleSource)) in tests.
///
/// The two fetches are independent: one is keyed by the displayed month, the other
/// by the selected day. They may resolve in either order and must never be merged
/// into a single synchronized operation.
#[async_trait]
pub trait ScheduleSource {
    /// Which days of `month` can be booked with the provider.
    /// This can be a long process, and can fail (e.g. in case of a remote server)
    async fn fetch_month_availability(&self, month: Month) -> Result<Vec<DayAvailability>, Box<dyn Error>>;

    /// The signed-in user's appointments for the given day, in chronological order.
    /// This can be a long process, and can fail (e.g. in case of a remote server)
    async fn fetch_day_appointments(&self, day: NaiveDate) -> Result<Vec<Appointment>, Box<dyn Error>>;
}
