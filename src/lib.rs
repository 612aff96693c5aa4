//! This crate provides the scheduling-calendar engine of an appointment-booking client.
//!
//! The engine reconciles three things into one consistent, always-valid calendar view:
//! * the provider's day-level availability for the displayed month (the [`availability`] store),
//! * the signed-in user's appointments for the selected day (the [`schedule`] store),
//! * the date-selection state itself (the [`selection`] module).
//!
//! Data is pulled through the [`ScheduleSource`](traits::ScheduleSource) seam: an HTTP
//! [`client`](client::BookingClient) against a booking server, or an in-memory
//! [`mock_source`](mock_source::MockScheduleSource) in tests. Time is read through the
//! [`Clock`](traits::Clock) seam, so tests can pin "today" deterministically.
//!
//! An [`Agenda`] ties these together: UI events (day clicks, month browsing) go in,
//! and render-ready state (the day grid, the [`DerivedView`]) comes out, recomputed
//! purely from the latest snapshots on every read.

pub mod traits;

pub mod clock;
pub use clock::SystemClock;
mod month;
pub use month::Month;
mod appointment;
pub use appointment::{Appointment, AppointmentId};
pub mod availability;
pub use availability::{AvailabilityStore, DayAvailability};
pub mod schedule;
pub use schedule::AppointmentStore;
pub mod selection;
pub use selection::Selection;
pub mod partition;
pub mod presenter;
pub mod locale;
pub mod agenda;
pub use agenda::{Agenda, DerivedView};

pub mod client;
pub mod mock_behaviour;
pub mod mock_source;

pub mod config;
pub mod utils;
