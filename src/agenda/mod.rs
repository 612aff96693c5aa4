//! The engine itself: reconciles availability, appointments and selection
//!
//! An [`Agenda`] combines a [`ScheduleSource`](crate::traits::ScheduleSource)
//! and a [`Clock`](crate::traits::Clock). UI events come in through
//! [`Agenda::select_date`] and [`Agenda::change_month`]; render-ready state
//! comes out of [`Agenda::grid`], [`Agenda::derived_view`] and
//! [`Agenda::describe_selected_date`], recomputed in full from the latest
//! snapshots on every read.

use chrono::NaiveDate;

use crate::appointment::Appointment;
use crate::availability::AvailabilityStore;
use crate::locale::Locale;
use crate::month::Month;
use crate::partition;
use crate::presenter::{self, GridCell, SelectedDateText};
use crate::schedule::AppointmentStore;
use crate::selection::Selection;
use crate::traits::{Clock, ScheduleSource};
use crate::utils::is_weekend;

pub mod notify;
use notify::{AgendaEvent, NotifySender, StoreKind};

/// All UI-facing data derived from the current snapshots.
///
/// Never stored: an `Agenda` recomputes it in full on every read, in
/// O(appointments + days-in-month) time. Mutating it has no effect on the engine.
#[derive(Clone, Debug)]
pub struct DerivedView {
    /// Appointments before 13:00
    pub morning: Vec<Appointment>,
    /// Appointments from 13:00 onwards
    pub afternoon: Vec<Appointment>,
    /// The next appointment of the day. Only ever `Some` when the selected
    /// date is today; suppressed on any other day
    pub next: Option<Appointment>,
    /// The days of the displayed month that cannot be selected
    pub disabled_days: Vec<NaiveDate>,
}

/// The scheduling-calendar engine.
///
/// Owns the selection state and the two stores, pulls data through an injected
/// [`ScheduleSource`], and reads time through an injected [`Clock`]. The two
/// store refreshes are independent of each other: each one replaces only its
/// own generation of data, and a failure of one never blocks the other.
pub struct Agenda<S, C>
where
    S: ScheduleSource,
    C: Clock,
{
    source: S,
    clock: C,
    selection: Selection,
    availability: AvailabilityStore,
    appointments: AppointmentStore,
    notify: Option<NotifySender>,
}

impl<S, C> Agenda<S, C>
where
    S: ScheduleSource,
    C: Clock,
{
    /// Create an engine over a data source and a clock.
    ///
    /// The selection starts on today, rolled forward off weekends. No fetch
    /// happens here; call [`Self::mount`] to populate the stores.
    pub fn new(source: S, clock: C) -> Self {
        let selection = Selection::at_mount(&clock);
        let availability = AvailabilityStore::new(selection.displayed_month());
        let appointments = AppointmentStore::new(selection.selected_date());
        Self {
            source,
            clock,
            selection,
            availability,
            appointments,
            notify: None,
        }
    }

    /// Same as [`Self::new`], with a feedback channel UI collaborators can watch.
    /// See [`notify::notify_channel`]
    pub fn new_with_notify(source: S, clock: C, notify: NotifySender) -> Self {
        let mut agenda = Self::new(source, clock);
        agenda.notify = Some(notify);
        agenda
    }

    /// The current selection state
    pub fn selection(&self) -> &Selection { &self.selection }
    /// The current availability snapshot
    pub fn availability(&self) -> &AvailabilityStore { &self.availability }
    /// The current appointments snapshot
    pub fn appointments(&self) -> &AppointmentStore { &self.appointments }

    /// Initial mount: fetch this month's availability and the selected day's
    /// appointments. The two fetches are independent; a failure of one does
    /// not prevent the other. Returns whether both succeeded.
    pub async fn mount(&mut self) -> bool {
        let availability_ok = self.refresh_availability().await;
        let appointments_ok = self.refresh_appointments().await;
        availability_ok && appointments_ok
    }

    /// The user clicked a day cell.
    ///
    /// Weekend, past and unavailable days are silently ignored, per the
    /// selection guards. When the selection actually changes, the appointments
    /// for the new day are fetched; a fetch failure keeps the previous day's
    /// list in place and reports on the feedback channel.
    ///
    /// Returns whether the selection changed.
    pub async fn select_date(&mut self, day: NaiveDate) -> bool {
        let today = self.clock.today();
        let disabled_days = self.availability.disabled_days(today);

        let is_available = is_weekend(day) == false;
        // The disabled set only covers the fetched month; the past-date rule
        // must hold for any day, so it is checked here as well
        let is_disabled = day < today || disabled_days.contains(&day);

        if self.selection.select_date(day, is_available, is_disabled) == false {
            return false;
        }

        self.refresh_appointments().await;
        true
    }

    /// The user browsed to another month.
    ///
    /// The displayed month changes unconditionally (browsing never touches the
    /// selected day), then the availability for the new month is fetched.
    /// Returns whether that fetch succeeded.
    pub async fn change_month(&mut self, month: Month) -> bool {
        self.selection.change_month(month);
        self.refresh_availability().await
    }

    /// Fetch the availability payload for the currently displayed month and
    /// replace the store with it.
    ///
    /// A failed fetch keeps the previous generation in place and reports a
    /// non-fatal [`AgendaEvent::FetchFailed`]; it is never retried
    /// automatically, but calling this again (or browsing months) retries it.
    /// A response for a month that is no longer displayed is discarded.
    pub async fn refresh_availability(&mut self) -> bool {
        let month = self.selection.displayed_month();
        self.feedback(AgendaEvent::Refreshing { store: StoreKind::Availability });

        match self.source.fetch_month_availability(month).await {
            Err(err) => {
                log::warn!("Fetch failed for the availability store ({}): {}", month, err);
                self.feedback(AgendaEvent::FetchFailed { store: StoreKind::Availability });
                false
            },
            Ok(days) => {
                if month != self.selection.displayed_month() {
                    log::debug!("Discarding a stale availability response for {}", month);
                    self.feedback(AgendaEvent::StaleDiscarded { store: StoreKind::Availability });
                    return true;
                }

                log::debug!("Availability for {}: {} days in the payload", month, days.len());
                self.availability.replace(month, days);
                self.feedback(AgendaEvent::Refreshed { store: StoreKind::Availability });
                true
            },
        }
    }

    /// Fetch the appointments for the currently selected day and replace the
    /// store with them. Same failure and staleness policy as
    /// [`Self::refresh_availability`]
    pub async fn refresh_appointments(&mut self) -> bool {
        let day = self.selection.selected_date();
        self.feedback(AgendaEvent::Refreshing { store: StoreKind::Appointments });

        match self.source.fetch_day_appointments(day).await {
            Err(err) => {
                log::warn!("Fetch failed for the appointments store ({}): {}", day, err);
                self.feedback(AgendaEvent::FetchFailed { store: StoreKind::Appointments });
                false
            },
            Ok(appointments) => {
                if day != self.selection.selected_date() {
                    log::debug!("Discarding a stale appointments response for {}", day);
                    self.feedback(AgendaEvent::StaleDiscarded { store: StoreKind::Appointments });
                    return true;
                }

                log::debug!("{} appointments on {}", appointments.len(), day);
                self.appointments.replace(day, appointments);
                self.feedback(AgendaEvent::Refreshed { store: StoreKind::Appointments });
                true
            },
        }
    }

    /// Recompute every piece of derived data from the current snapshots
    pub fn derived_view(&self) -> DerivedView {
        let now = self.clock.now();
        let today = now.naive_local().date();
        let appointments = self.appointments.appointments();

        // "Next appointment" only makes sense on today's schedule
        let next = if self.selection.selected_date() == today {
            partition::next_appointment(appointments, now).cloned()
        } else {
            None
        };

        DerivedView {
            morning: partition::morning(appointments, now),
            afternoon: partition::afternoon(appointments, now),
            next,
            disabled_days: self.availability.disabled_days(today),
        }
    }

    /// The render-ready day grid for the displayed month
    pub fn grid(&self) -> Vec<GridCell> {
        let today = self.clock.today();
        presenter::build_grid(
            self.selection.displayed_month(),
            &self.availability.disabled_days(today),
            self.selection.selected_date(),
            today,
        )
    }

    /// The header description of the selected day
    pub fn describe_selected_date(&self, locale: &Locale) -> SelectedDateText {
        presenter::describe_selected_date(self.selection.selected_date(), locale)
    }

    fn feedback(&self, event: AgendaEvent) {
        if let Some(sender) = &self.notify {
            // Nobody listening is fine
            let _ = sender.send(event);
        }
    }
}
