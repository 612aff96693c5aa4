//! Date-selection state and its guards

use chrono::NaiveDate;

use crate::month::Month;
use crate::traits::Clock;
use crate::utils::roll_off_weekend;

/// The calendar selection: the day whose appointments are displayed, and the
/// month shown in the grid.
///
/// The two are independent: the user may browse other months without touching
/// the selected day. Every mutation is guarded up front, so an invalid
/// selection (a weekend, a past day) can never be constructed; there is no
/// post-hoc correction anywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    selected_date: NaiveDate,
    displayed_month: Month,
}

impl Selection {
    /// The selection at mount time: today, rolled forward off weekends
    /// (a Saturday "today" starts on the next Monday, +2 days; a Sunday on +1 day).
    /// The displayed month starts as the selected date's month.
    pub fn at_mount<C: Clock>(clock: &C) -> Self {
        let selected_date = roll_off_weekend(clock.today());
        Self {
            selected_date,
            displayed_month: Month::of(selected_date),
        }
    }

    /// The single day whose appointments are currently displayed
    pub fn selected_date(&self) -> NaiveDate { self.selected_date }

    /// The month currently shown in the calendar grid
    pub fn displayed_month(&self) -> Month { self.displayed_month }

    /// Change the selected day.
    ///
    /// The request is honoured only when the day is available and not disabled;
    /// anything else is silently ignored (not an error: grids routinely render
    /// non-selectable cells, and clicking one is a no-op).
    ///
    /// Returns whether the selection actually changed, so the caller knows
    /// whether an appointment refetch is due.
    pub fn select_date(&mut self, day: NaiveDate, is_available: bool, is_disabled: bool) -> bool {
        if is_available == false || is_disabled {
            log::debug!("Ignoring selection of {}: day is not selectable", day);
            return false;
        }

        let changed = self.selected_date != day;
        self.selected_date = day;
        changed
    }

    /// Show another month in the grid. This never touches the selected day;
    /// the caller is responsible for refreshing the availability data.
    pub fn change_month(&mut self, month: Month) {
        self.displayed_month = month;
    }
}
