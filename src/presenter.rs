//! Render-ready descriptions of the calendar state
//!
//! Everything in this module is a pure function of its inputs: calling twice
//! with identical inputs yields identical output. There is no hidden state,
//! which lets a UI layer skip re-renders cheaply and keeps these functions
//! trivially testable.

use chrono::{Datelike, NaiveDate};

use crate::availability::is_day_open;
use crate::locale::Locale;
use crate::month::Month;
use crate::utils::capitalize_first;

/// One cell of the day grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    /// Day of month, 1-based
    pub day: u32,
    /// The full calendar date of this cell
    pub date: NaiveDate,
    /// Whether clicking this cell can move the selection
    pub selectable: bool,
    /// Whether this cell is the currently selected day
    pub selected: bool,
    /// Whether this cell is today, per the engine's clock
    pub is_today: bool,
}

/// Build the day grid for `month`.
///
/// A cell is selectable when it falls on a weekday (Monday to Friday, fixed
/// policy) and is not in the disabled set.
pub fn build_grid(month: Month, disabled_days: &[NaiveDate], selected_date: NaiveDate, today: NaiveDate) -> Vec<GridCell> {
    let mut cells = Vec::with_capacity(month.day_count() as usize);

    for day in 1..=month.day_count() {
        let date = match month.day(day) {
            None => continue,
            Some(date) => date,
        };
        cells.push(GridCell {
            day,
            date,
            selectable: is_day_open(date, disabled_days),
            selected: date == selected_date,
            is_today: date == today,
        });
    }

    cells
}

/// The header description of the selected day, e.g. "Dia 4 | Novembro | Quarta-feira"
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedDateText {
    /// The literal "day-word N" pattern, day-of-month only ("Dia 4")
    pub day_label: String,
    pub month_label: String,
    pub weekday_label: String,
}

/// Format the selected date with the given locale.
///
/// Weekday and month labels get their first character capitalized regardless
/// of the locale's own casing conventions.
pub fn describe_selected_date(selected_date: NaiveDate, locale: &Locale) -> SelectedDateText {
    SelectedDateText {
        day_label: format!("{} {}", locale.day_word, selected_date.day()),
        month_label: capitalize_first(locale.month_name(selected_date.month())),
        weekday_label: capitalize_first(locale.weekday_name(selected_date.weekday())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{EN, PT_BR};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn grid_flags() {
        let today = date(2020, 11, 3);
        let selected = date(2020, 11, 4);
        let disabled = vec![date(2020, 11, 1), date(2020, 11, 2), date(2020, 11, 10)];

        let grid = build_grid(Month::new(2020, 11), &disabled, selected, today);
        assert_eq!(grid.len(), 30);

        let cell = |day: u32| grid[(day - 1) as usize];

        assert!(cell(2).selectable == false); // disabled (past)
        assert!(cell(10).selectable == false); // disabled (unavailable)
        assert!(cell(7).selectable == false); // Saturday, fixed policy
        assert!(cell(8).selectable == false); // Sunday, fixed policy
        assert!(cell(3).selectable);
        assert!(cell(3).is_today);
        assert!(cell(4).selected);
        assert!(cell(4).is_today == false);
    }

    #[test]
    fn grid_is_referentially_transparent() {
        let today = date(2020, 11, 3);
        let selected = date(2020, 11, 4);
        let disabled = vec![date(2020, 11, 2)];

        let first = build_grid(Month::new(2020, 11), &disabled, selected, today);
        let second = build_grid(Month::new(2020, 11), &disabled, selected, today);
        assert_eq!(first, second);
    }

    #[test]
    fn selected_date_labels() {
        // 2020-11-04 is a Wednesday
        let text = describe_selected_date(date(2020, 11, 4), &PT_BR);
        assert_eq!(text.day_label, "Dia 4");
        assert_eq!(text.month_label, "Novembro");
        assert_eq!(text.weekday_label, "Quarta-feira");

        let text = describe_selected_date(date(2020, 11, 4), &EN);
        assert_eq!(text.day_label, "Day 4");
        assert_eq!(text.month_label, "November");
        assert_eq!(text.weekday_label, "Wednesday");
    }

    #[test]
    fn labels_are_capitalized_even_for_lowercase_locales() {
        // 2020-11-07 is a Saturday: "sábado" starts with a lowercase multibyte char
        let text = describe_selected_date(date(2020, 11, 7), &PT_BR);
        assert_eq!(text.weekday_label, "Sábado");
    }
}
