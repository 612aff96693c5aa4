///! Some utility functions around dates and labels

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Returns whether this date falls on a Saturday or a Sunday.
///
/// Weekends are never bookable, whatever the availability payload says.
pub fn is_weekend(date: NaiveDate) -> bool {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => true,
        _ => false,
    }
}

/// Move a weekend date forward to the next Monday (a Saturday rolls 2 days forward, a Sunday 1 day).
/// Weekday dates are returned unchanged.
pub fn roll_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Uppercase the first character of a label, leaving the rest untouched.
///
/// Locales such as pt-BR keep month and weekday names lowercase; headers want them capitalized anyway.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn weekends() {
        assert!(is_weekend(date(2020, 11, 1))); // a Sunday
        assert!(is_weekend(date(2020, 11, 7))); // a Saturday
        assert!(is_weekend(date(2020, 11, 3)) == false); // a Tuesday
    }

    #[test]
    fn weekend_rolling() {
        // A Sunday rolls one day forward...
        assert_eq!(roll_off_weekend(date(2020, 11, 1)), date(2020, 11, 2));
        // ...a Saturday two days forward...
        assert_eq!(roll_off_weekend(date(2020, 11, 7)), date(2020, 11, 9));
        // ...and weekdays stay put
        assert_eq!(roll_off_weekend(date(2020, 11, 3)), date(2020, 11, 3));
    }

    #[test]
    fn capitalization() {
        assert_eq!(capitalize_first("segunda-feira"), "Segunda-feira");
        assert_eq!(capitalize_first("sábado"), "Sábado");
        assert_eq!(capitalize_first("November"), "November");
        assert_eq!(capitalize_first(""), "");
    }
}
