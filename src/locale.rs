//! Month and weekday label tables
//!
//! The product ships in Brazilian Portuguese, so [`PT_BR`] is the default
//! locale. Tables keep each language's natural casing; the presenter
//! capitalizes the first character of whatever it displays.

use chrono::Weekday;

/// A label table for one language
#[derive(Clone, Copy, Debug)]
pub struct Locale {
    /// A BCP 47-ish tag, used for logging only
    pub tag: &'static str,
    /// Month names, January first
    pub months: [&'static str; 12],
    /// Weekday names, Monday first
    pub weekdays: [&'static str; 7],
    /// The word in front of the day-of-month in the "Day N" header label
    pub day_word: &'static str,
}

impl Locale {
    /// The name of a 1-based month, or an empty string for an out-of-range value
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1..=12 => self.months[(month - 1) as usize],
            _ => "",
        }
    }

    /// The name of a weekday
    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        self.weekdays[weekday.num_days_from_monday() as usize]
    }
}

/// Brazilian Portuguese labels
pub static PT_BR: Locale = Locale {
    tag: "pt-BR",
    months: [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho",
        "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
    ],
    weekdays: [
        "segunda-feira", "terça-feira", "quarta-feira", "quinta-feira",
        "sexta-feira", "sábado", "domingo",
    ],
    day_word: "Dia",
};

/// English labels
pub static EN: Locale = Locale {
    tag: "en",
    months: [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ],
    weekdays: [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    ],
    day_word: "Day",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups() {
        assert_eq!(PT_BR.month_name(11), "novembro");
        assert_eq!(EN.month_name(11), "November");
        assert_eq!(PT_BR.month_name(0), "");
        assert_eq!(PT_BR.month_name(13), "");

        assert_eq!(PT_BR.weekday_name(Weekday::Mon), "segunda-feira");
        assert_eq!(EN.weekday_name(Weekday::Sun), "Sunday");
    }
}
