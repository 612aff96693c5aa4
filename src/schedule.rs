//! The signed-in user's appointments for the selected day

use chrono::NaiveDate;

use crate::appointment::Appointment;

/// Holds the appointments booked for the currently selected day.
///
/// Like the availability store, this owns exactly one generation of data:
/// a completed day fetch replaces the whole list, a failed one leaves the
/// previous generation untouched. Every appointment in a generation belongs
/// to the same calendar day as [`Self::day`].
///
/// The list order is kept exactly as delivered: servers send appointments in
/// chronologically ascending order, and the partitioner relies on that.
#[derive(Clone, Debug)]
pub struct AppointmentStore {
    day: NaiveDate,
    appointments: Vec<Appointment>,
    generation: u64,
}

impl AppointmentStore {
    /// An empty store for the given day, before any fetch has completed
    pub fn new(day: NaiveDate) -> Self {
        Self { day, appointments: Vec::new(), generation: 0 }
    }

    /// The day the current generation belongs to
    pub fn day(&self) -> NaiveDate { self.day }

    /// The current appointment list, in the order the source delivered it
    pub fn appointments(&self) -> &[Appointment] { &self.appointments }

    /// How many generations this store has received so far
    pub fn generation(&self) -> u64 { self.generation }

    /// Replace the whole generation with a fresh day fetch
    pub fn replace(&mut self, day: NaiveDate, appointments: Vec<Appointment>) {
        self.day = day;
        self.appointments = appointments;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::AppointmentId;
    use chrono::TimeZone;
    use url::Url;

    fn appointment(hour: u32) -> Appointment {
        Appointment::new(
            AppointmentId::random(),
            chrono::Local.with_ymd_and_hms(2020, 11, 9, hour, 0, 0).unwrap(),
            "client".to_string(),
            Url::parse("https://cdn.example.com/a.jpg").unwrap(),
        )
    }

    #[test]
    fn generations_are_replaced_wholesale() {
        let day = NaiveDate::from_ymd_opt(2020, 11, 9).unwrap();
        let mut store = AppointmentStore::new(day);
        assert!(store.appointments().is_empty());
        assert_eq!(store.generation(), 0);

        store.replace(day, vec![appointment(8), appointment(10)]);
        assert_eq!(store.appointments().len(), 2);
        assert_eq!(store.generation(), 1);

        let other_day = NaiveDate::from_ymd_opt(2020, 11, 10).unwrap();
        store.replace(other_day, vec![appointment(14)]);
        assert_eq!(store.day(), other_day);
        assert_eq!(store.appointments().len(), 1);
        assert_eq!(store.generation(), 2);
    }
}
