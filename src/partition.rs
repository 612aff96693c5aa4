//! Morning/afternoon partitioning and "next appointment" lookup

use chrono::{DateTime, Datelike, Local};

use crate::appointment::Appointment;

/// "Now", truncated to month granularity: the current instant with its
/// day-of-month reset to 1.
///
/// The recency filters below compare against this coarse instant, not the
/// precise one, so appointments earlier in the current month still show up.
/// This mirrors what booking front-ends have always shipped; tightening it
/// to a strict instant comparison would silently change which appointments
/// are hidden as past.
fn month_truncated(now: DateTime<Local>) -> DateTime<Local> {
    now.with_day(1).unwrap_or(now)
}

/// The appointments before 13:00 that are not in the past, per the coarse
/// month-granularity recency filter
pub fn morning(appointments: &[Appointment], now: DateTime<Local>) -> Vec<Appointment> {
    let horizon = month_truncated(now);
    appointments
        .iter()
        .filter(|appointment| appointment.hour() < 13 && appointment.scheduled_at() >= horizon)
        .cloned()
        .collect()
}

/// The appointments from 13:00 onwards (hour of day > 12), same recency
/// filter as [`morning`]. The two buckets are disjoint: 12:xx sits in the
/// morning bucket only.
pub fn afternoon(appointments: &[Appointment], now: DateTime<Local>) -> Vec<Appointment> {
    let horizon = month_truncated(now);
    appointments
        .iter()
        .filter(|appointment| appointment.hour() > 12 && appointment.scheduled_at() >= horizon)
        .cloned()
        .collect()
}

/// The first appointment strictly after `now`, in store order.
///
/// The list is assumed chronologically ascending, as delivered by the source;
/// it is never re-sorted here. Returns `None` when every appointment is over.
pub fn next_appointment(appointments: &[Appointment], now: DateTime<Local>) -> Option<&Appointment> {
    appointments.iter().find(|appointment| appointment.scheduled_at() > now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::AppointmentId;
    use chrono::TimeZone;
    use url::Url;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2020, 11, day, hour, minute, 0).unwrap()
    }

    fn appointment(day: u32, hour: u32, minute: u32) -> Appointment {
        Appointment::new(
            AppointmentId::random(),
            at(day, hour, minute),
            "client".to_string(),
            Url::parse("https://cdn.example.com/a.jpg").unwrap(),
        )
    }

    #[test]
    fn buckets_are_disjoint_subsets() {
        let appointments = vec![
            appointment(9, 8, 0),
            appointment(9, 12, 30),
            appointment(9, 13, 0),
            appointment(9, 17, 0),
        ];
        let now = at(9, 7, 0);

        let morning = morning(&appointments, now);
        let afternoon = afternoon(&appointments, now);

        assert_eq!(morning.len(), 2);
        assert_eq!(afternoon.len(), 2);
        for kept in morning.iter().chain(afternoon.iter()) {
            assert!(appointments.contains(kept));
        }
        for kept in &morning {
            assert!(afternoon.contains(kept) == false);
        }
    }

    #[test]
    fn noon_belongs_to_the_morning_bucket_only() {
        // Hour 12 satisfies "< 13" but not "> 12"
        let appointments = vec![appointment(9, 12, 0)];
        let now = at(9, 7, 0);

        assert_eq!(morning(&appointments, now).len(), 1);
        assert!(afternoon(&appointments, now).is_empty());
    }

    #[test]
    fn recency_filter_is_month_grained() {
        let appointments = vec![appointment(9, 8, 0)];

        // 08:00 is already over at 09:00, but the filter only truncates "now"
        // to the first of the month, so the appointment is still listed
        assert_eq!(morning(&appointments, at(9, 9, 0)).len(), 1);

        // An appointment from a previous month is filtered out
        let a_month_later = Local.with_ymd_and_hms(2020, 12, 9, 9, 0, 0).unwrap();
        assert!(morning(&appointments, a_month_later).is_empty());
    }

    #[test]
    fn next_appointment_is_the_first_one_strictly_after_now() {
        let appointments = vec![
            appointment(9, 8, 0),
            appointment(9, 10, 0),
            appointment(9, 14, 0),
        ];

        let next = next_appointment(&appointments, at(9, 9, 0)).unwrap();
        assert_eq!(next.formatted_hour(), "10:00");

        // An appointment starting exactly now is not "next"
        let next = next_appointment(&appointments, at(9, 14, 0));
        assert!(next.is_none());

        assert!(next_appointment(&[], at(9, 9, 0)).is_none());
    }
}
