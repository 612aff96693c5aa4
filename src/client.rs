//! This module provides a schedule source that fetches its data from a booking server

use std::error::Error;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Local, NaiveDate};
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use url::Url;

use crate::appointment::{Appointment, AppointmentId};
use crate::availability::DayAvailability;
use crate::month::Month;
use crate::traits::ScheduleSource;

/// Wire format of one appointment, as returned by `GET /appointments/me`
#[derive(Deserialize)]
struct AppointmentBody {
    id: String,
    /// An ISO-8601 instant
    date: String,
    user: ClientBody,
}

#[derive(Deserialize)]
struct ClientBody {
    name: String,
    avatar_url: Url,
}

/// A [`ScheduleSource`] that fetches its data from a booking server over HTTP.
///
/// The provider id and the bearer token come from the session collaborator;
/// this client treats both as opaque.
pub struct BookingClient {
    base_url: Url,
    provider_id: String,
    auth_token: String,
}

impl BookingClient {
    /// Create a client. This does not start a connection.
    ///
    /// `base_url` should end with a `/` so that endpoint paths join under it.
    pub fn new<S: AsRef<str>, T: ToString, U: ToString>(base_url: S, provider_id: T, auth_token: U) -> Result<Self, Box<dyn Error>> {
        let base_url = Url::parse(base_url.as_ref())?;

        Ok(Self {
            base_url,
            provider_id: provider_id.to_string(),
            auth_token: auth_token.to_string(),
        })
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, Box<dyn Error>> {
        let mut url = self.base_url.join(path)?;
        for (key, value) in query {
            url.query_pairs_mut().append_pair(key, value);
        }

        let res = reqwest::Client::new()
            .get(url.as_str())
            .header(USER_AGENT, crate::config::user_agent())
            .bearer_auth(&self.auth_token)
            .send()
            .await?;

        if res.status().is_success() == false {
            return Err(format!("Server returned {} for {}", res.status(), path).into());
        }

        let text = res.text().await?;
        Ok(text)
    }
}

/// Turn a wire appointment into an [`Appointment`] snapshot.
///
/// A malformed date string invalidates that single record: it is dropped and
/// logged, it never aborts the whole fetch.
fn parse_appointment(body: AppointmentBody) -> Option<Appointment> {
    match DateTime::parse_from_rfc3339(&body.date) {
        Err(err) => {
            log::warn!("Dropping appointment {}: malformed date {:?} ({})", body.id, body.date, err);
            None
        },
        Ok(instant) => Some(Appointment::new(
            AppointmentId::from(body.id),
            instant.with_timezone(&Local),
            body.user.name,
            body.user.avatar_url,
        )),
    }
}

#[async_trait]
impl ScheduleSource for BookingClient {
    async fn fetch_month_availability(&self, month: Month) -> Result<Vec<DayAvailability>, Box<dyn Error>> {
        let path = format!("providers/{}/month-availability", self.provider_id);
        let text = self.get(&path, &[
            ("month", month.month().to_string()),
            ("year", month.year().to_string()),
        ]).await?;

        let days: Vec<DayAvailability> = serde_json::from_str(&text)?;
        log::debug!("Fetched availability for {}: {} entries", month, days.len());
        Ok(days)
    }

    async fn fetch_day_appointments(&self, day: NaiveDate) -> Result<Vec<Appointment>, Box<dyn Error>> {
        let text = self.get("appointments/me", &[
            ("day", day.day().to_string()),
            ("month", day.month().to_string()),
            ("year", day.year().to_string()),
        ]).await?;

        let bodies: Vec<AppointmentBody> = serde_json::from_str(&text)?;
        Ok(bodies.into_iter().filter_map(parse_appointment).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_dates_invalidate_only_their_own_record() {
        let payload = r#"[
            {"id": "a1", "date": "2020-11-09T08:00:00-03:00", "user": {"name": "Fulano", "avatar_url": "https://cdn.example.com/a.jpg"}},
            {"id": "a2", "date": "not-a-date", "user": {"name": "Beltrano", "avatar_url": "https://cdn.example.com/b.jpg"}},
            {"id": "a3", "date": "2020-11-09T14:00:00-03:00", "user": {"name": "Sicrano", "avatar_url": "https://cdn.example.com/c.jpg"}}
        ]"#;

        let bodies: Vec<AppointmentBody> = serde_json::from_str(payload).unwrap();
        let appointments: Vec<Appointment> = bodies.into_iter().filter_map(parse_appointment).collect();

        assert_eq!(appointments.len(), 2);
        assert_eq!(appointments[0].id().as_str(), "a1");
        assert_eq!(appointments[1].id().as_str(), "a3");
    }

    #[test]
    fn parsed_appointments_carry_their_display_hour() {
        let payload = r#"{"id": "a1", "date": "2020-11-09T10:30:00-03:00", "user": {"name": "Fulano", "avatar_url": "https://cdn.example.com/a.jpg"}}"#;
        let body: AppointmentBody = serde_json::from_str(payload).unwrap();

        let appointment = parse_appointment(body).unwrap();
        // The wire instant is converted to local time before the hour is formatted,
        // so only its structure can be asserted here
        assert_eq!(appointment.formatted_hour().len(), 5);
        assert_eq!(appointment.formatted_hour().as_bytes()[2], b':');
        assert_eq!(appointment.client_name(), "Fulano");
    }
}
