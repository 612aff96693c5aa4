//! Booked appointments, as displayed in the schedule panel

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Local, NaiveDate, Timelike};
use url::Url;

/// Opaque, unique appointment identifier, as issued by the booking server
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AppointmentId {
    content: String,
}

impl AppointmentId {
    /// Generate a random AppointmentId, the way servers mint them. Useful for mocked sources
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for AppointmentId {
    fn from(content: String) -> Self {
        Self { content }
    }
}

impl Display for AppointmentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// One booked appointment.
///
/// An `Appointment` is an immutable snapshot: it is built once when a fetch
/// completes, and is replaced wholesale along with the rest of its store
/// generation. The display hour is derived at that single point, never later.
#[derive(Clone, Debug, PartialEq)]
pub struct Appointment {
    /// The server-issued identifier
    id: AppointmentId,
    /// When the appointment takes place
    scheduled_at: DateTime<Local>,
    /// The display name of the client who booked, opaque to the engine
    client_name: String,
    /// The client's avatar, opaque to the engine
    client_avatar_url: Url,
    /// Display-only 24-hour `HH:MM` label, derived once at ingestion
    formatted_hour: String,
}

impl Appointment {
    /// Create an appointment snapshot, annotating it with its display hour
    pub fn new(id: AppointmentId, scheduled_at: DateTime<Local>, client_name: String, client_avatar_url: Url) -> Self {
        let formatted_hour = scheduled_at.format("%H:%M").to_string();
        Self { id, scheduled_at, client_name, client_avatar_url, formatted_hour }
    }

    pub fn id(&self) -> &AppointmentId { &self.id }
    pub fn scheduled_at(&self) -> DateTime<Local> { self.scheduled_at }
    pub fn client_name(&self) -> &str { &self.client_name }
    pub fn client_avatar_url(&self) -> &Url { &self.client_avatar_url }
    pub fn formatted_hour(&self) -> &str { &self.formatted_hour }

    /// The calendar day this appointment belongs to
    pub fn day(&self) -> NaiveDate {
        self.scheduled_at.naive_local().date()
    }

    /// Hour of day, 0 to 23
    pub fn hour(&self) -> u32 {
        self.scheduled_at.hour()
    }
}
