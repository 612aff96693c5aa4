//! An in-memory schedule source, for tests and offline demos

use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::appointment::Appointment;
use crate::availability::DayAvailability;
use crate::mock_behaviour::MockBehaviour;
use crate::month::Month;
use crate::traits::ScheduleSource;

/// A [`ScheduleSource`] that serves canned data instead of reaching a server.
///
/// Months and days with no canned payload resolve to empty lists, like a
/// provider nobody has booked yet. Clones share the same canned data, so a
/// test can keep a handle and reprogram payloads while the engine owns its
/// own copy. Failures can be injected through a shared [`MockBehaviour`].
#[derive(Clone, Default)]
pub struct MockScheduleSource {
    data: Arc<Mutex<MockData>>,
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

#[derive(Default)]
struct MockData {
    availability: HashMap<Month, Vec<DayAvailability>>,
    appointments: HashMap<NaiveDate, Vec<Appointment>>,
}

impl MockScheduleSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose fetches obey (and consume) the given behaviour tweaks
    pub fn new_with_behaviour(mock_behaviour: Arc<Mutex<MockBehaviour>>) -> Self {
        Self {
            data: Arc::new(Mutex::new(MockData::default())),
            mock_behaviour: Some(mock_behaviour),
        }
    }

    /// Program the availability payload served for a month
    pub fn set_availability(&self, month: Month, days: Vec<DayAvailability>) {
        if let Ok(mut data) = self.data.lock() {
            data.availability.insert(month, days);
        }
    }

    /// Program the appointment list served for a day.
    /// Keep it chronologically ascending, the way real servers deliver it
    pub fn set_appointments(&self, day: NaiveDate, appointments: Vec<Appointment>) {
        if let Ok(mut data) = self.data.lock() {
            data.appointments.insert(day, appointments);
        }
    }
}

#[async_trait]
impl ScheduleSource for MockScheduleSource {
    async fn fetch_month_availability(&self, month: Month) -> Result<Vec<DayAvailability>, Box<dyn Error>> {
        if let Some(behaviour) = &self.mock_behaviour {
            behaviour.lock().unwrap().can_fetch_availability()?;
        }

        let data = self.data.lock().unwrap();
        Ok(data.availability.get(&month).cloned().unwrap_or_default())
    }

    async fn fetch_day_appointments(&self, day: NaiveDate) -> Result<Vec<Appointment>, Box<dyn Error>> {
        if let Some(behaviour) = &self.mock_behaviour {
            behaviour.lock().unwrap().can_fetch_appointments()?;
        }

        let data = self.data.lock().unwrap();
        Ok(data.appointments.get(&day).cloned().unwrap_or_default())
    }
}
