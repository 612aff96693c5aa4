//! Feedback about store refreshes, for UI collaborators

use std::fmt::{Display, Error, Formatter};

/// The two stores a fetch can target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    /// The month-availability store
    Availability,
    /// The day-appointments store
    Appointments,
}

impl Display for StoreKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Self::Availability => write!(f, "availability"),
            Self::Appointments => write!(f, "appointments"),
        }
    }
}

/// An event that happens while the engine refreshes its stores
#[derive(Clone, Debug, PartialEq)]
pub enum AgendaEvent {
    /// Nothing has happened yet
    Idle,
    /// A fetch for this store has started
    Refreshing { store: StoreKind },
    /// This store has been replaced with a fresh generation
    Refreshed { store: StoreKind },
    /// A fetch failed. The previous store contents are kept in place;
    /// UI collaborators are expected to surface this as a non-fatal notification
    FetchFailed { store: StoreKind },
    /// A response arrived for a month/day that is no longer current, and was dropped
    StaleDiscarded { store: StoreKind },
}

impl Display for AgendaEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            AgendaEvent::Idle => write!(f, "Idle"),
            AgendaEvent::Refreshing { store } => write!(f, "Refreshing the {} store...", store),
            AgendaEvent::Refreshed { store } => write!(f, "The {} store has been refreshed", store),
            AgendaEvent::FetchFailed { store } => write!(f, "Fetch failed for the {} store", store),
            AgendaEvent::StaleDiscarded { store } => write!(f, "Discarded a stale {} response", store),
        }
    }
}

impl Default for AgendaEvent {
    fn default() -> Self {
        Self::Idle
    }
}

/// See [`notify_channel`]
pub type NotifySender = tokio::sync::watch::Sender<AgendaEvent>;
/// See [`notify_channel`]
pub type NotifyReceiver = tokio::sync::watch::Receiver<AgendaEvent>;

/// Create a feedback channel, that can be used to observe the engine's refreshes
/// (e.g. to drive a toast notification on fetch failures)
pub fn notify_channel() -> (NotifySender, NotifyReceiver) {
    tokio::sync::watch::channel(AgendaEvent::default())
}
