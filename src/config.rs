//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The product name sent as the HTTP `User-Agent` by the [`BookingClient`](crate::client::BookingClient).
/// Feel free to override it when initing this library.
pub static PRODUCT_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("FrontDesk".to_string())));

pub(crate) fn user_agent() -> String {
    match PRODUCT_NAME.lock() {
        Ok(name) => name.clone(),
        Err(_) => "FrontDesk".to_string(),
    }
}
