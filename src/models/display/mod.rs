//! Display model implementations for table and pretty output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names. JSON output bypasses them and serializes
//! the API types directly.

use tabled::Tabled;

mod appointment;
mod barber;
mod customer;
mod insights;
mod profile;
mod review;

pub use appointment::AppointmentDisplay;
pub use barber::BarberDisplay;
pub use customer::CustomerDisplay;
pub use review::ReviewDisplay;

/// Types shown as one table row in list output
pub trait Row {
    type Display: Tabled;

    fn row(&self) -> Self::Display;
}

/// Types shown as labelled fields in detail output
pub trait Describe {
    fn describe(&self) -> Vec<(&'static str, String)>;
}
