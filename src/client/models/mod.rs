//! Agendou API data models
//!
//! Typed views over the JSON payloads owned by the backend. The backend uses
//! Portuguese field names; each model maps them onto English Rust fields and
//! keeps any field it does not know about in `extra`, so a payload printed as
//! JSON comes out the way it went in.

mod appointment;
mod auth;
mod barber;
mod customer;
mod id;
mod review;
pub mod time;

pub use appointment::{Appointment, AppointmentStatus, StatusUpdate, StatusUpdateResponse};
pub use auth::{AdminProfile, LoginRequest, LoginResponse, ProfileUser, RegisterAdminRequest};
pub use barber::{Barber, BarberForm};
pub use customer::{Customer, CustomerKind};
pub use id::EntityId;
pub use review::Review;

/// Unmodelled fields carried alongside a typed payload
pub type Extra = serde_json::Map<String, serde_json::Value>;
