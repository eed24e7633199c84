//! Detail API trait for single-resource lookups

use async_trait::async_trait;

use crate::client::models::{Appointment, Barber, Customer, Review};
use crate::error::Result;

/// Single-resource lookups. `Ok(None)` means the backend answered 404.
#[async_trait]
pub trait DetailApi: Send + Sync {
    async fn get_appointment(&self, id: &str) -> Result<Option<Appointment>>;

    async fn get_customer(&self, id: &str) -> Result<Option<Customer>>;

    async fn get_barber(&self, id: &str) -> Result<Option<Barber>>;

    /// Review left for an appointment, if any
    async fn get_appointment_review(&self, appointment_id: &str) -> Result<Option<Review>>;

    /// Backend-computed barber statistics, passed through as-is
    async fn barber_stats(&self) -> Result<Option<serde_json::Value>>;
}
