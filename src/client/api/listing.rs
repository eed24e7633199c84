//! Listing API trait for collection operations

use async_trait::async_trait;

use crate::client::models::{Appointment, Barber, Customer, Review};
use crate::error::Result;

/// Collection listing operations.
///
/// A list endpoint that answers 204 or 404 yields an empty collection.
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// Aggregate dashboard payload (`/admin/dashboard`), passed through as-is
    async fn dashboard(&self) -> Result<Option<serde_json::Value>>;

    async fn list_appointments(&self) -> Result<Vec<Appointment>>;

    async fn list_customers(&self) -> Result<Vec<Customer>>;

    async fn list_barbers(&self) -> Result<Vec<Barber>>;

    /// Every review, with the reviewed appointment embedded
    async fn list_reviews(&self) -> Result<Vec<Review>>;
}
