//! Mutation API trait

use async_trait::async_trait;

use crate::client::models::{AppointmentStatus, BarberForm, StatusUpdateResponse};
use crate::error::Result;

/// Create, update and delete operations
#[async_trait]
pub trait MutationApi: Send + Sync {
    async fn update_appointment_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<StatusUpdateResponse>;

    async fn create_barber(&self, form: &BarberForm) -> Result<Option<serde_json::Value>>;

    async fn update_barber(&self, id: &str, form: &BarberForm)
    -> Result<Option<serde_json::Value>>;

    /// Flip a barber between active and inactive
    async fn toggle_barber_status(&self, id: &str) -> Result<Option<serde_json::Value>>;

    async fn delete_barber(&self, id: &str) -> Result<()>;
}
