//! Mock Agendou API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use super::SessionState;
use super::api::{AuthApi, DetailApi, ListingApi, MutationApi};
use super::models::{
    AdminProfile, Appointment, AppointmentStatus, Barber, BarberForm, Customer, EntityId,
    LoginResponse, RegisterAdminRequest, Review, StatusUpdateResponse,
};
use crate::error::{ApiError, Result};
use crate::navigation::Route;

/// Mock API client for testing.
///
/// Configure canned data via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockAgendouClient::new()
///     .with_barbers(vec![barber("1", "João", true)])
///     .await;
///
/// let barbers = mock.list_barbers().await?;
/// assert_eq!(barbers.len(), 1);
/// ```
#[derive(Default)]
pub struct MockAgendouClient {
    appointments: Arc<Mutex<Vec<Appointment>>>,
    customers: Arc<Mutex<Vec<Customer>>>,
    barbers: Arc<Mutex<Vec<Barber>>>,
    reviews: Arc<Mutex<Vec<Review>>>,
    /// Profile returned by the verify endpoints; `None` means anonymous
    profile: Arc<Mutex<Option<AdminProfile>>>,
    dashboard: Arc<Mutex<Option<Value>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Operations that fail with a 500 on every call
    failing: Arc<Mutex<HashSet<&'static str>>>,
    /// Names of the operations called, in order
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl MockAgendouClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_appointments(self, appointments: Vec<Appointment>) -> Self {
        *self.appointments.lock().await = appointments;
        self
    }

    pub async fn with_customers(self, customers: Vec<Customer>) -> Self {
        *self.customers.lock().await = customers;
        self
    }

    pub async fn with_barbers(self, barbers: Vec<Barber>) -> Self {
        *self.barbers.lock().await = barbers;
        self
    }

    pub async fn with_reviews(self, reviews: Vec<Review>) -> Self {
        *self.reviews.lock().await = reviews;
        self
    }

    /// Configure the signed-in admin returned by the verify endpoints.
    pub async fn with_profile(self, profile: AdminProfile) -> Self {
        *self.profile.lock().await = Some(profile);
        self
    }

    pub async fn with_dashboard(self, payload: Value) -> Self {
        *self.dashboard.lock().await = Some(payload);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Make every call to `operation` fail with a backend 500.
    pub async fn failing(self, operation: &'static str) -> Self {
        self.failing.lock().await.insert(operation);
        self
    }

    /// Operations called so far, in order.
    pub async fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().await.clone()
    }

    /// Record the call, then surface any configured error.
    async fn enter(&self, operation: &'static str) -> Result<()> {
        self.calls.lock().await.push(operation);

        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        if self.failing.lock().await.contains(operation) {
            return Err(ApiError::from_status(500).into());
        }
        Ok(())
    }
}

fn same_id(id: &EntityId, wanted: &str) -> bool {
    id.to_string() == wanted
}

// ============================================================================
// AuthApi Implementation
// ============================================================================

#[async_trait]
impl AuthApi for MockAgendouClient {
    async fn login(&self, _email: &str, _password: &str) -> Result<LoginResponse> {
        self.enter("login").await?;
        Ok(LoginResponse {
            token: Some("mock-token".to_string()),
            ..LoginResponse::default()
        })
    }

    async fn logout(&self) -> Result<Route> {
        self.calls.lock().await.push("logout");
        Ok(Route::Login)
    }

    async fn verify_session(&self) -> Result<SessionState> {
        self.enter("verify_session").await?;
        Ok(match self.profile.lock().await.clone() {
            Some(profile) => SessionState::Authenticated { profile },
            None => SessionState::Anonymous,
        })
    }

    async fn verify_user(&self) -> Result<Option<AdminProfile>> {
        self.enter("verify_user").await?;
        Ok(self.profile.lock().await.clone())
    }

    async fn register_admin(&self, request: &RegisterAdminRequest) -> Result<Option<Value>> {
        self.enter("register_admin").await?;
        Ok(Some(json!({"email": request.email})))
    }
}

// ============================================================================
// ListingApi Implementation
// ============================================================================

#[async_trait]
impl ListingApi for MockAgendouClient {
    async fn dashboard(&self) -> Result<Option<Value>> {
        self.enter("dashboard").await?;
        Ok(self.dashboard.lock().await.clone())
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        self.enter("list_appointments").await?;
        Ok(self.appointments.lock().await.clone())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.enter("list_customers").await?;
        Ok(self.customers.lock().await.clone())
    }

    async fn list_barbers(&self) -> Result<Vec<Barber>> {
        self.enter("list_barbers").await?;
        Ok(self.barbers.lock().await.clone())
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        self.enter("list_reviews").await?;
        Ok(self.reviews.lock().await.clone())
    }
}

// ============================================================================
// DetailApi Implementation
// ============================================================================

#[async_trait]
impl DetailApi for MockAgendouClient {
    async fn get_appointment(&self, id: &str) -> Result<Option<Appointment>> {
        self.enter("get_appointment").await?;
        let appointments = self.appointments.lock().await;
        Ok(appointments.iter().find(|a| same_id(&a.id, id)).cloned())
    }

    async fn get_customer(&self, id: &str) -> Result<Option<Customer>> {
        self.enter("get_customer").await?;
        let customers = self.customers.lock().await;
        Ok(customers.iter().find(|c| same_id(&c.id, id)).cloned())
    }

    async fn get_barber(&self, id: &str) -> Result<Option<Barber>> {
        self.enter("get_barber").await?;
        let barbers = self.barbers.lock().await;
        Ok(barbers.iter().find(|b| same_id(&b.id, id)).cloned())
    }

    async fn get_appointment_review(&self, appointment_id: &str) -> Result<Option<Review>> {
        self.enter("get_appointment_review").await?;
        let reviews = self.reviews.lock().await;
        Ok(reviews
            .iter()
            .find(|r| {
                r.appointment
                    .as_ref()
                    .is_some_and(|a| same_id(&a.id, appointment_id))
            })
            .cloned())
    }

    async fn barber_stats(&self) -> Result<Option<Value>> {
        self.enter("barber_stats").await?;
        let barbers = self.barbers.lock().await;
        let active = barbers.iter().filter(|b| b.is_active()).count();
        Ok(Some(json!({
            "total": barbers.len(),
            "ativos": active,
            "inativos": barbers.len() - active,
        })))
    }
}

// ============================================================================
// MutationApi Implementation
// ============================================================================

#[async_trait]
impl MutationApi for MockAgendouClient {
    async fn update_appointment_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<StatusUpdateResponse> {
        self.enter("update_appointment_status").await?;
        let mut appointments = self.appointments.lock().await;
        let appointment = appointments.iter_mut().find(|a| same_id(&a.id, id)).map(|a| {
            a.status = Some(status.as_str().to_string());
            a.clone()
        });
        Ok(StatusUpdateResponse {
            appointment,
            ..StatusUpdateResponse::default()
        })
    }

    async fn create_barber(&self, form: &BarberForm) -> Result<Option<Value>> {
        self.enter("create_barber").await?;
        let mut barbers = self.barbers.lock().await;
        let id = EntityId::Number(barbers.len() as i64 + 1);
        let barber = Barber {
            id,
            name: Some(form.name.clone()),
            specialty: form.specialty.clone(),
            phone: form.phone.clone(),
            email: form.email.clone(),
            photo: form.photo.clone(),
            active: Some(true),
            created_at: None,
            extra: Default::default(),
        };
        let value = serde_json::to_value(&barber)?;
        barbers.push(barber);
        Ok(Some(value))
    }

    async fn update_barber(&self, id: &str, form: &BarberForm) -> Result<Option<Value>> {
        self.enter("update_barber").await?;
        let mut barbers = self.barbers.lock().await;
        match barbers.iter_mut().find(|b| same_id(&b.id, id)) {
            Some(barber) => {
                barber.name = Some(form.name.clone());
                barber.specialty = form.specialty.clone();
                barber.phone = form.phone.clone();
                barber.email = form.email.clone();
                barber.photo = form.photo.clone();
                Ok(Some(serde_json::to_value(&*barber)?))
            }
            None => Ok(None),
        }
    }

    async fn toggle_barber_status(&self, id: &str) -> Result<Option<Value>> {
        self.enter("toggle_barber_status").await?;
        let mut barbers = self.barbers.lock().await;
        match barbers.iter_mut().find(|b| same_id(&b.id, id)) {
            Some(barber) => {
                barber.active = Some(!barber.is_active());
                Ok(Some(serde_json::to_value(&*barber)?))
            }
            None => Ok(None),
        }
    }

    async fn delete_barber(&self, id: &str) -> Result<()> {
        self.enter("delete_barber").await?;
        self.barbers.lock().await.retain(|b| !same_id(&b.id, id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn barber(id: i64, name: &str, active: bool) -> Barber {
        serde_json::from_value(json!({"id": id, "nome": name, "ativo": active})).unwrap()
    }

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockAgendouClient::new();

        assert!(mock.list_appointments().await.unwrap().is_empty());
        assert!(mock.list_barbers().await.unwrap().is_empty());
        assert!(!mock.verify_session().await.unwrap().is_authenticated());
    }

    #[tokio::test]
    async fn test_mock_client_with_error_is_consumed() {
        let mock = MockAgendouClient::new()
            .with_error(ApiError::SessionExpired)
            .await;

        assert!(mock.list_customers().await.is_err());
        assert!(mock.list_customers().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_failing_operation() {
        let mock = MockAgendouClient::new().failing("list_reviews").await;

        assert!(mock.list_reviews().await.is_err());
        assert!(mock.list_reviews().await.is_err());
        assert!(mock.list_barbers().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_barber_lifecycle() {
        let mock = MockAgendouClient::new()
            .with_barbers(vec![barber(1, "João", true)])
            .await;

        mock.toggle_barber_status("1").await.unwrap();
        assert!(!mock.get_barber("1").await.unwrap().unwrap().is_active());

        mock.delete_barber("1").await.unwrap();
        assert!(mock.get_barber("1").await.unwrap().is_none());

        assert_eq!(
            mock.calls().await,
            vec!["toggle_barber_status", "get_barber", "delete_barber", "get_barber"]
        );
    }
}
