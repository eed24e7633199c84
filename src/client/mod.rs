//! Agendou API client

use serde::Serialize;

use crate::navigation::Route;

pub mod agendou;
pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod request;

pub use agendou::AgendouClient;
pub use api::{AuthApi, DetailApi, ListingApi, MutationApi};
#[cfg(test)]
pub use mock::MockAgendouClient;
pub use models::AdminProfile;
pub use request::RequestOptions;

/// Full Agendou API surface.
///
/// Implemented automatically for any type that implements every sub-trait.
pub trait AgendouApi: AuthApi + ListingApi + DetailApi + MutationApi {}

impl<T> AgendouApi for T where T: AuthApi + ListingApi + DetailApi + MutationApi {}

/// Session status as confirmed by the backend
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SessionState {
    /// No token, or the backend rejected it
    Anonymous,
    /// Token accepted; carries the admin profile
    Authenticated { profile: AdminProfile },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    /// Where a visitor in this state belongs
    pub fn landing_route(&self) -> Route {
        match self {
            SessionState::Anonymous => Route::Login,
            SessionState::Authenticated { .. } => Route::Dashboard,
        }
    }
}
