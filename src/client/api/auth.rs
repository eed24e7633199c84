//! Authentication API trait

use async_trait::async_trait;

use crate::client::SessionState;
use crate::client::models::{AdminProfile, LoginResponse, RegisterAdminRequest};
use crate::error::Result;
use crate::navigation::Route;

/// Session lifecycle operations
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a token and store it as the active session.
    ///
    /// A response without a token leaves the session store untouched.
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse>;

    /// Drop the active session. No network call; always succeeds in clearing.
    async fn logout(&self) -> Result<Route>;

    /// Ask the backend whether the stored token belongs to an admin
    async fn verify_session(&self) -> Result<SessionState>;

    /// Profile of the token owner (`/auth/verify`)
    async fn verify_user(&self) -> Result<Option<AdminProfile>>;

    /// Create an administrator account
    async fn register_admin(&self, request: &RegisterAdminRequest)
    -> Result<Option<serde_json::Value>>;
}
