//! Authentication models

use serde::{Deserialize, Serialize};

use super::{EntityId, Extra};

/// Credentials posted to the login endpoint
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,

    #[serde(rename = "senha")]
    pub password: String,
}

/// Login response. A missing `token` means no session is created.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of `POST /auth/register-admin`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterAdminRequest {
    #[serde(rename = "nome")]
    pub name: String,

    pub email: String,

    #[serde(rename = "senha")]
    pub password: String,

    #[serde(rename = "telefone")]
    pub phone: String,

    pub cpf: String,
}

impl RegisterAdminRequest {
    /// Names of the fields left blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("nome", &self.name),
            ("email", &self.email),
            ("senha", &self.password),
            ("telefone", &self.phone),
            ("cpf", &self.cpf),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Answer of the "who am I" endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminProfile {
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ProfileUser>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Signed-in account as described by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUser {
    #[serde(default)]
    pub id: EntityId,

    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl AdminProfile {
    /// Best available label for the signed-in account
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        user.name.clone().or_else(|| user.email.clone())
    }
}
