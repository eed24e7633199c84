//! Customer (user account) models

use serde::{Deserialize, Serialize};

use super::{EntityId, Extra};

/// Registered user (`/usuarios`). Most are shop customers; admins are
/// returned by the same endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: EntityId,

    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "telefone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,

    /// Account type (`cliente` or `admin`)
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(rename = "isAdmin", default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,

    #[serde(rename = "criadoEm", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Customer {
    /// Whether the account is a shop customer (as opposed to an admin)
    pub fn is_customer(&self) -> bool {
        self.kind.as_deref() == Some(CustomerKind::Cliente.as_str())
    }
}

/// Account type filter values
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CustomerKind {
    Cliente,
    Admin,
}

impl CustomerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CustomerKind::Cliente => "cliente",
            CustomerKind::Admin => "admin",
        }
    }
}
