//! Barber models

use serde::{Deserialize, Serialize};

use super::{EntityId, Extra};

/// Barber (`/barbeiros`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barber {
    #[serde(default)]
    pub id: EntityId,

    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "especialidade", default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,

    #[serde(rename = "telefone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Photo URL
    #[serde(rename = "foto", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    /// Absent or null when the backend has no status for the barber
    #[serde(rename = "ativo", default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(rename = "criadoEm", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Barber {
    /// Only an explicit `ativo: true` counts as active
    pub fn is_active(&self) -> bool {
        self.active == Some(true)
    }
}

/// Body of `POST /barbeiros` and `PUT /barbeiros/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BarberForm {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "especialidade", skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,

    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "foto", skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl BarberForm {
    /// Form pre-filled from an existing barber, for partial updates
    pub fn from_barber(barber: &Barber) -> Self {
        Self {
            name: barber.name.clone().unwrap_or_default(),
            specialty: barber.specialty.clone(),
            phone: barber.phone.clone(),
            email: barber.email.clone(),
            photo: barber.photo.clone(),
        }
    }
}
