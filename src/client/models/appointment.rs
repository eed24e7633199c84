//! Appointment models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::time::parse_instant;
use super::{EntityId, Extra};

/// Appointment (`/agendamentos`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default)]
    pub id: EntityId,

    /// Customer name
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "telefone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(rename = "servico", default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Barber name
    #[serde(rename = "profissional", default, skip_serializing_if = "Option::is_none")]
    pub barber: Option<String>,

    /// Appointment day (`YYYY-MM-DD`)
    #[serde(rename = "data", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(rename = "horario", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Raw status as sent by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "observacoes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(rename = "criadoEm", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(rename = "atualizadoEm", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Appointment {
    /// Parsed status, `None` when absent or not one of the known values
    pub fn status_kind(&self) -> Option<AppointmentStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn created_instant(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_instant)
    }

    /// Appointment day, falling back to the creation time when the day is
    /// missing
    pub fn scheduled_or_created(&self) -> Option<&str> {
        self.date.as_deref().or(self.created_at.as_deref())
    }
}

/// Lifecycle of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum AppointmentStatus {
    /// Awaiting confirmation
    Pendente,
    /// Confirmed by the shop
    Confirmado,
    /// Service delivered
    Concluido,
    /// Cancelled
    Cancelado,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Pendente,
        AppointmentStatus::Confirmado,
        AppointmentStatus::Concluido,
        AppointmentStatus::Cancelado,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pendente => "pendente",
            AppointmentStatus::Confirmado => "confirmado",
            AppointmentStatus::Concluido => "concluido",
            AppointmentStatus::Cancelado => "cancelado",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == lowered)
            .ok_or_else(|| format!("unknown appointment status '{}'", s))
    }
}

/// Body of `PATCH /agendamentos/:id`
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: String,
}

impl From<AppointmentStatus> for StatusUpdate {
    fn from(status: AppointmentStatus) -> Self {
        Self {
            status: status.as_str().to_string(),
        }
    }
}

/// Response of a status update. Some backends wrap the updated entity in
/// `agendamento`, others return a bare acknowledgement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusUpdateResponse {
    #[serde(rename = "agendamento", default)]
    pub appointment: Option<Appointment>,

    #[serde(flatten)]
    pub extra: Extra,
}
