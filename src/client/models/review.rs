//! Review models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::time::parse_instant;
use super::{Appointment, EntityId, Extra};

/// Customer review of an appointment (`/avaliacoes`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: EntityId,

    /// Rating from 1 to 5; absent or null when the backend has none
    #[serde(rename = "nota", default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,

    #[serde(rename = "comentario", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(rename = "criadoEm", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Reviewed appointment, embedded by the admin listing
    #[serde(rename = "agendamento", default, skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Appointment>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Review {
    /// Whether the review carries a non-blank comment
    pub fn has_comment(&self) -> bool {
        self.comment.as_deref().is_some_and(|c| !c.trim().is_empty())
    }

    pub fn created_instant(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_instant)
    }
}
