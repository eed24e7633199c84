//! Barber display model

use tabled::Tabled;

use super::{Describe, Row};
use crate::client::models::Barber;
use crate::output::formatters::{format_date, or_na};

/// Barber display model for table output.
#[derive(Debug, Clone, Tabled)]
pub struct BarberDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "SPECIALTY")]
    pub specialty: String,

    #[tabled(rename = "PHONE")]
    pub phone: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

fn status_label(active: bool) -> String {
    let label = if active { "active" } else { "inactive" };
    label.to_string()
}

impl From<&Barber> for BarberDisplay {
    fn from(barber: &Barber) -> Self {
        Self {
            id: barber.id.to_string(),
            name: or_na(barber.name.as_deref()),
            specialty: or_na(barber.specialty.as_deref()),
            phone: or_na(barber.phone.as_deref()),
            status: status_label(barber.is_active()),
        }
    }
}

impl Row for Barber {
    type Display = BarberDisplay;

    fn row(&self) -> BarberDisplay {
        BarberDisplay::from(self)
    }
}

impl Describe for Barber {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Name", or_na(self.name.as_deref())),
            ("Specialty", or_na(self.specialty.as_deref())),
            ("Phone", or_na(self.phone.as_deref())),
            ("Email", or_na(self.email.as_deref())),
            ("Photo", or_na(self.photo.as_deref())),
            ("Status", status_label(self.is_active())),
            ("Since", format_date(self.created_at.as_deref())),
        ]
    }
}
