//! Appointment display model

use tabled::Tabled;

use super::{Describe, Row};
use crate::client::models::Appointment;
use crate::output::formatters::{format_date, format_datetime, or_na};

/// Appointment display model for table output.
#[derive(Debug, Clone, Tabled)]
pub struct AppointmentDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "CUSTOMER")]
    pub customer: String,

    #[tabled(rename = "SERVICE")]
    pub service: String,

    #[tabled(rename = "BARBER")]
    pub barber: String,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "TIME")]
    pub time: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<&Appointment> for AppointmentDisplay {
    fn from(appt: &Appointment) -> Self {
        Self {
            id: appt.id.to_string(),
            customer: or_na(appt.customer_name.as_deref()),
            service: or_na(appt.service.as_deref()),
            barber: or_na(appt.barber.as_deref()),
            date: format_date(appt.scheduled_or_created()),
            time: or_na(appt.time.as_deref()),
            status: or_na(appt.status.as_deref()),
        }
    }
}

impl Row for Appointment {
    type Display = AppointmentDisplay;

    fn row(&self) -> AppointmentDisplay {
        AppointmentDisplay::from(self)
    }
}

impl Describe for Appointment {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Customer", or_na(self.customer_name.as_deref())),
            ("Email", or_na(self.email.as_deref())),
            ("Phone", or_na(self.phone.as_deref())),
            ("Service", or_na(self.service.as_deref())),
            ("Barber", or_na(self.barber.as_deref())),
            ("Date", format_date(self.date.as_deref())),
            ("Time", or_na(self.time.as_deref())),
            ("Status", or_na(self.status.as_deref())),
            ("Notes", or_na(self.notes.as_deref())),
            ("Created", format_datetime(self.created_at.as_deref())),
            ("Updated", format_datetime(self.updated_at.as_deref())),
        ]
    }
}
