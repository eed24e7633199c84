//! Labelled views of locally computed aggregates

use super::Describe;
use crate::insights::{
    AppointmentStats, BarberStats, CustomerActivity, DashboardSummary, ReviewStats,
};
use crate::output::formatters::{format_currency, format_date, or_na};

impl Describe for DashboardSummary {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Appointments", self.appointments.to_string()),
            ("Appointments today", self.appointments_today.to_string()),
            ("Customers", self.customers.to_string()),
            ("Barbers", self.barbers.to_string()),
        ]
    }
}

impl Describe for AppointmentStats {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total", self.total.to_string()),
            ("Pending", self.pending.to_string()),
            ("Confirmed", self.confirmed.to_string()),
            ("Concluded", self.concluded.to_string()),
            ("Cancelled", self.cancelled.to_string()),
        ]
    }
}

impl Describe for ReviewStats {
    fn describe(&self) -> Vec<(&'static str, String)> {
        const STAR_LABELS: [&str; 5] = ["1 star", "2 stars", "3 stars", "4 stars", "5 stars"];

        let mut fields = vec![
            ("Reviews", self.total.to_string()),
            ("Average", format!("{:.1}/5", self.average)),
            ("Unrated", self.unrated.to_string()),
            ("With comment", self.with_comment.to_string()),
            ("Without comment", self.without_comment.to_string()),
        ];
        for (rating, label) in (1u8..=5).zip(STAR_LABELS).rev() {
            let count = self.distribution.get(&rating).copied().unwrap_or(0);
            fields.push((label, count.to_string()));
        }
        fields
    }
}

impl Describe for BarberStats {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Barbers", self.total.to_string()),
            ("Active", self.active.to_string()),
            ("Inactive", self.inactive.to_string()),
        ]
    }
}

impl Describe for CustomerActivity {
    fn describe(&self) -> Vec<(&'static str, String)> {
        let latest = self.latest.as_ref();
        vec![
            ("Appointments", self.appointments.to_string()),
            ("Concluded", self.by_status.concluded.to_string()),
            ("Pending", self.by_status.pending.to_string()),
            ("Cancelled", self.by_status.cancelled.to_string()),
            (
                "Latest appointment",
                format_date(latest.and_then(|a| a.scheduled_or_created())),
            ),
            ("Latest service", or_na(latest.and_then(|a| a.service.as_deref()))),
            ("Estimated revenue", format_currency(self.estimated_revenue)),
        ]
    }
}
