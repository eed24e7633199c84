//! Aggregates computed locally from listed resources
//!
//! Everything here is a pure function over already-fetched data. Callers
//! pass "today" explicitly so results do not depend on the wall clock.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::client::models::time::parse_date;
use crate::client::models::{Appointment, AppointmentStatus, Barber, Customer, Review};

/// Estimated ticket for a concluded appointment, in reais
pub const REVENUE_PER_CONCLUDED: u64 = 35;

/// Appointment counts per status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppointmentStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub concluded: usize,
    pub cancelled: usize,
}

impl AppointmentStats {
    pub fn count(&self, status: AppointmentStatus) -> usize {
        match status {
            AppointmentStatus::Pendente => self.pending,
            AppointmentStatus::Confirmado => self.confirmed,
            AppointmentStatus::Concluido => self.concluded,
            AppointmentStatus::Cancelado => self.cancelled,
        }
    }
}

pub fn appointment_stats<'a>(
    appointments: impl IntoIterator<Item = &'a Appointment>,
) -> AppointmentStats {
    let mut stats = AppointmentStats::default();
    for appointment in appointments {
        stats.total += 1;
        match appointment.status_kind() {
            Some(AppointmentStatus::Pendente) => stats.pending += 1,
            Some(AppointmentStatus::Confirmado) => stats.confirmed += 1,
            Some(AppointmentStatus::Concluido) => stats.concluded += 1,
            Some(AppointmentStatus::Cancelado) => stats.cancelled += 1,
            None => {}
        }
    }
    stats
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub appointments: usize,
    pub customers: usize,
    pub barbers: usize,
    pub appointments_today: usize,
}

pub fn dashboard_summary(
    appointments: &[Appointment],
    customers: &[Customer],
    barbers: &[Barber],
    today: NaiveDate,
) -> DashboardSummary {
    DashboardSummary {
        appointments: appointments.len(),
        customers: customers.iter().filter(|c| c.is_customer()).count(),
        barbers: barbers.len(),
        appointments_today: appointments
            .iter()
            .filter(|a| a.date.as_deref().and_then(parse_date) == Some(today))
            .count(),
    }
}

/// Review totals, mean rating and rating distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewStats {
    pub total: usize,
    /// Mean over rated reviews, rounded to one decimal; 0 when none is rated
    pub average: f64,
    /// Reviews without a rating
    pub unrated: usize,
    pub with_comment: usize,
    pub without_comment: usize,
    /// Count per rating, always keyed 1 through 5
    pub distribution: BTreeMap<u8, usize>,
}

impl Default for ReviewStats {
    fn default() -> Self {
        Self {
            total: 0,
            average: 0.0,
            unrated: 0,
            with_comment: 0,
            without_comment: 0,
            distribution: (1..=5).map(|rating| (rating, 0)).collect(),
        }
    }
}

pub fn review_stats(reviews: &[Review]) -> ReviewStats {
    let mut stats = ReviewStats::default();
    let mut sum: u64 = 0;
    let mut rated: usize = 0;

    for review in reviews {
        stats.total += 1;

        if review.has_comment() {
            stats.with_comment += 1;
        } else {
            stats.without_comment += 1;
        }

        let Some(rating) = review.rating else {
            stats.unrated += 1;
            continue;
        };
        rated += 1;
        sum += u64::from(rating);
        if let Some(count) = stats.distribution.get_mut(&rating) {
            *count += 1;
        }
    }

    if rated > 0 {
        let mean = sum as f64 / rated as f64;
        stats.average = (mean * 10.0).round() / 10.0;
    }
    stats
}

/// A customer's appointment history
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerActivity {
    pub appointments: usize,
    pub latest: Option<Appointment>,
    pub by_status: AppointmentStats,
    /// Concluded appointments × [`REVENUE_PER_CONCLUDED`]
    pub estimated_revenue: u64,
}

/// Whether an appointment belongs to `customer`, matching email or phone exactly.
/// Blank contact fields never match.
pub fn belongs_to(appointment: &Appointment, customer: &Customer) -> bool {
    fn same(a: Option<&str>, b: Option<&str>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => !a.trim().is_empty() && a == b,
            _ => false,
        }
    }

    same(appointment.email.as_deref(), customer.email.as_deref())
        || same(appointment.phone.as_deref(), customer.phone.as_deref())
}

pub fn customer_activity(customer: &Customer, appointments: &[Appointment]) -> CustomerActivity {
    let own: Vec<&Appointment> = appointments
        .iter()
        .filter(|a| belongs_to(a, customer))
        .collect();

    let by_status = appointment_stats(own.iter().copied());

    // Latest by creation time; ties keep the first seen
    let latest = own
        .iter()
        .copied()
        .filter(|a| a.created_instant().is_some())
        .fold(None::<&Appointment>, |best, a| match best {
            Some(b) if b.created_instant() >= a.created_instant() => Some(b),
            _ => Some(a),
        })
        .or_else(|| own.first().copied())
        .cloned();

    CustomerActivity {
        appointments: own.len(),
        latest,
        estimated_revenue: by_status.concluded as u64 * REVENUE_PER_CONCLUDED,
        by_status,
    }
}

/// Active/inactive barber counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BarberStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

pub fn barber_stats(barbers: &[Barber]) -> BarberStats {
    let active = barbers.iter().filter(|b| b.is_active()).count();
    BarberStats {
        total: barbers.len(),
        active,
        inactive: barbers.len() - active,
    }
}
