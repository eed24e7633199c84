//! Filter argument types for CLI commands

use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;

use crate::client::models::{AppointmentStatus, CustomerKind};
use crate::error::{Error, Result};
use crate::listing::{
    AppointmentFilter, AppointmentSort, BarberFilter, BarberSort, CommentFilter, CustomerFilter,
    CustomerSort, Period, ReviewFilter, ReviewSort,
};

/// Appointment list filters
#[derive(Debug, Clone, Args, Default)]
pub struct AppointmentFilterArgs {
    /// Search customer, service, barber or id (case-insensitive)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only appointments with this status
    #[arg(long, value_enum)]
    pub status: Option<AppointmentStatus>,

    /// Field to sort by
    #[arg(long, value_enum, default_value_t = AppointmentSort::Id)]
    pub sort_by: AppointmentSort,
}

impl AppointmentFilterArgs {
    pub fn to_filter(&self) -> AppointmentFilter {
        AppointmentFilter {
            search: self.search.clone(),
            status: self.status,
        }
    }
}

/// Client list filters
#[derive(Debug, Clone, Args, Default)]
pub struct CustomerFilterArgs {
    /// Search name, email, phone or id (case-insensitive)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only accounts of this type
    #[arg(long = "kind", value_enum)]
    pub kind: Option<CustomerKind>,

    /// Field to sort by
    #[arg(long, value_enum, default_value_t = CustomerSort::Id)]
    pub sort_by: CustomerSort,
}

impl CustomerFilterArgs {
    pub fn to_filter(&self) -> CustomerFilter {
        CustomerFilter {
            search: self.search.clone(),
            kind: self.kind,
        }
    }
}

/// Barber list filters
#[derive(Debug, Clone, Args, Default)]
pub struct BarberFilterArgs {
    /// Search name, specialty or id (case-insensitive)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only active barbers
    #[arg(long, conflicts_with = "inactive")]
    pub active: bool,

    /// Only inactive barbers
    #[arg(long)]
    pub inactive: bool,

    /// Field to sort by
    #[arg(long, value_enum, default_value_t = BarberSort::Id)]
    pub sort_by: BarberSort,
}

impl BarberFilterArgs {
    pub fn to_filter(&self) -> BarberFilter {
        let active = match (self.active, self.inactive) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        BarberFilter {
            search: self.search.clone(),
            active,
        }
    }
}

/// Relative review periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PeriodArg {
    /// Today
    Hoje,
    /// Last seven days
    Semana,
    /// Last month
    Mes,
}

/// Review list filters
#[derive(Debug, Clone, Args, Default)]
pub struct ReviewFilterArgs {
    /// Only reviews with this rating
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,

    /// Only reviews with (com) or without (sem) a comment
    #[arg(long, value_enum)]
    pub comment: Option<CommentFilter>,

    /// Relative creation period
    #[arg(long, value_enum, conflicts_with_all = ["from", "to"])]
    pub period: Option<PeriodArg>,

    /// Start of a custom period (YYYY-MM-DD, inclusive)
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// End of a custom period (YYYY-MM-DD, inclusive)
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Field to sort by
    #[arg(long, value_enum, default_value_t = ReviewSort::Data)]
    pub sort_by: ReviewSort,
}

impl ReviewFilterArgs {
    /// Build the filter, evaluating relative periods against `now`
    pub fn to_filter(&self, now: DateTime<Utc>) -> Result<ReviewFilter> {
        let period = match (self.period, self.from, self.to) {
            (Some(PeriodArg::Hoje), _, _) => Some(Period::Today),
            (Some(PeriodArg::Semana), _, _) => Some(Period::Week),
            (Some(PeriodArg::Mes), _, _) => Some(Period::Month),
            (None, Some(from), Some(to)) => {
                if from > to {
                    return Err(Error::Other(format!(
                        "--from ({}) must not be after --to ({})",
                        from, to
                    )));
                }
                Some(Period::Range { from, to })
            }
            _ => None,
        };

        Ok(ReviewFilter {
            rating: self.rating,
            comment: self.comment,
            period,
            now,
        })
    }
}
