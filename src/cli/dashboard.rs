//! Dashboard command

use chrono::{NaiveDate, Utc};
use colored::Colorize;
use log::warn;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::{AuthApi, ListingApi, SessionState};
use crate::error::{ApiError, Error, Result};
use crate::insights::{DashboardSummary, dashboard_summary};
use crate::models::Describe;
use crate::output::{self, Detail};

/// Dashboard headline numbers plus who is looking at them
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub admin: Option<String>,
    pub today: NaiveDate,
    #[serde(flatten)]
    pub summary: DashboardSummary,
}

impl Describe for DashboardReport {
    fn describe(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("Date", self.today.format("%d/%m/%Y").to_string())];
        fields.extend(self.summary.describe());
        fields
    }
}

/// Run the dashboard command
pub async fn run(opts: &GlobalOptions, remote: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    if remote {
        let payload = client.dashboard().await?.unwrap_or(serde_json::Value::Null);
        println!("{}", output::json::format_json(&payload)?);
        return Ok(());
    }

    let report = build_report(client.as_ref(), Utc::now().date_naive()).await?;

    if ctx.format == OutputFormat::Pretty {
        let greeting = match &report.admin {
            Some(name) => format!("Welcome back, {}", name),
            None => "Welcome back".to_string(),
        };
        println!("{}\n", greeting.bold());
    }
    output::print(&Detail(&report), ctx.format)
}

/// Fetch everything the dashboard needs concurrently.
///
/// A failed fetch counts as an empty collection so one broken endpoint does
/// not blank the whole dashboard. An expired session still aborts.
pub async fn build_report<A>(api: &A, today: NaiveDate) -> Result<DashboardReport>
where
    A: ListingApi + AuthApi + ?Sized,
{
    let (appointments, customers, barbers, session) = futures::join!(
        api.list_appointments(),
        api.list_customers(),
        api.list_barbers(),
        api.verify_session(),
    );

    let appointments = or_empty("appointments", appointments)?;
    let customers = or_empty("customers", customers)?;
    let barbers = or_empty("barbers", barbers)?;
    let profile = or_empty(
        "profile",
        session.map(|state| match state {
            SessionState::Authenticated { profile } => Some(profile),
            SessionState::Anonymous => None,
        }),
    )?;

    Ok(DashboardReport {
        admin: profile.and_then(|p| p.display_name()),
        today,
        summary: dashboard_summary(&appointments, &customers, &barbers, today),
    })
}

fn or_empty<T: Default>(what: &str, result: Result<T>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(Error::Api(ApiError::SessionExpired)) => Err(ApiError::SessionExpired.into()),
        Err(e) => {
            warn!("Could not load {} for the dashboard: {}", what, e);
            Ok(T::default())
        }
    }
}
