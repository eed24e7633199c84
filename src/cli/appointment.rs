//! Appointment command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{AppointmentCommands, AppointmentFilterArgs, CommandContext, OutputFormat, PaginationArgs};
use crate::client::models::{Appointment, AppointmentStatus};
use crate::client::{DetailApi, ListingApi, MutationApi};
use crate::error::{Error, Result};
use crate::insights::appointment_stats;
use crate::output::{self, Detail};

/// Dispatch an appointment subcommand
pub async fn run(opts: &GlobalOptions, command: AppointmentCommands) -> Result<()> {
    match command {
        AppointmentCommands::List {
            filters,
            pagination,
        } => list(opts, &filters, &pagination).await,
        AppointmentCommands::Get { id, review } => get(opts, &id, review).await,
        AppointmentCommands::SetStatus { id, status } => set_status(opts, &id, status).await,
        AppointmentCommands::Stats => stats(opts).await,
    }
}

async fn list(
    opts: &GlobalOptions,
    filters: &AppointmentFilterArgs,
    pagination: &PaginationArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    run_list_command(
        &ctx,
        pagination,
        "appointments",
        &filters.to_filter(),
        filters.sort_by,
        |client| async move { client.list_appointments().await },
    )
    .await
}

async fn get(opts: &GlobalOptions, id: &str, with_review: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let appointment = client
        .get_appointment(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    output::print(&Detail(&appointment), ctx.format)?;

    if with_review {
        match client.get_appointment_review(id).await? {
            Some(review) => {
                if ctx.format == OutputFormat::Pretty {
                    println!("\n{}", "Review".bold());
                }
                output::print(&Detail(&review), ctx.format)?;
            }
            None if ctx.format == OutputFormat::Json => println!("null"),
            None => println!("\n{}", "No review for this appointment yet.".dimmed()),
        }
    }
    Ok(())
}

async fn set_status(opts: &GlobalOptions, id: &str, status: AppointmentStatus) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let updated = change_status(client.as_ref(), id, status).await?;

    if ctx.format == OutputFormat::Json {
        return output::print(&Detail(&updated), ctx.format);
    }
    println!(
        "{} Appointment {} is now {}",
        "✓".green(),
        id.bold(),
        status.as_str().cyan()
    );
    Ok(())
}

/// Update an appointment's status and return the stored record.
///
/// Older backends answer without the appointment body; the record is then
/// re-read so callers always see the new state.
pub async fn change_status<A>(api: &A, id: &str, status: AppointmentStatus) -> Result<Appointment>
where
    A: MutationApi + DetailApi + ?Sized,
{
    let response = api.update_appointment_status(id, status).await?;
    match response.appointment {
        Some(appointment) => Ok(appointment),
        None => api.get_appointment(id).await?.ok_or_else(|| not_found(id)),
    }
}

async fn stats(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let appointments = client.list_appointments().await?;
    output::print(&Detail(&appointment_stats(&appointments)), ctx.format)
}

fn not_found(id: &str) -> Error {
    Error::Other(format!("Appointment {} not found", id))
}
