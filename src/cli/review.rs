//! Review command implementations

use chrono::Utc;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, PaginationArgs, ReviewCommands, ReviewFilterArgs};
use crate::client::{DetailApi, ListingApi};
use crate::error::{Error, Result};
use crate::insights::review_stats;
use crate::output::{self, Detail};

/// Dispatch a review subcommand
pub async fn run(opts: &GlobalOptions, command: ReviewCommands) -> Result<()> {
    match command {
        ReviewCommands::List {
            filters,
            pagination,
        } => list(opts, &filters, &pagination).await,
        ReviewCommands::Get { appointment_id } => get(opts, &appointment_id).await,
        ReviewCommands::Stats => stats(opts).await,
    }
}

async fn list(
    opts: &GlobalOptions,
    filters: &ReviewFilterArgs,
    pagination: &PaginationArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let filter = filters.to_filter(Utc::now())?;
    run_list_command(
        &ctx,
        pagination,
        "reviews",
        &filter,
        filters.sort_by,
        |client| async move { client.list_reviews().await },
    )
    .await
}

async fn get(opts: &GlobalOptions, appointment_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let review = client
        .get_appointment_review(appointment_id)
        .await?
        .ok_or_else(|| {
            Error::Other(format!(
                "No review found for appointment {}",
                appointment_id
            ))
        })?;
    output::print(&Detail(&review), ctx.format)
}

async fn stats(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let reviews = client.list_reviews().await?;
    output::print(&Detail(&review_stats(&reviews)), ctx.format)
}
