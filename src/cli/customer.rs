//! Client command implementations

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{ClientCommands, CommandContext, CustomerFilterArgs, OutputFormat, PaginationArgs};
use crate::client::models::Customer;
use crate::client::{DetailApi, ListingApi};
use crate::error::{Error, Result};
use crate::insights::{CustomerActivity, customer_activity};
use crate::output::{self, Detail};

/// Dispatch a client subcommand
pub async fn run(opts: &GlobalOptions, command: ClientCommands) -> Result<()> {
    match command {
        ClientCommands::List {
            filters,
            pagination,
        } => list(opts, &filters, &pagination).await,
        ClientCommands::Get { id, activity } => get(opts, &id, activity).await,
    }
}

async fn list(
    opts: &GlobalOptions,
    filters: &CustomerFilterArgs,
    pagination: &PaginationArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    run_list_command(
        &ctx,
        pagination,
        "clients",
        &filters.to_filter(),
        filters.sort_by,
        |client| async move { client.list_customers().await },
    )
    .await
}

/// A client together with their appointment history
#[derive(Debug, Serialize)]
pub struct CustomerProfile {
    pub customer: Customer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<CustomerActivity>,
}

async fn get(opts: &GlobalOptions, id: &str, with_activity: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let profile = load_profile(client.as_ref(), id, with_activity).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", output::json::format_json(&profile)?);
        return Ok(());
    }

    output::print(&Detail(&profile.customer), ctx.format)?;
    if let Some(activity) = &profile.activity {
        if ctx.format == OutputFormat::Pretty {
            println!("\n{}", "Activity".bold());
        }
        output::print(&Detail(activity), ctx.format)?;
    }
    Ok(())
}

/// Look up a client and, on request, summarise their appointments
pub async fn load_profile<A>(api: &A, id: &str, with_activity: bool) -> Result<CustomerProfile>
where
    A: DetailApi + ListingApi + ?Sized,
{
    let customer = api
        .get_customer(id)
        .await?
        .ok_or_else(|| Error::Other(format!("Client {} not found", id)))?;

    let activity = if with_activity {
        let appointments = api.list_appointments().await?;
        Some(customer_activity(&customer, &appointments))
    } else {
        None
    };

    Ok(CustomerProfile { customer, activity })
}
