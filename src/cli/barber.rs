//! Barber command implementations

use colored::Colorize;
use dialoguer::Confirm;
use serde_json::Value;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{
    BarberCommands, BarberFields, BarberFilterArgs, CommandContext, OutputFormat, PaginationArgs,
};
use crate::client::models::{Barber, BarberForm};
use crate::client::{DetailApi, ListingApi, MutationApi};
use crate::error::{Error, Result};
use crate::insights::barber_stats;
use crate::output::{self, Detail};

/// Dispatch a barber subcommand
pub async fn run(opts: &GlobalOptions, command: BarberCommands) -> Result<()> {
    match command {
        BarberCommands::List {
            filters,
            pagination,
        } => list(opts, &filters, &pagination).await,
        BarberCommands::Get { id } => get(opts, &id).await,
        BarberCommands::Create { fields } => create(opts, &fields).await,
        BarberCommands::Update { id, fields } => update(opts, &id, &fields).await,
        BarberCommands::Toggle { id } => toggle(opts, &id).await,
        BarberCommands::Delete { id, yes } => delete(opts, &id, yes).await,
        BarberCommands::Stats { remote } => stats(opts, remote).await,
    }
}

async fn list(
    opts: &GlobalOptions,
    filters: &BarberFilterArgs,
    pagination: &PaginationArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    run_list_command(
        &ctx,
        pagination,
        "barbers",
        &filters.to_filter(),
        filters.sort_by,
        |client| async move { client.list_barbers().await },
    )
    .await
}

async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let barber = find_barber(client.as_ref(), id).await?;
    output::print(&Detail(&barber), ctx.format)
}

async fn create(opts: &GlobalOptions, fields: &BarberFields) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let form = build_form(None, fields)?;
    let created = client.create_barber(&form).await?;

    report_change(ctx.format, created, &format!("Barber {} added", form.name.bold()))
}

async fn update(opts: &GlobalOptions, id: &str, fields: &BarberFields) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let updated = apply_update(client.as_ref(), id, fields).await?;

    report_change(ctx.format, updated, &format!("Barber {} updated", id.bold()))
}

/// Merge `fields` over the stored barber and send the full form
pub async fn apply_update<A>(api: &A, id: &str, fields: &BarberFields) -> Result<Option<Value>>
where
    A: DetailApi + MutationApi + ?Sized,
{
    let existing = find_barber(api, id).await?;
    let form = build_form(Some(&existing), fields)?;
    api.update_barber(id, &form).await
}

async fn toggle(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let toggled = client.toggle_barber_status(id).await?;

    let state = toggled
        .as_ref()
        .and_then(|v| v.get("ativo"))
        .and_then(Value::as_bool)
        .map(|active| if active { " (now active)" } else { " (now inactive)" })
        .unwrap_or_default();
    report_change(
        ctx.format,
        toggled,
        &format!("Barber {} toggled{}", id.bold(), state),
    )
}

async fn delete(opts: &GlobalOptions, id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let barber = find_barber(client.as_ref(), id).await?;
    let name = barber.name.clone().unwrap_or_else(|| id.to_string());

    if !yes {
        eprintln!(
            "{} Remove barber \"{}\"? This cannot be undone.",
            "⚠".yellow(),
            name
        );
        let confirm = Confirm::new()
            .with_prompt("Confirm deletion?")
            .default(false)
            .interact()?;

        if !confirm {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    client.delete_barber(id).await?;

    match ctx.format {
        OutputFormat::Json => {
            let data = serde_json::json!({ "deleted": true, "id": id, "name": name });
            println!("{}", output::json::format_json(&data)?);
        }
        _ => println!("{} Barber {} removed", "✓".green(), name.bold()),
    }
    Ok(())
}

async fn stats(opts: &GlobalOptions, remote: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    if remote {
        let payload = client.barber_stats().await?.unwrap_or(Value::Null);
        println!("{}", output::json::format_json(&payload)?);
        return Ok(());
    }

    let barbers = client.list_barbers().await?;
    output::print(&Detail(&barber_stats(&barbers)), ctx.format)
}

async fn find_barber<A: DetailApi + ?Sized>(api: &A, id: &str) -> Result<Barber> {
    api.get_barber(id)
        .await?
        .ok_or_else(|| Error::Other(format!("Barber {} not found", id)))
}

/// Build the request body from CLI fields, on top of `existing` when updating.
///
/// A name is mandatory: either given here or already stored.
pub fn build_form(existing: Option<&Barber>, fields: &BarberFields) -> Result<BarberForm> {
    let mut form = existing.map(BarberForm::from_barber).unwrap_or_default();

    if let Some(name) = &fields.name {
        form.name = name.trim().to_string();
    }
    if fields.specialty.is_some() {
        form.specialty = fields.specialty.clone();
    }
    if fields.phone.is_some() {
        form.phone = fields.phone.clone();
    }
    if fields.email.is_some() {
        form.email = fields.email.clone();
    }
    if fields.photo.is_some() {
        form.photo = fields.photo.clone();
    }

    if form.name.is_empty() {
        return Err(Error::Other("A barber needs a name (--name)".to_string()));
    }
    Ok(form)
}

fn report_change(format: OutputFormat, body: Option<Value>, message: &str) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                output::json::format_json(&body.unwrap_or(Value::Null))?
            );
        }
        _ => println!("{} {}", "✓".green(), message),
    }
    Ok(())
}
