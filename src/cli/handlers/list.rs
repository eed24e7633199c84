//! Generic list command handler
//!
//! Provides a reusable pattern for list commands that follow the standard flow:
//! 1. Build the API client from the command context
//! 2. Fetch the whole collection
//! 3. Filter, sort and paginate locally
//! 4. Print the page in the requested format

use std::future::Future;
use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::cli::{CommandContext, PaginationArgs};
use crate::client::AgendouClient;
use crate::error::Result;
use crate::listing::{Filter, Sortable, query};
use crate::models::Row;
use crate::output;

/// Run a standard list command with the common fetch → query → print pattern.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g., `Barber`)
/// * `Q` - The filter applied before sorting
/// * `Fut` - The future type returned by the fetcher
///
/// # Example
///
/// ```ignore
/// run_list_command(
///     &ctx,
///     &pagination,
///     "barbers",
///     &filters.to_filter(),
///     filters.sort_by,
///     |client| async move { client.list_barbers().await },
/// ).await
/// ```
pub async fn run_list_command<T, Q, Fut, F>(
    ctx: &CommandContext,
    pagination: &PaginationArgs,
    resource_name: &str,
    filter: &Q,
    sort_by: T::Field,
    fetcher: F,
) -> Result<()>
where
    T: Sortable + Row + Serialize,
    Q: Filter<T>,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(Arc<AgendouClient>) -> Fut,
{
    let client = ctx.client()?;

    debug!("Fetching {}", resource_name);
    let items = fetcher(client).await?;
    debug!("Fetched {} {}", items.len(), resource_name);

    let page = query(
        items,
        filter,
        Some((sort_by, pagination.sort_dir)),
        pagination.page,
        pagination.page_size(ctx.page_size()),
    );
    debug!(
        "Showing page {}/{} of {} matching {}",
        page.page, page.total_pages, page.total_items, resource_name
    );

    output::print(&page, ctx.format)
}
