//! Output formatting for CLI results

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::listing::Page;
use crate::models::{Describe, Row};

pub mod formatters;
pub mod json;
pub mod table;

use json::PageInfo;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

/// Format and print data to stdout
pub fn print<T: Formattable + ?Sized>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    println!("{}", output);
    Ok(())
}

impl<T: Serialize + Row> Formattable for Page<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                let info = PageInfo {
                    page: self.page,
                    page_size: self.page_size,
                    total_items: self.total_items,
                    total_pages: self.total_pages,
                };
                Ok(json::format_json_page(&self.items, info)?)
            }
            OutputFormat::Table => {
                let rows: Vec<T::Display> = self.items.iter().map(Row::row).collect();
                Ok(table::format_table(&rows))
            }
            OutputFormat::Pretty => {
                let rows: Vec<T::Display> = self.items.iter().map(Row::row).collect();
                let mut output = table::format_table(&rows);
                if self.total_items > 0 {
                    output.push('\n');
                    output.push_str(&page_footer(self));
                }
                Ok(output)
            }
        }
    }
}

fn page_footer<T>(page: &Page<T>) -> String {
    let summary = format!(
        "Page {} of {} ({} results)",
        page.page,
        page.total_pages.max(1),
        page.total_items
    );
    if page.has_next() {
        format!(
            "{}  {}",
            summary.dimmed(),
            format!("→ --page {} for more", page.page + 1).dimmed()
        )
    } else {
        summary.dimmed().to_string()
    }
}

/// Single record or summary, printed as labelled fields
pub struct Detail<'a, T: ?Sized>(pub &'a T);

impl<T: Serialize + Describe + ?Sized> Formattable for Detail<'_, T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self.0)?),
            OutputFormat::Table => Ok(table::format_fields(&self.0.describe())),
            OutputFormat::Pretty => Ok(format_pretty_fields(&self.0.describe())),
        }
    }
}

/// Align labels in a column, values after them
pub fn format_pretty_fields(fields: &[(&str, String)]) -> String {
    let width = fields
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    fields
        .iter()
        .map(|(label, value)| {
            let padding = " ".repeat(width - label.chars().count());
            format!("{}{}  {}", label.bold(), padding, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
