//! Pagination argument types for CLI commands

use clap::Args;

use crate::listing::SortDirection;

/// Shared pagination arguments for list commands.
///
/// Flatten this into any command that supports pagination:
/// ```ignore
/// List {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Clone)]
pub struct PaginationArgs {
    /// Page number (1-based)
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to the configured page size)
    #[arg(long, short = 'n')]
    pub per_page: Option<usize>,

    /// Sort direction (asc, desc)
    #[arg(long, value_enum, default_value_t = SortDirection::Asc, hide_possible_values = true)]
    pub sort_dir: SortDirection,
}

impl Default for PaginationArgs {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: None,
            sort_dir: SortDirection::Asc,
        }
    }
}

impl PaginationArgs {
    /// Rows per page, falling back to `configured`
    pub fn page_size(&self, configured: usize) -> usize {
        self.per_page.filter(|&n| n > 0).unwrap_or(configured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_fallback() {
        let args = PaginationArgs::default();
        assert_eq!(args.page_size(8), 8);

        let args = PaginationArgs {
            per_page: Some(20),
            ..Default::default()
        };
        assert_eq!(args.page_size(8), 20);

        let zero = PaginationArgs {
            per_page: Some(0),
            ..Default::default()
        };
        assert_eq!(zero.page_size(8), 8);
    }
}
