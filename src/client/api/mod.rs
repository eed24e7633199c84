//! API trait definitions split by responsibility
//!
//! This module organizes the Agendou API surface into focused sub-traits:
//! - [`AuthApi`] - Login, logout and session checks
//! - [`ListingApi`] - Collection listing operations
//! - [`DetailApi`] - Single-resource lookups
//! - [`MutationApi`] - Create/update/delete operations
//!
//! The [`AgendouApi`](super::AgendouApi) super-trait combines all four.

mod auth;
mod detail;
mod listing;
mod mutation;

pub use auth::AuthApi;
pub use detail::DetailApi;
pub use listing::ListingApi;
pub use mutation::MutationApi;
