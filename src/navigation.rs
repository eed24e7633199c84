//! Navigation adapter
//!
//! The API client never redirects on its own. It reports a [`Route`] (through
//! `ApiError::SessionExpired` or the return value of `logout`) and the
//! composition root hands it to a [`Navigator`].

use std::fmt;

use colored::Colorize;

/// Destinations the admin panel can send a user to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Sign-in screen
    Login,
    /// Landing screen for an authenticated admin
    Dashboard,
}

impl Route {
    /// Path of the route in the web panel
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
        }
    }

    /// CLI command that plays the role of this route
    pub fn command(self) -> &'static str {
        match self {
            Route::Login => "agendou login",
            Route::Dashboard => "agendou dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Performs the side effect of moving the user to a route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Terminal navigator: tells the user which command to run next.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        log::debug!("Navigating to {}", route);
        eprintln!("{} {}", "→ Next:".dimmed(), route.command().cyan());
    }
}
