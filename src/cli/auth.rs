//! Session commands: login, logout, register, status, verify, whoami

use chrono::{TimeDelta, Utc};
use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, RegisterArgs};
use crate::client::models::RegisterAdminRequest;
use crate::client::{AuthApi, SessionState};
use crate::config::Config;
use crate::error::{Error, Result, SessionError};
use crate::models::Describe;
use crate::navigation::{ConsoleNavigator, Navigator, Route};
use crate::output::{self, Detail};
use crate::session::{Session, SessionStore, clear_cookie};

/// Run the login command, prompting for missing credentials
pub async fn login(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let email = match email {
        Some(email) => email,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Admin email")
            .interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    println!("{}", "Signing in...".cyan());
    sign_in(client.as_ref(), &email, &password, &ConsoleNavigator).await?;

    println!("{} Signed in as {}", "✓".green(), email.bold());
    println!(
        "  Session saved to {}",
        ctx.session.path().display().to_string().dimmed()
    );
    if remember_api_url(opts, client.base_url())? {
        println!("  API URL saved to the config file");
    }
    ConsoleNavigator.navigate(Route::Dashboard);
    Ok(())
}

/// Persist the base URL used for a successful login when the config file
/// has none yet. Returns whether the file was written.
fn remember_api_url(opts: &GlobalOptions, url: &str) -> Result<bool> {
    let mut stored = Config::load_at(opts.config_ref())?;
    if stored.api_url.is_some() {
        return Ok(false);
    }

    stored.api_url = Some(url.to_string());
    stored.save_at(opts.config_ref())?;
    log::debug!("Saved API URL {} to config", url);
    Ok(true)
}

/// Exchange credentials for a session.
///
/// Fails when the backend accepted the request but issued no token.
pub async fn sign_in<A: AuthApi + ?Sized>(
    api: &A,
    email: &str,
    password: &str,
    navigator: &dyn Navigator,
) -> Result<()> {
    let response = api.login(email, password).await?;
    if response.token.as_deref().is_some_and(|t| !t.is_empty()) {
        Ok(())
    } else {
        navigator.navigate(Route::Login);
        Err(Error::Other(
            "Login response did not include a token; no session was created".to_string(),
        ))
    }
}

/// Run the logout command
pub async fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    // Signing out never needs the backend; fall back to the bare store when
    // no base URL is configured.
    match ctx.client() {
        Ok(client) => {
            sign_out(client.as_ref(), &ConsoleNavigator).await?;
        }
        Err(e) => {
            log::debug!("No API client ({}); clearing session directly", e);
            ctx.session.clear()?;
            ConsoleNavigator.navigate(Route::Login);
        }
    }

    println!("{} Signed out", "✓".green());
    Ok(())
}

/// Drop the session and follow the route logout hands back
pub async fn sign_out<A: AuthApi + ?Sized>(api: &A, navigator: &dyn Navigator) -> Result<Route> {
    let route = api.logout().await?;
    navigator.navigate(route);
    Ok(route)
}

/// Run the register command, prompting for missing fields
pub async fn register(opts: &GlobalOptions, args: RegisterArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let theme = ColorfulTheme::default();
    let ask = |value: Option<String>, prompt: &str| -> Result<String> {
        match value {
            Some(v) => Ok(v),
            None => Ok(Input::<String>::with_theme(&theme)
                .with_prompt(prompt)
                .interact_text()?),
        }
    };

    let name = ask(args.name, "Full name")?;
    let email = ask(args.email, "Email")?;
    let password = match args.password {
        Some(p) => p,
        None => Password::with_theme(&theme)
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };
    let phone = ask(args.phone, "Phone")?;
    let cpf = ask(args.cpf, "CPF")?;

    let request = RegisterAdminRequest {
        name,
        email,
        password,
        phone,
        cpf,
    };

    println!("{}", "Creating administrator...".cyan());
    client.register_admin(&request).await?;

    println!(
        "{} Administrator {} created",
        "✓".green(),
        request.email.bold()
    );
    ConsoleNavigator.navigate(Route::Login);
    Ok(())
}

/// Local view of configuration and session, no network involved
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub config_file: String,
    pub api_url: Option<String>,
    pub login_path: String,
    pub session_file: String,
    pub signed_in: bool,
    pub expires_at: Option<String>,
}

impl StatusReport {
    pub fn collect(config: &Config, config_file: String, session: Option<&Session>) -> Self {
        Self {
            config_file,
            api_url: config.require_api_url().ok(),
            login_path: config.login_path.clone(),
            session_file: config
                .session_path()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            signed_in: session.is_some(),
            expires_at: session
                .and_then(Session::expires_at)
                .map(|at| at.to_rfc3339()),
        }
    }
}

impl Describe for StatusReport {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Config file", self.config_file.clone()),
            (
                "API URL",
                self.api_url.clone().unwrap_or_else(|| "not configured".to_string()),
            ),
            ("Login path", self.login_path.clone()),
            ("Session file", self.session_file.clone()),
            ("Signed in", if self.signed_in { "yes" } else { "no" }.to_string()),
            ("Expires", self.expires_at.clone().unwrap_or_default()),
        ]
    }
}

/// Run the status command to display configuration and session status
pub fn status(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let config_file = Config::resolve_path(opts.config_ref())?
        .display()
        .to_string();
    let session = ctx.session.get()?;
    let report = StatusReport::collect(&ctx.config, config_file, session.as_ref());

    if ctx.format != OutputFormat::Pretty {
        return output::print(&Detail(&report), ctx.format);
    }

    println!("{}\n", "Agendou Admin Status".bold());
    println!("Config file: {}", report.config_file.cyan());

    match &report.api_url {
        Some(url) => println!("{} API URL: {}", "✓".green(), url),
        None => {
            println!("{} API URL not configured", "✗".red());
            println!("  → Set api_url in the config file, AGENDOU_API_URL, or --api-url");
        }
    }

    match &session {
        Some(session) => {
            let remaining = session
                .expires_at()
                .map(|at| at.signed_duration_since(Utc::now()))
                .unwrap_or_else(TimeDelta::zero);
            println!(
                "{} Signed in (session expires in {}h {}m)",
                "✓".green(),
                remaining.num_hours(),
                remaining.num_minutes() % 60
            );
        }
        None => {
            println!("{} Not signed in", "○".dimmed());
            println!("  → Run 'agendou login' to sign in");
        }
    }
    println!("Session file: {}", report.session_file.dimmed());

    Ok(())
}

/// Run the verify command: ask the backend whether the session is still good
pub async fn verify(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let state = check_session(client.as_ref(), &ConsoleNavigator).await?;

    match (&state, ctx.format) {
        (_, OutputFormat::Json) => println!("{}", output::json::format_json(&state)?),
        (SessionState::Authenticated { profile }, _) => println!(
            "{} Session valid{}",
            "✓".green(),
            profile
                .display_name()
                .map(|name| format!(" for {}", name.bold()))
                .unwrap_or_default()
        ),
        (SessionState::Anonymous, _) => println!("{} Not signed in", "✗".red()),
    }
    Ok(())
}

/// Verify the session and send the user to the matching landing route
pub async fn check_session<A: AuthApi + ?Sized>(
    api: &A,
    navigator: &dyn Navigator,
) -> Result<SessionState> {
    let state = api.verify_session().await?;
    navigator.navigate(state.landing_route());
    Ok(state)
}

/// Run the whoami command
pub async fn whoami(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client()?;

    let profile = client
        .verify_user()
        .await?
        .ok_or(SessionError::NotSignedIn)?;

    output::print(&Detail(&profile), ctx.format)
}

/// Run the session cookie command
pub fn session_cookie(opts: &GlobalOptions, clear: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let secure = ctx.config.secure_cookie;

    if clear {
        println!("{}", clear_cookie(secure));
        return Ok(());
    }

    let session = ctx.session.get()?.ok_or(SessionError::NotSignedIn)?;
    println!("{}", session.set_cookie(secure));
    Ok(())
}
