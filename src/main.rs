//! Agendou admin CLI - terminal companion for the Agendou barbershop backend

use clap::Parser;
use env_logger::Env;

mod cli;
mod client;
mod config;
mod error;
mod insights;
mod listing;
mod models;
mod navigation;
mod output;
mod session;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, SessionCommands};
use error::Result;
use navigation::{ConsoleNavigator, Navigator};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        if let Some(route) = err.redirect() {
            ConsoleNavigator.navigate(route);
        }
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { email, password } => cli::auth::login(&opts, email, password).await,
        Commands::Logout => cli::auth::logout(&opts).await,
        Commands::Register(args) => cli::auth::register(&opts, args).await,
        Commands::Status => cli::auth::status(&opts),
        Commands::Verify => cli::auth::verify(&opts).await,
        Commands::Whoami => cli::auth::whoami(&opts).await,
        Commands::Session(SessionCommands::Cookie { clear }) => {
            cli::auth::session_cookie(&opts, clear)
        }
        Commands::Dashboard { remote } => cli::dashboard::run(&opts, remote).await,
        Commands::Appointment(cmd) => cli::appointment::run(&opts, cmd).await,
        Commands::Client(cmd) => cli::customer::run(&opts, cmd).await,
        Commands::Barber(cmd) => cli::barber::run(&opts, cmd).await,
        Commands::Review(cmd) => cli::review::run(&opts, cmd).await,
        Commands::Version => {
            println!("agendou version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
