//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};

pub mod appointment;
pub mod args;
pub mod auth;
pub mod barber;
pub mod context;
pub mod customer;
pub mod dashboard;
pub mod handlers;
pub mod review;

pub use args::{
    AppointmentFilterArgs, BarberFilterArgs, CustomerFilterArgs, OutputFormat, PaginationArgs,
    ReviewFilterArgs,
};
pub use context::CommandContext;

use crate::client::models::AppointmentStatus;

/// Agendou admin CLI - manage the barbershop from the terminal
#[derive(Parser, Debug)]
#[command(name = "agendou")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "AGENDOU_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "AGENDOU_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Backend base URL (e.g. http://localhost:3001)
    #[arg(long, global = true, env = "AGENDOU_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override session file location
    #[arg(long, global = true, env = "AGENDOU_SESSION_FILE", hide_env = true)]
    pub session_file: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "AGENDOU_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in as an administrator
    Login {
        /// Admin email (prompted when omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, env = "AGENDOU_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Create an administrator account
    Register(RegisterArgs),

    /// Show configuration and local session status
    Status,

    /// Check the stored session against the backend
    Verify,

    /// Show the signed-in account
    Whoami,

    /// Inspect the stored session
    #[command(subcommand)]
    Session(SessionCommands),

    /// Show headline numbers for the shop
    Dashboard {
        /// Show the backend's aggregate dashboard payload instead
        #[arg(long)]
        remote: bool,
    },

    /// View and update appointments
    #[command(subcommand, visible_alias = "appt")]
    Appointment(AppointmentCommands),

    /// View registered clients
    #[command(subcommand)]
    Client(ClientCommands),

    /// Manage barbers
    #[command(subcommand)]
    Barber(BarberCommands),

    /// View customer reviews
    #[command(subcommand)]
    Review(ReviewCommands),

    /// Display version information
    Version,
}

/// Fields for a new administrator; missing ones are prompted for
#[derive(Args, Debug, Clone, Default)]
pub struct RegisterArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Password
    #[arg(long, env = "AGENDOU_NEW_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// CPF (Brazilian taxpayer id)
    #[arg(long)]
    pub cpf: Option<String>,
}

/// Session subcommands
#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Print the Set-Cookie value that hands this session to the web panel
    Cookie {
        /// Print the value that removes the cookie instead
        #[arg(long)]
        clear: bool,
    },
}

/// Appointment subcommands
#[derive(Subcommand, Debug)]
pub enum AppointmentCommands {
    /// List appointments
    List {
        #[command(flatten)]
        filters: AppointmentFilterArgs,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show one appointment
    Get {
        /// Appointment ID
        id: String,

        /// Also show the customer's review of it
        #[arg(long)]
        review: bool,
    },

    /// Change an appointment's status
    SetStatus {
        /// Appointment ID
        id: String,

        /// New status
        #[arg(value_enum)]
        status: AppointmentStatus,
    },

    /// Count appointments per status
    Stats,
}

/// Client subcommands
#[derive(Subcommand, Debug)]
pub enum ClientCommands {
    /// List registered users
    List {
        #[command(flatten)]
        filters: CustomerFilterArgs,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show one client
    Get {
        /// Client ID
        id: String,

        /// Include appointment history and estimated revenue
        #[arg(long)]
        activity: bool,
    },
}

/// Barber fields for create/update
#[derive(Args, Debug, Clone, Default)]
pub struct BarberFields {
    /// Name
    #[arg(long)]
    pub name: Option<String>,

    /// Specialty (e.g. "Degradê")
    #[arg(long)]
    pub specialty: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Photo URL
    #[arg(long)]
    pub photo: Option<String>,
}

/// Barber subcommands
#[derive(Subcommand, Debug)]
pub enum BarberCommands {
    /// List barbers
    List {
        #[command(flatten)]
        filters: BarberFilterArgs,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show one barber
    Get {
        /// Barber ID
        id: String,
    },

    /// Add a barber
    Create {
        #[command(flatten)]
        fields: BarberFields,
    },

    /// Edit a barber; omitted fields keep their current value
    Update {
        /// Barber ID
        id: String,

        #[command(flatten)]
        fields: BarberFields,
    },

    /// Switch a barber between active and inactive
    Toggle {
        /// Barber ID
        id: String,
    },

    /// Remove a barber
    Delete {
        /// Barber ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Active/inactive counts
    Stats {
        /// Show the backend's statistics payload instead
        #[arg(long)]
        remote: bool,
    },
}

/// Review subcommands
#[derive(Subcommand, Debug)]
pub enum ReviewCommands {
    /// List all reviews
    List {
        #[command(flatten)]
        filters: ReviewFilterArgs,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show the review left for an appointment
    Get {
        /// Appointment ID
        appointment_id: String,
    },

    /// Rating average and distribution
    Stats,
}
