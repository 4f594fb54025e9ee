use crate::core::payments::Period;
use crate::export::ExportFormat;
use crate::models::appointment::AppointmentStatus;
use crate::models::payment::PaymentMethod;
use crate::models::role::Role;
use crate::models::status_category::StatusCategory;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for salonbook
#[derive(Parser)]
#[command(
    name = "salonbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Salon management from the terminal: appointments, services, staff, customers and payments",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Act as this role
    #[arg(global = true, long = "role", value_enum, default_value = "admin")]
    pub role: Role,

    /// Staff or customer id of the caller (required unless --role admin)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use instead of $EDITOR")]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Book an appointment
    Book {
        /// Customer id (ignored for --role customer, who always books for themselves)
        #[arg(long)]
        customer: Option<String>,

        #[arg(long)]
        service: Option<String>,

        #[arg(long)]
        staff: Option<String>,

        /// Date of the appointment (YYYY-MM-DD, today, tomorrow)
        #[arg(long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long)]
        time: Option<String>,
    },

    /// Change the status of an appointment
    Status {
        /// Appointment id
        id: String,

        #[arg(value_enum)]
        status: AppointmentStatus,
    },

    /// List the appointments visible to the caller
    List {
        #[arg(long, short, help = "Search customer, service or staff names")]
        search: Option<String>,

        #[arg(long, value_enum, default_value = "all")]
        status: StatusCategory,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (start:end)"
        )]
        range: Option<String>,

        #[arg(
            long,
            value_name = "DATE",
            conflicts_with = "range",
            help = "Show the Monday-to-Sunday week containing DATE, grouped by day"
        )]
        week: Option<String>,
    },

    /// Show one appointment in detail
    Show {
        /// Appointment id
        id: String,
    },

    /// List free start times for a staff member on a date
    Slots {
        #[arg(long)]
        service: String,

        #[arg(long)]
        staff: Option<String>,

        #[arg(long)]
        date: String,
    },

    /// Manage customers
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Manage services
    Service {
        #[command(subcommand)]
        action: ServiceAction,
    },

    /// Manage staff members
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },

    /// Record and manage payments
    Payment {
        #[command(subcommand)]
        action: PaymentAction,
    },

    /// Today's figures
    Dashboard,

    /// Export appointments
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import appointments from a JSON export
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct CustomerFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Comma separated, e.g. "Short hair,Natural colors"
    #[arg(long)]
    pub preferences: Option<String>,
    /// Money paid in advance
    #[arg(long)]
    pub advance: Option<f64>,
}

#[derive(Subcommand)]
pub enum CustomerAction {
    Add {
        #[arg(long)]
        id: Option<String>,
        #[command(flatten)]
        fields: CustomerFields,
    },
    Edit {
        id: String,
        #[command(flatten)]
        fields: CustomerFields,
    },
    Del {
        id: String,
    },
    List {
        #[arg(long, short)]
        search: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct ServiceFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    /// Duration in minutes
    #[arg(long)]
    pub duration: Option<u32>,
    #[arg(long)]
    pub category: Option<String>,
    /// Comma separated staff ids able to perform the service
    #[arg(long = "staff")]
    pub staff_ids: Option<String>,
}

#[derive(Subcommand)]
pub enum ServiceAction {
    Add {
        #[arg(long)]
        id: Option<String>,
        #[command(flatten)]
        fields: ServiceFields,
    },
    Edit {
        id: String,
        #[command(flatten)]
        fields: ServiceFields,
    },
    Del {
        id: String,
    },
    List {
        #[arg(long, short)]
        search: Option<String>,
        #[arg(long, default_value = "all")]
        category: String,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct StaffFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    /// Comma separated service ids
    #[arg(long = "services")]
    pub service_ids: Option<String>,
    /// Working days, e.g. "mon,tue,wed"
    #[arg(long)]
    pub days: Option<String>,
    #[arg(long)]
    pub rating: Option<f64>,
}

#[derive(Subcommand)]
pub enum StaffAction {
    Add {
        #[arg(long)]
        id: Option<String>,
        #[command(flatten)]
        fields: StaffFields,
    },
    Edit {
        id: String,
        #[command(flatten)]
        fields: StaffFields,
    },
    /// Replace the weekly schedule
    Schedule {
        id: String,
        #[arg(long)]
        days: String,
    },
    Del {
        id: String,
    },
    List {
        #[arg(long, short)]
        search: Option<String>,
        #[arg(long, default_value = "all")]
        position: String,
    },
}

#[derive(Subcommand)]
pub enum PaymentAction {
    /// Record a completed payment
    Add {
        #[arg(long = "customer-name")]
        customer_name: Option<String>,
        #[arg(long = "service-name")]
        service_name: Option<String>,
        #[arg(long)]
        amount: f64,
        #[arg(long, value_enum, default_value = "cash")]
        method: PaymentMethod,
        #[arg(long)]
        reference: Option<String>,
        /// Link to an existing appointment (fills customer and service)
        #[arg(long)]
        appointment: Option<String>,
    },
    /// Mark a payment refunded
    Refund { id: String },
    /// Mark a payment completed again
    Process { id: String },
    List {
        #[arg(long, short)]
        search: Option<String>,
        #[arg(long, value_enum, default_value = "all")]
        period: Period,
        #[arg(long, value_enum)]
        method: Option<PaymentMethod>,
    },
}
