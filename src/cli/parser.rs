use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rcampus
#[derive(Parser)]
#[command(
    name = "rcampus",
    version = env!("CARGO_PKG_VERSION"),
    about = "Student companion: attendance calendar, class routine and today's schedule from campus API snapshots",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Evaluate views as of this date instead of the system date (YYYY-MM-DD)
    #[arg(global = true, long = "today", value_name = "DATE")]
    pub today: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Import API payloads (saved JSON responses) into the local snapshot
    Import {
        #[arg(long, value_name = "FILE", help = "Response of /student-attendance")]
        attendance: Option<String>,

        #[arg(long, value_name = "FILE", help = "Response of /class-routines")]
        routines: Option<String>,

        #[arg(long, value_name = "FILE", help = "Response of /student-profiles/{id}")]
        profile: Option<String>,

        #[arg(long, value_name = "FILE", help = "Response of /subjects")]
        subjects: Option<String>,

        #[arg(long, value_name = "FILE", help = "Response of /subject-assigns")]
        subject_assigns: Option<String>,

        #[arg(long, value_name = "FILE", help = "Response of /staffs")]
        teachers: Option<String>,

        #[arg(long, value_name = "FILE", help = "Response of /designations")]
        designations: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Response of /payments/student-fee-summary/{id}"
        )]
        fees: Option<String>,
    },

    /// Show attendance: summary, month calendar, single date or history
    Attendance {
        #[arg(long, help = "Show counts and percentage")]
        summary: bool,

        #[arg(long, value_name = "YYYY-MM", help = "Show the calendar of this month")]
        month: Option<String>,

        #[arg(long, conflicts_with = "next", help = "Show the month before")]
        prev: bool,

        #[arg(long, help = "Show the month after")]
        next: bool,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Show the status of a single date")]
        date: Option<String>,

        #[arg(long, help = "List every attendance record")]
        history: bool,
    },

    /// Show the weekly class routine, or look up a period
    Routine {
        #[arg(long, value_name = "DAY", requires = "period", help = "Day name (e.g. Sunday)")]
        day: Option<String>,

        #[arg(long, value_name = "N", help = "Period number")]
        period: Option<String>,
    },

    /// Show today's classes
    Today {
        #[arg(long, value_name = "DAY", help = "Show another weekday instead of today")]
        day: Option<String>,
    },

    /// List the subjects of the student's class
    Subjects,

    /// List the teachers, optionally filtered
    Teachers {
        #[arg(
            long,
            value_name = "TEXT",
            help = "Match name, designation, email or phone (case-insensitive)"
        )]
        search: Option<String>,
    },

    /// Show fee totals and dues
    Fees,

    /// Export attendance or routine data
    Export {
        #[arg(
            long,
            value_enum,
            help = "Output format (default: from the file extension, else csv)"
        )]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "YYYY-MM",
            conflicts_with = "routine",
            help = "Month to export (default: current month)"
        )]
        month: Option<String>,

        #[arg(long, help = "Export the class routine instead of attendance")]
        routine: bool,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Manage the stored session (auth token and user data)
    Session {
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,

        #[arg(long, value_name = "FILE", help = "JSON file with the user data blob")]
        user: Option<String>,

        #[arg(long)]
        show: bool,

        #[arg(long, help = "Remove token and user data (logout)")]
        clear: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
