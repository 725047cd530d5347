use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkTracker
#[derive(Parser)]
#[command(
    name = "rworktracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track work sessions, pauses and breaks from the terminal",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Live status line; reads start/stop/pause/yes/status/quit from stdin
    Run,

    /// Start a work session
    Start,

    /// Stop the running work session
    Stop,

    /// Show the status line for the stored session
    Status,

    /// List today's time blocks
    Today {
        #[arg(long = "type", help = "Only blocks of this type (work, break, pause, session-start, session-stop)")]
        kind: Option<String>,
    },

    /// List the time blocks of one day
    Day {
        /// Day key (D/M/Y)
        day: String,

        #[arg(long = "type", help = "Only blocks of this type")]
        kind: Option<String>,
    },

    /// Most recent day containing blocks of the given type(s)
    Last {
        #[arg(
            long = "type",
            value_delimiter = ',',
            required = true,
            help = "Block type(s), comma separated"
        )]
        kinds: Vec<String>,
    },

    /// Show, set or clear the hourly rate
    Rate {
        #[arg(long = "set", value_name = "AMOUNT", conflicts_with = "clear")]
        set: Option<f64>,

        #[arg(long = "clear")]
        clear: bool,
    },

    /// Delete the session counter and every recorded day
    Reset {
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Export all recorded time blocks
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
