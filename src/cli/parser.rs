use crate::core::export::{ExportFormat, ExportTable};
use clap::{Parser, Subcommand};

/// Command-line interface definition for staffbot
/// Chat bot tracking employee status, attendance and tasks with SQLite
#[derive(Parser)]
#[command(
    name = "staffbot",
    version = env!("CARGO_PKG_VERSION"),
    about = "A chat bot tracking employee status, attendance and tasks using SQLite",
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

    /// Run the bot on the console: read `author: message` lines from stdin
    Serve {
        #[arg(long = "date", help = "Use this date (YYYY-MM-DD) instead of today for attendance")]
        date: Option<String>,
    },

    /// Dispatch a single chat message and print the reply
    Send {
        #[arg(long = "as", value_name = "USER", help = "Author of the message")]
        author: String,

        /// Message text, e.g. "!mark_attendance present"
        message: String,

        #[arg(long = "date", help = "Use this date (YYYY-MM-DD) instead of today for attendance")]
        date: Option<String>,
    },

    /// Manage the configuration file (view, edit or validate)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file, then validate it (editor: $EDITOR, $VISUAL, vi)"
        )]
        edit_config: bool,

        #[arg(long = "check", help = "Validate the configuration file and exit")]
        check_config: bool,

        #[arg(
            long = "editor",
            help = "Editor to run for --edit (name on PATH or full path)"
        )]
        editor: Option<String>,
    },

    /// Maintain the database (schema, integrity checks, etc.)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export a table to CSV or JSON
    Export {
        #[arg(long, value_enum)]
        table: ExportTable,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Only rows belonging to this user")]
        user: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
