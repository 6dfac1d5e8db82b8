use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftsheet
/// CLI application to fetch checklist submissions and print shift inspection sheets
#[derive(Parser)]
#[command(
    name = "shiftsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fetch quality checklist submissions and print shift inspection sheets",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or per-factory setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for missing or invalid fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List recent shifts with checklist activity, latest first
    Shifts {
        #[arg(long, help = "Lookback window in days (default from config)")]
        days: Option<i64>,
    },

    /// Build and print the inspection sheet for one shift
    Report {
        /// Selection key: "YYYY-MM-DD|SHIFT" or "YYYY-MM-DD|SHIFT|STATION"
        key: Option<String>,

        /// Use the most recent shift found in the lookback window
        #[arg(long, conflicts_with = "key")]
        latest: bool,

        /// Export the sheet to a file in the given format
        #[arg(long, value_enum, requires = "file")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", requires = "format")]
        file: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
