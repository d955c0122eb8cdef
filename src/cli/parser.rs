use crate::export::ExportFormat;
use crate::models::Shift;
use crate::store::BackendKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for qcgrid
/// Shift-based quality-check logging for a production line
#[derive(Parser)]
#[command(
    name = "qcgrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record machine parameters at hourly checkpoints and show them as a shift grid",
    long_about = None
)]
pub struct Cli {
    /// Override the readings store path (useful for tests or a shared sheet)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Override the store backend (inferred from --store when omitted)
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<BackendKind>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the readings store
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

    /// List the checklist items and their target ranges
    Items,

    /// Record one or more readings taken at the same moment
    Add {
        /// Date of the reading (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Time of the reading (HH:MM or HH:MM:SS, default now)
        #[arg(long = "time")]
        time: Option<String>,

        /// Machine identifier (default from configuration)
        #[arg(long = "machine")]
        machine: Option<String>,

        /// ITEM=VALUE, where ITEM is the checklist number or name
        #[arg(long = "set", value_name = "ITEM=VALUE", required = true, num_args = 1..)]
        entries: Vec<String>,
    },

    /// Show the grid of stored readings for a date and shift
    Show {
        /// Date to show (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Shift window (default from configuration)
        #[arg(long = "shift", value_enum)]
        shift: Option<Shift>,
    },

    /// Export the grid of a date and shift
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "shift", value_enum)]
        shift: Option<Shift>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log (sqlite backend)
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
