//! CLI definition using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use parking_domain::service::SortKey;
use parking_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parking-manager")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Track parked vehicles, their charges, and a saved vehicle list")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file holding the vehicle list. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Sort order for the list report
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Id,
    Charge,
    Duration,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Id => SortKey::Id,
            SortArg::Charge => SortKey::Charge,
            SortArg::Duration => SortKey::Duration,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and start the interactive menu (default)
    Run,

    /// Print the saved vehicle list
    List {
        /// Reorder before printing
        #[arg(long, short = 's')]
        sort: Option<SortArg>,
    },

    /// Print the dashboard summary of the saved vehicle list
    Dashboard,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set data file path
        #[arg(long)]
        set_data_file: Option<PathBuf>,

        /// Set login username
        #[arg(long)]
        set_username: Option<String>,

        /// Set login password
        #[arg(long)]
        set_password: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Load the data file when a session starts
        #[arg(long)]
        set_autoload: Option<bool>,

        /// Ask to save unsaved changes on exit
        #[arg(long)]
        set_confirm_save: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
