//! Command handlers

use crate::cli::{Cli, Commands, SortArg};
use crate::menu;
use crate::output::{output_dashboard, output_vehicles, render_load_summary};
use parking_app::app::ParkingService;
use parking_app::config::Config;
use parking_app::repository::{open_vehicle_repo, FileVehicleRepository};
use parking_domain::service::SortKey;
use parking_types::{OutputFormat, Result};
use std::path::PathBuf;
use tracing::info;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    if let Some(Commands::Config {
        show,
        set_data_file,
        set_username,
        set_password,
        set_output,
        set_autoload,
        set_confirm_save,
        reset,
    }) = cli.command
    {
        return cmd_config(
            show,
            set_data_file,
            set_username,
            set_password,
            set_output,
            set_autoload,
            set_confirm_save,
            reset,
        );
    }

    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        None | Some(Commands::Run) => menu::run_session(&config),
        Some(Commands::List { sort }) => cmd_list(&config, sort, output_format),
        Some(Commands::Dashboard) => cmd_dashboard(&config, output_format),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

/// Load the data file into a fresh session for a read-only report
fn open_session(
    config: &Config,
    output_format: OutputFormat,
) -> Result<ParkingService<FileVehicleRepository>> {
    let mut service = ParkingService::new(open_vehicle_repo(config));
    let summary = service.load()?;
    info!(
        data_file = %config.data_file.display(),
        loaded = summary.loaded,
        skipped = summary.skipped_count(),
        "Loaded data file"
    );
    // Status lines would corrupt JSON on stdout
    if output_format == OutputFormat::Table {
        eprint!("{}", render_load_summary(&summary));
    }
    Ok(service)
}

fn cmd_list(config: &Config, sort: Option<SortArg>, output_format: OutputFormat) -> Result<()> {
    let mut service = open_session(config, output_format)?;
    if let Some(sort) = sort {
        service.sort(SortKey::from(sort));
    }
    output_vehicles(output_format, service.vehicles())
}

fn cmd_dashboard(config: &Config, output_format: OutputFormat) -> Result<()> {
    let service = open_session(config, output_format)?;
    output_dashboard(output_format, &service.dashboard())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_data_file: Option<PathBuf>,
    set_username: Option<String>,
    set_password: Option<String>,
    set_output: Option<OutputFormat>,
    set_autoload: Option<bool>,
    set_confirm_save: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(data_file) = set_data_file {
        config.data_file = data_file;
        modified = true;
    }

    if let Some(username) = set_username {
        config.username = username;
        modified = true;
    }

    if let Some(password) = set_password {
        config.password = password;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(autoload) = set_autoload {
        config.autoload = autoload;
        modified = true;
    }

    if let Some(confirm) = set_confirm_save {
        config.confirm_save_on_exit = confirm;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
