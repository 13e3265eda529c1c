//! Scanfolio CLI application entry point
//!
//! Command-line front end for a scan record dashboard: a folder tree with
//! record counts, filtered record lists, folder and record management, and
//! CSV/JSON export of the current view.
//!
//! # Usage
//!
//! ```bash
//! # Create the dashboard snapshot with the default folders
//! scanfolio init
//!
//! # Show the folder tree (default command)
//! scanfolio
//! scanfolio tree
//!
//! # List records in folder 3 and its subfolders matching "invoice"
//! scanfolio list --folder 3 --search invoice
//!
//! # Create a subfolder and move a record into it
//! scanfolio folder create Clients --parent 1
//! scanfolio record move "Invoice Q1" 5
//!
//! # Export uncategorized records as JSON
//! scanfolio export --folder uncategorized --format json -o loose.json
//! ```
//!
//! # Configuration
//!
//! On first run, scanfolio will prompt for the snapshot location. Configuration
//! is stored in the user's config directory (`~/.config/scanfolio/config.toml`
//! on Linux).

use scanfolio::{
    ScanfolioError,
    cli::{Cli, Commands, ConfigCommands},
    commands,
    config::ScanfolioConfig,
    logging,
};

type Result<T> = std::result::Result<T, ScanfolioError>;

/// Handle config subcommands - get or set a configuration value
///
/// # Errors
///
/// Returns `ScanfolioError` if the setting is malformed, the key is unknown,
/// or the configuration cannot be saved.
fn handle_config_command(
    mut config: ScanfolioConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                ScanfolioError::InvalidInput(
                    "Invalid format. Use: scanfolio config set key=value".into(),
                )
            })?;
            let (key, value) = (key.trim(), value.trim());

            config.set_value(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {}", config.get_value(key)?);
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get_value(key)?);
        }
    }
    Ok(())
}

/// Main entry point for the scanfolio application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `ScanfolioError` if configuration loading fails, the snapshot
/// cannot be opened, or any command handler returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // An explicit snapshot skips the interactive first-run setup
    let config = if cli.data.is_some() {
        ScanfolioConfig::load()?
    } else {
        ScanfolioConfig::load_or_setup()?
    };

    logging::init(cli.verbose, &config.log_level);
    if !config.color {
        colored::control::set_override(false);
    }

    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return handle_config_command(config, command, quiet);
    }

    let data_file = match &cli.data {
        Some(path) => path.clone(),
        None => config.data_file_or_default()?,
    };
    tracing::debug!("Using dashboard data {:?}", data_file);

    if let Commands::Init = command {
        commands::init(&data_file, quiet)?;
        return Ok(());
    }

    let mut dashboard = commands::open_dashboard(&data_file)?;

    match &command {
        Commands::Tree => commands::tree(&dashboard, quiet)?,
        Commands::List { view } => commands::list(&mut dashboard, view, quiet)?,
        Commands::Counts => commands::counts(&dashboard, quiet)?,
        Commands::Folder { command } => {
            commands::folder(&mut dashboard, command, quiet)?;
        }
        Commands::Record { command } => {
            commands::record(&mut dashboard, command, quiet)?;
        }
        Commands::Export {
            view,
            format,
            output,
        } => {
            commands::export(&mut dashboard, view, *format, output.as_deref(), quiet)?;
        }
        Commands::Init | Commands::Config { .. } => unreachable!(),
    }

    Ok(())
}
