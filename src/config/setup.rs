//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for creating an initial
//! configuration when scanfolio is run for the first time.

use super::ScanfolioConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup - prompts for the dashboard snapshot location
///
/// The default answer is the system data directory. Nothing is written to
/// the snapshot itself; `scanfolio init` creates it.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The system data directory cannot be determined
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<ScanfolioConfig, ConfigError> {
    println!("Welcome to scanfolio! Let's pick where your dashboard data lives.\n");

    let default_path = ScanfolioConfig::default_data_file()?;
    let data_path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Dashboard snapshot location")
        .default(default_path.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = ScanfolioConfig {
        data_file: Some(PathBuf::from(data_path)),
        ..ScanfolioConfig::default()
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
