//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for scanfolio using the `clap` crate.
//!
//! # Commands
//!
//! - **tree**: Folder sidebar with record counts (default)
//! - **list**: Records in a folder selection, optionally searched
//! - **counts**: Record counts per folder
//! - **folder** / **record**: Mutations applied through the snapshot
//! - **export**: Write the filtered view as CSV or JSON
//! - **config**: Read and change configuration values
//!
//! Folder selections are written as `all`, `uncategorized` or a folder id.

use crate::export::ExportFormat;
use crate::filter::FolderSelector;
use crate::model::FolderId;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "scanfolio")]
#[command(about = "Folders and filters for scan records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dashboard snapshot to use (overrides config)
    #[arg(long = "data", value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Folder selection and search term shared by viewing commands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewArgs {
    /// Folder to show: all, uncategorized, or a folder id
    #[arg(short = 'f', long = "folder", value_name = "SELECTOR", default_value = "all")]
    pub folder: FolderSelector,

    /// Case-insensitive search over titles and subtitles
    #[arg(short = 's', long = "search", value_name = "TERM")]
    pub search: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create the dashboard snapshot and add the default folders
    Init,

    /// Show the folder tree with record counts (default)
    #[command(visible_alias = "t")]
    Tree,

    /// List records in a folder selection
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show record counts per folder, including subfolders
    Counts,

    /// Manage folders
    Folder {
        #[command(subcommand)]
        command: FolderCommands,
    },

    /// Manage records
    Record {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Export the filtered records
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Output format
        #[arg(long = "format", value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Folder management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum FolderCommands {
    /// Create a folder
    #[command(visible_alias = "new")]
    Create {
        /// Folder name
        name: String,

        /// Parent folder id, for a subfolder
        #[arg(short = 'p', long = "parent", value_name = "ID")]
        parent: Option<FolderId>,
    },

    /// Rename a folder
    Rename {
        /// Folder id
        id: FolderId,

        /// New name
        name: String,
    },

    /// Delete a folder; its records become uncategorized
    #[command(visible_alias = "rm")]
    Delete {
        /// Folder id
        id: FolderId,

        /// Skip the confirmation prompt
        #[arg(long = "force")]
        force: bool,
    },
}

/// Record management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum RecordCommands {
    /// Move a record into a folder, or `uncategorized`
    #[command(visible_alias = "mv")]
    Move {
        /// Record title
        title: String,

        /// Target: a folder id or `uncategorized`; pick interactively if omitted
        #[arg(value_name = "FOLDER")]
        folder: Option<FolderSelector>,
    },

    /// Give a record a new title
    Rename {
        /// Current title
        title: String,

        /// New title
        new_title: String,
    },

    /// Replace a record's subtitle
    Subtitle {
        /// Record title
        title: String,

        /// New subtitle (empty to clear)
        subtitle: String,
    },

    /// Delete a record
    #[command(visible_alias = "rm")]
    Delete {
        /// Record title
        title: String,

        /// Skip the confirmation prompt
        #[arg(long = "force")]
        force: bool,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., `data_file`)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Tree if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tree)
    }
}

impl ViewArgs {
    /// Search term, empty when none was given
    #[must_use]
    pub fn search_term(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }
}
