//! Scanfolio - folder hierarchy and record filtering for scan dashboards
//!
//! Records produced by a barcode/QR scanner live in a flat list, each
//! optionally filed into a folder. Folders form a forest through parent
//! references. This library builds that forest, answers "which folders are
//! below this one", counts records per folder including subfolders, and
//! filters the record list by folder selection and search term.
//!
//! The dashboard state and the mutations a user can request sit on top of a
//! [`collaborator::Collaborator`], which owns the data. The bundled
//! [`collaborator::SnapshotCollaborator`] keeps it in a JSON file.

use thiserror::Error;

pub mod cli;
pub mod collaborator;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod filter;
pub mod hierarchy;
pub mod logging;
pub mod model;
pub mod output;

#[cfg(test)]
pub mod testing;

pub use model::{DashboardData, Folder, FolderId, Record};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ScanfolioError {
    #[error("Dashboard error: {0}")]
    Dashboard(#[from] dashboard::DashboardError),
    #[error("Collaborator error: {0}")]
    Collaborator(#[from] collaborator::CollaboratorError),
    #[error("Hierarchy error: {0}")]
    Hierarchy(#[from] hierarchy::HierarchyError),
    #[error("Filter error: {0}")]
    Filter(#[from] filter::FilterError),
    #[error("Export error: {0}")]
    Export(#[from] export::ExportError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
