//! Collaborator error types
//!
//! Mirrors the error replies of the dashboard server: validation failures
//! (empty or duplicate names), missing targets, and failures loading or
//! storing the payload itself.

use crate::model::FolderId;
use thiserror::Error;

/// Errors returned by collaborator exchanges
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// Folder name was empty after trimming
    #[error("Folder name is required")]
    EmptyName,

    /// Another folder already uses this name
    #[error("Folder '{0}' already exists")]
    FolderExists(String),

    /// No folder with this id
    #[error("Folder not found: {0}")]
    FolderNotFound(FolderId),

    /// Every folder id up to `i64::MAX` is taken or referenced
    #[error("No folder ids left to assign")]
    FolderIdsExhausted,

    /// A record title was empty after trimming
    #[error("Record title is required")]
    EmptyTitle,

    /// No record with this title
    #[error("Record '{0}' not found")]
    RecordNotFound(String),

    /// Another record already uses this title
    #[error("A record with the title '{0}' already exists")]
    RecordExists(String),

    /// Reading or writing the snapshot file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file is not a valid payload
    #[error("Invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
