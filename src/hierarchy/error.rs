//! Hierarchy-specific error types

use crate::model::FolderId;
use thiserror::Error;

/// Errors reported by the checked hierarchy operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// A folder's ancestor chain loops back onto itself
    #[error("Folder {folder} is part of a parent cycle")]
    Cycle { folder: FolderId },
}
