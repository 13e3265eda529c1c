//! Collaborator abstraction

use super::CollaboratorError;
use crate::model::{DashboardData, Folder, FolderId};

/// Request/response exchanges with the owner of the dashboard data
///
/// Each call is atomic from the caller's point of view. Callers reload via
/// [`Collaborator::load`] after any successful mutation rather than patching
/// their own copy.
pub trait Collaborator {
    /// Fetch the full payload
    ///
    /// # Errors
    /// Returns `CollaboratorError` if the payload cannot be produced.
    fn load(&self) -> Result<DashboardData, CollaboratorError>;

    /// Create a folder, optionally below `parent`
    ///
    /// # Errors
    /// Returns `EmptyName` or `FolderExists` on invalid names,
    /// `FolderNotFound` if `parent` is not an existing folder, or
    /// `FolderIdsExhausted` if no fresh id is left.
    fn create_folder(
        &mut self,
        name: &str,
        parent: Option<FolderId>,
    ) -> Result<Folder, CollaboratorError>;

    /// Rename a folder
    ///
    /// # Errors
    /// Returns `FolderNotFound`, `EmptyName` or `FolderExists`.
    fn rename_folder(&mut self, id: FolderId, name: &str) -> Result<(), CollaboratorError>;

    /// Delete a folder, moving its records to uncategorized
    ///
    /// # Errors
    /// Returns `FolderNotFound` if no such folder exists.
    fn delete_folder(&mut self, id: FolderId) -> Result<(), CollaboratorError>;

    /// Move a record into a folder, or out of all folders with `None`
    ///
    /// # Errors
    /// Returns `RecordNotFound` if no record has this title.
    fn move_record(&mut self, title: &str, folder: Option<FolderId>)
    -> Result<(), CollaboratorError>;

    /// Give a record a new unique title
    ///
    /// # Errors
    /// Returns `EmptyTitle`, `RecordExists` or `RecordNotFound`.
    fn rename_record(&mut self, old_title: &str, new_title: &str) -> Result<(), CollaboratorError>;

    /// Replace a record's subtitle
    ///
    /// # Errors
    /// Returns `EmptyTitle` or `RecordNotFound`.
    fn update_subtitle(&mut self, title: &str, subtitle: &str) -> Result<(), CollaboratorError>;

    /// Delete a record
    ///
    /// # Errors
    /// Returns `RecordNotFound` if no record has this title.
    fn delete_record(&mut self, title: &str) -> Result<(), CollaboratorError>;
}
