//! Action types for the dashboard

use crate::filter::FolderSelector;
use crate::model::FolderId;

/// Everything a user can do on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// Show a folder (with subfolders), all records, or uncategorized records
    SelectFolder(FolderSelector),
    /// Replace the search term
    Search(String),
    /// Create a folder, optionally as a subfolder
    CreateFolder {
        name: String,
        parent: Option<FolderId>,
    },
    RenameFolder {
        id: FolderId,
        name: String,
    },
    /// Delete a folder; its records become uncategorized
    DeleteFolder(FolderId),
    /// Move a record into a folder, `None` for uncategorized
    MoveRecord {
        title: String,
        folder: Option<FolderId>,
    },
    RenameRecord {
        title: String,
        new_title: String,
    },
    EditSubtitle {
        title: String,
        subtitle: String,
    },
    DeleteRecord(String),
    /// Fetch fresh data without changing anything
    Reload,
}

/// What dispatching an action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Only the view state (selection or search) changed
    ViewChanged,
    /// The collaborator applied a change and the data was reloaded
    Updated,
    /// Nothing to do, e.g. a rename to the same name
    Unchanged,
}

impl DashboardAction {
    /// Whether this action goes through the collaborator
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::SelectFolder(_) | Self::Search(_) | Self::Reload)
    }

    /// Human-readable description of the action
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::SelectFolder(_) => "Select folder",
            Self::Search(_) => "Search records",
            Self::CreateFolder { .. } => "Create folder",
            Self::RenameFolder { .. } => "Rename folder",
            Self::DeleteFolder(_) => "Delete folder",
            Self::MoveRecord { .. } => "Move record to folder",
            Self::RenameRecord { .. } => "Rename record",
            Self::EditSubtitle { .. } => "Edit subtitle",
            Self::DeleteRecord(_) => "Delete record",
            Self::Reload => "Reload",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_mutation() {
        assert!(!DashboardAction::SelectFolder(FolderSelector::All).is_mutation());
        assert!(!DashboardAction::Search("x".into()).is_mutation());
        assert!(!DashboardAction::Reload.is_mutation());
        assert!(DashboardAction::DeleteFolder(FolderId(1)).is_mutation());
        assert!(DashboardAction::DeleteRecord("A".into()).is_mutation());
    }

    #[test]
    fn test_description() {
        assert_eq!(
            DashboardAction::MoveRecord {
                title: "A".into(),
                folder: None
            }
            .description(),
            "Move record to folder"
        );
    }
}
