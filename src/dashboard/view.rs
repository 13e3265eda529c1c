//! Render-ready snapshot of the dashboard

use crate::filter::FolderSelector;
use crate::hierarchy::{FolderCounts, FolderNode};
use crate::model::{Folder, Record};

/// Everything a front end needs to draw the dashboard once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub title: String,
    pub selection: FolderSelector,
    pub search: String,
    pub tree: Vec<FolderNode>,
    pub records: Vec<Record>,
    pub counts: FolderCounts,
}

impl DashboardView {
    /// True when the filtered record list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Heading for the record list
///
/// A folder id that no longer exists falls back to the all-records heading.
#[must_use]
pub fn page_title(selection: FolderSelector, folders: &[Folder]) -> String {
    match selection {
        FolderSelector::All => "All Records".to_string(),
        FolderSelector::Uncategorized => "Uncategorized Records".to_string(),
        FolderSelector::Folder(id) => folders
            .iter()
            .find(|f| f.id == id)
            .map_or_else(|| "All Records".to_string(), |f| f.name.clone()),
    }
}

/// Folder name shown on a record card
#[must_use]
pub fn folder_label<'a>(record: &Record, folders: &'a [Folder]) -> &'a str {
    match record.folder_id {
        None => "Uncategorized",
        Some(id) => folders
            .iter()
            .find(|f| f.id == id)
            .map_or("Unknown", |f| f.name.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FolderId;
    use crate::testing::{record, work_and_sub};

    #[test]
    fn test_page_title() {
        let (folders, _) = work_and_sub();
        assert_eq!(page_title(FolderSelector::All, &folders), "All Records");
        assert_eq!(
            page_title(FolderSelector::Uncategorized, &folders),
            "Uncategorized Records"
        );
        assert_eq!(page_title(FolderSelector::Folder(FolderId(2)), &folders), "Sub");
        assert_eq!(
            page_title(FolderSelector::Folder(FolderId(9)), &folders),
            "All Records"
        );
    }

    #[test]
    fn test_folder_label() {
        let (folders, _) = work_and_sub();
        assert_eq!(folder_label(&record("x", Some(1)), &folders), "Work");
        assert_eq!(folder_label(&record("x", None), &folders), "Uncategorized");
        assert_eq!(folder_label(&record("x", Some(40)), &folders), "Unknown");
    }
}
