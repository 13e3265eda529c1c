//! Dashboard state and action dispatch

use super::{ActionOutcome, DashboardAction, DashboardError, DashboardView, page_title};
use crate::collaborator::Collaborator;
use crate::filter::{FolderSelector, RecordFilter, RecordFilterExt};
use crate::hierarchy::{self, FolderCounts, FolderNode};
use crate::model::{Folder, FolderId, Record};

type Result<T> = std::result::Result<T, DashboardError>;

/// Holds the dashboard's state between events
///
/// Folders and records are empty until the first [`load`](Self::load) and
/// are only ever replaced wholesale by a reload. The selection starts at
/// [`FolderSelector::All`] with an empty search term.
#[derive(Debug)]
pub struct DashboardController<C> {
    collaborator: C,
    folders: Vec<Folder>,
    records: Vec<Record>,
    selection: FolderSelector,
    search: String,
}

impl<C: Collaborator> DashboardController<C> {
    #[must_use]
    pub const fn new(collaborator: C) -> Self {
        Self {
            collaborator,
            folders: Vec::new(),
            records: Vec::new(),
            selection: FolderSelector::All,
            search: String::new(),
        }
    }

    /// Replace folders and records with a fresh payload from the collaborator
    ///
    /// The new payload is only installed if it loaded successfully and its
    /// folder hierarchy is acyclic; otherwise the previous data stays.
    ///
    /// # Errors
    /// Returns `DashboardError` if the collaborator fails, the payload
    /// reports failure, or the hierarchy contains a cycle.
    pub fn load(&mut self) -> Result<()> {
        let data = self.collaborator.load()?;
        if !data.success {
            let reason = data.error.unwrap_or_else(|| "unknown error".to_string());
            tracing::error!("Failed to load data: {}", reason);
            return Err(DashboardError::LoadFailed(reason));
        }
        if let Err(e) = hierarchy::validate(&data.folders) {
            tracing::error!("Rejected dashboard data: {}", e);
            return Err(e.into());
        }

        self.folders = data.folders;
        self.records = data.records;
        tracing::debug!(
            "Loaded {} folders and {} records",
            self.folders.len(),
            self.records.len()
        );
        Ok(())
    }

    /// Apply one user action
    ///
    /// # Errors
    /// Returns `DashboardError` if the collaborator rejects a mutation or the
    /// reload after it fails.
    pub fn dispatch(&mut self, action: DashboardAction) -> Result<ActionOutcome> {
        if action.is_mutation() {
            tracing::info!("{}", action.description());
        } else {
            tracing::debug!("{}", action.description());
        }

        match action {
            DashboardAction::SelectFolder(selection) => Ok(self.select_folder(selection)),
            DashboardAction::Search(term) => {
                self.search = term;
                Ok(ActionOutcome::ViewChanged)
            }
            DashboardAction::CreateFolder { name, parent } => self.create_folder(&name, parent),
            DashboardAction::RenameFolder { id, name } => self.rename_folder(id, &name),
            DashboardAction::DeleteFolder(id) => self.delete_folder(id),
            DashboardAction::MoveRecord { title, folder } => {
                self.collaborator.move_record(&title, folder)?;
                self.reload()
            }
            DashboardAction::RenameRecord { title, new_title } => {
                self.rename_record(&title, &new_title)
            }
            DashboardAction::EditSubtitle { title, subtitle } => {
                self.edit_subtitle(&title, &subtitle)
            }
            DashboardAction::DeleteRecord(title) => {
                self.collaborator.delete_record(&title)?;
                self.reload()
            }
            DashboardAction::Reload => self.reload(),
        }
    }

    fn reload(&mut self) -> Result<ActionOutcome> {
        self.load()?;
        Ok(ActionOutcome::Updated)
    }

    fn select_folder(&mut self, selection: FolderSelector) -> ActionOutcome {
        if let FolderSelector::Folder(id) = selection
            && !self.folders.iter().any(|f| f.id == id)
        {
            tracing::warn!("Selected folder {} is not in the current data", id);
        }
        self.selection = selection;
        ActionOutcome::ViewChanged
    }

    fn create_folder(&mut self, name: &str, parent: Option<FolderId>) -> Result<ActionOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(ActionOutcome::Unchanged);
        }
        self.collaborator.create_folder(name, parent)?;
        self.reload()
    }

    fn rename_folder(&mut self, id: FolderId, name: &str) -> Result<ActionOutcome> {
        let name = name.trim();
        let current = self.folders.iter().find(|f| f.id == id).map(|f| f.name.as_str());
        if name.is_empty() || current == Some(name) {
            return Ok(ActionOutcome::Unchanged);
        }
        self.collaborator.rename_folder(id, name)?;
        self.reload()
    }

    fn delete_folder(&mut self, id: FolderId) -> Result<ActionOutcome> {
        self.collaborator.delete_folder(id)?;
        let outcome = self.reload()?;
        if self.selection == FolderSelector::Folder(id) {
            self.selection = FolderSelector::All;
        }
        Ok(outcome)
    }

    fn rename_record(&mut self, title: &str, new_title: &str) -> Result<ActionOutcome> {
        let new_title = new_title.trim();
        if new_title.is_empty() || new_title == title {
            return Ok(ActionOutcome::Unchanged);
        }
        self.collaborator.rename_record(title, new_title)?;
        self.reload()
    }

    fn edit_subtitle(&mut self, title: &str, subtitle: &str) -> Result<ActionOutcome> {
        let current = self
            .records
            .iter()
            .find(|r| r.title == title)
            .and_then(|r| r.subtitle.as_deref())
            .unwrap_or("");
        if subtitle.trim() == current.trim() {
            return Ok(ActionOutcome::Unchanged);
        }
        self.collaborator.update_subtitle(title, subtitle)?;
        self.reload()
    }

    /// Records passing the current selection and search, in original order
    #[must_use]
    pub fn filtered_records(&self) -> Vec<&Record> {
        let filter = RecordFilter::new(&self.folders, self.selection, &self.search);
        self.records.iter().filter_records(&filter)
    }

    /// Folder forest for the sidebar
    #[must_use]
    pub fn tree(&self) -> Vec<FolderNode> {
        hierarchy::build_tree(&self.folders)
    }

    /// Sidebar counts
    #[must_use]
    pub fn counts(&self) -> FolderCounts {
        hierarchy::counts_by_folder(&self.records, &self.folders)
    }

    #[must_use]
    pub fn page_title(&self) -> String {
        page_title(self.selection, &self.folders)
    }

    /// Build everything needed for one render
    #[must_use]
    pub fn view(&self) -> DashboardView {
        DashboardView {
            title: self.page_title(),
            selection: self.selection,
            search: self.search.clone(),
            tree: self.tree(),
            records: self.filtered_records().into_iter().cloned().collect(),
            counts: self.counts(),
        }
    }

    #[must_use]
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn selection(&self) -> FolderSelector {
        self.selection
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn collaborator(&self) -> &C {
        &self.collaborator
    }
}
