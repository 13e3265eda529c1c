//! In-process collaborator backed by an optional JSON snapshot file

use super::{Collaborator, CollaboratorError};
use crate::model::{DashboardData, Folder, FolderId, Record};
use std::fs;
use std::path::{Path, PathBuf};

/// Folders every new dashboard starts with
pub const DEFAULT_FOLDERS: [&str; 4] = [
    "Work Projects",
    "Personal Records",
    "Archive",
    "Important Documents",
];

type Result<T> = std::result::Result<T, CollaboratorError>;

/// Applies the dashboard server's rules to a payload held in memory
///
/// When created with [`SnapshotCollaborator::open`] or
/// [`SnapshotCollaborator::create`], every successful mutation is written
/// back to the snapshot file before it becomes visible to `load`. A failed
/// write leaves the previous payload in place.
#[derive(Debug, Clone)]
pub struct SnapshotCollaborator {
    data: DashboardData,
    path: Option<PathBuf>,
}

impl SnapshotCollaborator {
    /// A collaborator that only lives in memory
    #[must_use]
    pub const fn in_memory(data: DashboardData) -> Self {
        Self { data, path: None }
    }

    /// Read an existing snapshot file
    ///
    /// # Errors
    /// Returns `CollaboratorError::Io` if the file cannot be read, or
    /// `CollaboratorError::Json` if it is not a valid payload.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let data: DashboardData = serde_json::from_str(&contents)?;
        tracing::debug!(
            "Opened snapshot {:?} ({} folders, {} records)",
            path,
            data.folders.len(),
            data.records.len()
        );
        Ok(Self {
            data,
            path: Some(path.to_path_buf()),
        })
    }

    /// Write `data` to a new snapshot file, creating parent directories
    ///
    /// # Errors
    /// Returns `CollaboratorError::Io` if the file cannot be written.
    pub fn create(path: impl AsRef<Path>, data: DashboardData) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        write_snapshot(path, &data)?;
        tracing::info!("Created snapshot {:?}", path);
        Ok(Self {
            data,
            path: Some(path.to_path_buf()),
        })
    }

    /// Snapshot file backing this collaborator, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current payload
    #[must_use]
    pub const fn data(&self) -> &DashboardData {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> DashboardData {
        self.data
    }

    /// Add any of [`DEFAULT_FOLDERS`] that are missing (compared case-insensitively)
    ///
    /// Returns the number of folders created.
    ///
    /// # Errors
    /// Returns `CollaboratorError::Io` if the snapshot cannot be written.
    pub fn seed_default_folders(&mut self) -> Result<usize> {
        let mut next = self.data.clone();
        let mut created = 0;

        for name in DEFAULT_FOLDERS {
            let exists = next
                .folders
                .iter()
                .any(|f| f.name.to_lowercase() == name.to_lowercase());
            if !exists {
                let mut folder = Folder::new(next_folder_id(&next)?, name, None);
                stamp_created(&mut folder);
                next.folders.push(folder);
                created += 1;
            }
        }

        if created > 0 {
            self.commit(next)?;
        }
        Ok(created)
    }

    fn commit(&mut self, next: DashboardData) -> Result<()> {
        if let Some(path) = &self.path {
            write_snapshot(path, &next)?;
        }
        self.data = next;
        Ok(())
    }

    fn record_index(data: &DashboardData, title: &str) -> Result<usize> {
        data.records
            .iter()
            .position(|r| r.title == title)
            .ok_or_else(|| CollaboratorError::RecordNotFound(title.to_string()))
    }

    fn folder_index(data: &DashboardData, id: FolderId) -> Result<usize> {
        data.folders
            .iter()
            .position(|f| f.id == id)
            .ok_or(CollaboratorError::FolderNotFound(id))
    }
}

impl Collaborator for SnapshotCollaborator {
    fn load(&self) -> Result<DashboardData> {
        Ok(self.data.clone())
    }

    fn create_folder(&mut self, name: &str, parent: Option<FolderId>) -> Result<Folder> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CollaboratorError::EmptyName);
        }
        if self.data.folders.iter().any(|f| f.name == name) {
            return Err(CollaboratorError::FolderExists(name.to_string()));
        }
        if let Some(parent) = parent {
            Self::folder_index(&self.data, parent)?;
        }

        let mut next = self.data.clone();
        let mut folder = Folder::new(next_folder_id(&next)?, name, parent);
        stamp_created(&mut folder);
        next.folders.push(folder.clone());
        self.commit(next)?;

        tracing::info!("Created folder {} '{}' (parent: {:?})", folder.id, folder.name, parent);
        Ok(folder)
    }

    fn rename_folder(&mut self, id: FolderId, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CollaboratorError::EmptyName);
        }
        let index = Self::folder_index(&self.data, id)?;
        if self.data.folders.iter().any(|f| f.name == name) {
            return Err(CollaboratorError::FolderExists(name.to_string()));
        }

        let mut next = self.data.clone();
        next.folders[index].name = name.to_string();
        next.folders[index].updated_at = today();
        for record in next.records.iter_mut().filter(|r| r.folder_id == Some(id)) {
            if record.folder_name.is_some() {
                record.folder_name = Some(name.to_string());
            }
        }
        self.commit(next)?;

        tracing::info!("Renamed folder {} to '{}'", id, name);
        Ok(())
    }

    fn delete_folder(&mut self, id: FolderId) -> Result<()> {
        let index = Self::folder_index(&self.data, id)?;

        let mut next = self.data.clone();
        let mut moved = 0;
        for record in next.records.iter_mut().filter(|r| r.folder_id == Some(id)) {
            record.folder_id = None;
            record.folder_name = None;
            moved += 1;
        }
        // Subfolders stay behind; their parent is gone, so they show up as roots.
        next.folders.remove(index);
        self.commit(next)?;

        tracing::info!("Deleted folder {} ({} record(s) now uncategorized)", id, moved);
        Ok(())
    }

    fn move_record(&mut self, title: &str, folder: Option<FolderId>) -> Result<()> {
        let index = Self::record_index(&self.data, title)?;
        if let Some(id) = folder
            && !self.data.folders.iter().any(|f| f.id == id)
        {
            tracing::warn!("Moving '{}' into unknown folder {}", title, id);
        }

        let mut next = self.data.clone();
        let record = &mut next.records[index];
        record.folder_id = folder;
        record.folder_name = None;
        record.updated_at = today();
        self.commit(next)?;

        tracing::info!("Moved '{}' to {:?}", title, folder);
        Ok(())
    }

    fn rename_record(&mut self, old_title: &str, new_title: &str) -> Result<()> {
        let (old_title, new_title) = (old_title.trim(), new_title.trim());
        if old_title.is_empty() || new_title.is_empty() {
            return Err(CollaboratorError::EmptyTitle);
        }
        if self.data.records.iter().any(|r| r.title == new_title) {
            return Err(CollaboratorError::RecordExists(new_title.to_string()));
        }
        let index = Self::record_index(&self.data, old_title)?;

        let mut next = self.data.clone();
        next.records[index].title = new_title.to_string();
        next.records[index].updated_at = today();
        self.commit(next)?;

        tracing::info!("Renamed record '{}' to '{}'", old_title, new_title);
        Ok(())
    }

    fn update_subtitle(&mut self, title: &str, subtitle: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CollaboratorError::EmptyTitle);
        }
        let index = Self::record_index(&self.data, title)?;

        let mut next = self.data.clone();
        next.records[index].subtitle = Some(subtitle.trim().to_string());
        next.records[index].updated_at = today();
        self.commit(next)?;

        tracing::info!("Updated subtitle for '{}'", title);
        Ok(())
    }

    fn delete_record(&mut self, title: &str) -> Result<()> {
        let index = Self::record_index(&self.data, title)?;

        let mut next = self.data.clone();
        let removed: Record = next.records.remove(index);
        self.commit(next)?;

        tracing::info!("Deleted record '{}'", removed.title);
        Ok(())
    }
}

fn write_snapshot(path: &Path, data: &DashboardData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

/// One past the highest id any folder has or any folder or record still
/// points at, so a deleted folder's id is never handed out while something
/// references it.
fn next_folder_id(data: &DashboardData) -> Result<FolderId> {
    let folder_ids = data
        .folders
        .iter()
        .flat_map(|f| std::iter::once(f.id).chain(f.parent_id));
    let record_ids = data.records.iter().filter_map(|r| r.folder_id);

    let high = folder_ids.chain(record_ids).map(FolderId::get).max().unwrap_or(0);
    high.max(0)
        .checked_add(1)
        .map(FolderId)
        .ok_or(CollaboratorError::FolderIdsExhausted)
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn stamp_created(folder: &mut Folder) {
    let now = today();
    folder.created_at.clone_from(&now);
    folder.updated_at = now;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestSnapshot, folder, record, sample_dashboard, work_and_sub};

    fn collaborator() -> SnapshotCollaborator {
        let (folders, records) = work_and_sub();
        SnapshotCollaborator::in_memory(DashboardData::new(folders, records))
    }

    #[test]
    fn test_load_returns_payload() {
        let c = collaborator();
        let data = c.load().unwrap();
        assert_eq!(data.folders.len(), 2);
        assert_eq!(data.records.len(), 2);
    }

    #[test]
    fn test_create_folder_assigns_next_id() {
        let mut c = collaborator();
        let created = c.create_folder("  Receipts  ", Some(FolderId(1))).unwrap();

        assert_eq!(created.id, FolderId(3));
        assert_eq!(created.name, "Receipts");
        assert_eq!(created.parent_id, Some(FolderId(1)));
        assert!(!created.created_at.is_empty());
        assert_eq!(c.data().folders.len(), 3);
    }

    #[test]
    fn test_create_folder_rejects_empty_name() {
        let mut c = collaborator();
        assert!(matches!(c.create_folder("   ", None), Err(CollaboratorError::EmptyName)));
    }

    #[test]
    fn test_create_folder_rejects_duplicate_name() {
        let mut c = collaborator();
        let err = c.create_folder("Work", None).unwrap_err();
        assert!(matches!(err, CollaboratorError::FolderExists(name) if name == "Work"));
    }

    #[test]
    fn test_create_folder_rejects_missing_parent() {
        let mut c = collaborator();
        // 3 is the id the new folder would get, so it must not become its own parent.
        assert!(matches!(
            c.create_folder("X", Some(FolderId(3))),
            Err(CollaboratorError::FolderNotFound(FolderId(3)))
        ));
        assert_eq!(c.data().folders.len(), 2);
    }

    #[test]
    fn test_create_folder_does_not_reuse_referenced_id() {
        let data = DashboardData::new(
            vec![
                folder(1, "Root", None),
                folder(3, "Parent", None),
                folder(2, "Child", Some(3)),
            ],
            vec![],
        );
        let mut c = SnapshotCollaborator::in_memory(data);
        c.delete_folder(FolderId(3)).unwrap();

        let created = c.create_folder("Unrelated", Some(FolderId(2))).unwrap();
        assert_eq!(created.id, FolderId(4));
        assert!(crate::hierarchy::validate(&c.data().folders).is_ok());
    }

    #[test]
    fn test_create_folder_skips_ids_held_by_records() {
        let data = DashboardData::new(vec![folder(1, "Work", None)], vec![record("x", Some(9))]);
        let mut c = SnapshotCollaborator::in_memory(data);

        let created = c.create_folder("New", None).unwrap();
        assert_eq!(created.id, FolderId(10));
    }

    #[test]
    fn test_create_folder_ids_exhausted() {
        let data = DashboardData::new(vec![folder(i64::MAX, "Last", None)], vec![]);
        let mut c = SnapshotCollaborator::in_memory(data);

        assert!(matches!(
            c.create_folder("X", None),
            Err(CollaboratorError::FolderIdsExhausted)
        ));
        assert!(matches!(
            c.seed_default_folders(),
            Err(CollaboratorError::FolderIdsExhausted)
        ));
        assert_eq!(c.data().folders.len(), 1);
    }

    #[test]
    fn test_rename_folder() {
        let mut c = collaborator();
        c.rename_folder(FolderId(2), "Renamed").unwrap();
        assert_eq!(c.data().folders[1].name, "Renamed");
    }

    #[test]
    fn test_rename_folder_missing() {
        let mut c = collaborator();
        assert!(matches!(
            c.rename_folder(FolderId(9), "X"),
            Err(CollaboratorError::FolderNotFound(FolderId(9)))
        ));
    }

    #[test]
    fn test_rename_folder_conflict() {
        let mut c = collaborator();
        assert!(matches!(
            c.rename_folder(FolderId(2), "Work"),
            Err(CollaboratorError::FolderExists(_))
        ));
    }

    #[test]
    fn test_rename_folder_refreshes_denormalized_names() {
        let mut data = sample_dashboard();
        data.records[0].folder_name = Some("Acme".into());
        let mut c = SnapshotCollaborator::in_memory(data);

        c.rename_folder(FolderId(5), "Acme Corp").unwrap();
        assert_eq!(c.data().records[0].folder_name.as_deref(), Some("Acme Corp"));
        assert!(c.data().records[1].folder_name.is_none());
    }

    #[test]
    fn test_delete_folder_uncategorizes_direct_records_only() {
        let mut c = SnapshotCollaborator::in_memory(sample_dashboard());
        c.delete_folder(FolderId(2)).unwrap();

        let data = c.data();
        assert!(data.folders.iter().all(|f| f.id != FolderId(2)));
        // Acme (5) keeps its dangling parent reference and its record.
        let acme = data.folders.iter().find(|f| f.id == FolderId(5)).unwrap();
        assert_eq!(acme.parent_id, Some(FolderId(2)));
        assert_eq!(data.records[0].folder_id, Some(FolderId(5)));
    }

    #[test]
    fn test_delete_folder_moves_records_out() {
        let mut c = collaborator();
        c.delete_folder(FolderId(2)).unwrap();
        assert!(c.data().records.iter().all(Record::is_uncategorized));
    }

    #[test]
    fn test_move_record() {
        let mut c = collaborator();
        c.move_record("B", Some(FolderId(1))).unwrap();
        assert_eq!(c.data().records[1].folder_id, Some(FolderId(1)));

        c.move_record("B", None).unwrap();
        assert!(c.data().records[1].is_uncategorized());
    }

    #[test]
    fn test_move_record_missing() {
        let mut c = collaborator();
        assert!(matches!(
            c.move_record("nope", None),
            Err(CollaboratorError::RecordNotFound(t)) if t == "nope"
        ));
    }

    #[test]
    fn test_rename_record() {
        let mut c = collaborator();
        c.rename_record("A", " A2 ").unwrap();
        assert_eq!(c.data().records[0].title, "A2");
        assert!(!c.data().records[0].updated_at.is_empty());
    }

    #[test]
    fn test_rename_record_conflict_checked_first() {
        let mut c = collaborator();
        assert!(matches!(
            c.rename_record("A", "B"),
            Err(CollaboratorError::RecordExists(t)) if t == "B"
        ));
        assert!(matches!(c.rename_record("A", ""), Err(CollaboratorError::EmptyTitle)));
    }

    #[test]
    fn test_update_subtitle_trims() {
        let mut c = collaborator();
        c.update_subtitle("A", "  shelf 4 ").unwrap();
        assert_eq!(c.data().records[0].subtitle.as_deref(), Some("shelf 4"));
    }

    #[test]
    fn test_delete_record() {
        let mut c = collaborator();
        c.delete_record("A").unwrap();
        assert_eq!(c.data().records.len(), 1);
        assert!(c.delete_record("A").is_err());
    }

    #[test]
    fn test_seed_default_folders_skips_existing() {
        let data = DashboardData::new(vec![folder(7, "archive", None)], vec![record("x", None)]);
        let mut c = SnapshotCollaborator::in_memory(data);

        assert_eq!(c.seed_default_folders().unwrap(), 3);
        let names: Vec<&str> = c.data().folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["archive", "Work Projects", "Personal Records", "Important Documents"]
        );
        assert_eq!(c.data().folders[1].id, FolderId(8));
        assert_eq!(c.seed_default_folders().unwrap(), 0);
    }

    #[test]
    fn test_mutations_persist_to_snapshot() {
        let snapshot = TestSnapshot::new(&sample_dashboard());
        let mut c = snapshot.open();
        c.move_record("Loose scan", Some(FolderId(4))).unwrap();

        let reopened = snapshot.open();
        let moved = reopened
            .data()
            .records
            .iter()
            .find(|r| r.title == "Loose scan")
            .unwrap();
        assert_eq!(moved.folder_id, Some(FolderId(4)));
        assert_eq!(reopened.path(), Some(snapshot.path()));
    }

    #[test]
    fn test_open_invalid_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            SnapshotCollaborator::open(&path),
            Err(CollaboratorError::Json(_))
        ));
    }

    #[test]
    fn test_open_missing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SnapshotCollaborator::open(dir.path().join("missing.json")),
            Err(CollaboratorError::Io(_))
        ));
    }
}
