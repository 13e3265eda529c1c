//! Testing utilities for scanfolio
//!
//! Fixture builders for folders, records and dashboard payloads, plus a
//! `TestSnapshot` wrapper for snapshot files that cleans up on drop.
//!
//! Only available when compiled with `cfg(test)`.

use crate::collaborator::SnapshotCollaborator;
use crate::model::{DashboardData, Folder, FolderId, Record};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build a folder with an optional parent id
#[must_use]
pub fn folder(id: i64, name: &str, parent: Option<i64>) -> Folder {
    Folder::new(id, name, parent.map(FolderId))
}

/// Build a record with an optional folder id
#[must_use]
pub fn record(title: &str, folder_id: Option<i64>) -> Record {
    Record::new(title, folder_id.map(FolderId))
}

/// Two nested folders, one record in the child and one uncategorized
///
/// Folders: `1 Work` > `2 Sub`. Records: `A` in 2, `B` without folder.
#[must_use]
pub fn work_and_sub() -> (Vec<Folder>, Vec<Record>) {
    (
        vec![folder(1, "Work", None), folder(2, "Sub", Some(1))],
        vec![record("A", Some(2)), record("B", None)],
    )
}

/// A small but realistic dashboard payload
///
/// ```text
/// 1 Work Projects
///   2 Clients
///     5 Acme
/// 3 Personal Records
/// 4 Archive
/// ```
#[must_use]
pub fn sample_dashboard() -> DashboardData {
    let folders = vec![
        folder(1, "Work Projects", None),
        folder(2, "Clients", Some(1)),
        folder(3, "Personal Records", None),
        folder(4, "Archive", None),
        folder(5, "Acme", Some(2)),
    ];
    let records = vec![
        record("Invoice Q1", Some(5)).with_subtitle("Acme billing"),
        record("Inventory March", Some(1)),
        record("Groceries", Some(3)).with_subtitle("weekly"),
        record("Loose scan", None),
    ];
    DashboardData::new(folders, records)
}

/// Snapshot file in a temporary directory, removed on drop
pub struct TestSnapshot {
    path: PathBuf,
    _dir: TempDir,
}

impl TestSnapshot {
    /// Write `data` to a fresh snapshot file
    ///
    /// # Panics
    /// Panics if the temporary directory or the file cannot be created.
    #[must_use]
    pub fn new(data: &DashboardData) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("dashboard.json");
        SnapshotCollaborator::create(&path, data.clone()).expect("Failed to write test snapshot");
        Self { path, _dir: dir }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a collaborator backed by this snapshot
    ///
    /// # Panics
    /// Panics if the snapshot cannot be read.
    #[must_use]
    pub fn open(&self) -> SnapshotCollaborator {
        SnapshotCollaborator::open(&self.path).expect("Failed to open test snapshot")
    }
}
