//! Integration tests for scanfolio
//!
//! These tests drive the public API end to end: dashboard payloads are written
//! to temporary snapshot files, opened through the snapshot collaborator and
//! exercised through the dashboard controller.

use scanfolio::collaborator::{Collaborator, CollaboratorError, DEFAULT_FOLDERS, SnapshotCollaborator};
use scanfolio::commands;
use scanfolio::dashboard::{ActionOutcome, DashboardAction, DashboardController, DashboardError};
use scanfolio::filter::{FolderSelector, filter_records};
use scanfolio::hierarchy::{HierarchyError, build_tree, counts_by_folder, descendant_ids};
use scanfolio::model::{DashboardData, FolderId};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const WORK_AND_SUB: &str = r#"{
    "folders": [
        {"id": 1, "name": "Work", "parent_id": null},
        {"id": 2, "name": "Sub", "parent_id": 1}
    ],
    "records": [
        {"title": "A", "folder_id": 2},
        {"title": "B", "folder_id": null}
    ]
}"#;

/// Helper function to write a snapshot file into a fresh temp directory
fn write_snapshot(json: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

/// Helper function to open a loaded dashboard on a snapshot file
fn open(path: &Path) -> DashboardController<SnapshotCollaborator> {
    commands::open_dashboard(path).unwrap()
}

fn titles(dashboard: &DashboardController<SnapshotCollaborator>) -> Vec<String> {
    dashboard
        .filtered_records()
        .iter()
        .map(|r| r.title.clone())
        .collect()
}

#[test]
fn test_work_and_sub_scenario() {
    let data: DashboardData = serde_json::from_str(WORK_AND_SUB).unwrap();

    let closure = descendant_ids(&data.folders, FolderId(1));
    assert_eq!(closure, HashSet::from([FolderId(1), FolderId(2)]));

    let in_work = filter_records(&data.records, &data.folders, FolderSelector::Folder(FolderId(1)), "");
    assert_eq!(in_work.len(), 1);
    assert_eq!(in_work[0].title, "A");

    let loose = filter_records(&data.records, &data.folders, FolderSelector::Uncategorized, "");
    assert_eq!(loose.len(), 1);
    assert_eq!(loose[0].title, "B");

    let counts = counts_by_folder(&data.records, &data.folders);
    assert_eq!(counts.get(FolderId(1)), 1);
    assert_eq!(counts.get(FolderId(2)), 1);
    assert_eq!(counts.uncategorized, 1);
    assert_eq!(counts.all, 2);
}

#[test]
fn test_orphan_folder_becomes_root() {
    let data: DashboardData = serde_json::from_str(
        r#"{"folders": [{"id": 3, "name": "Orphan", "parent_id": 99}], "records": []}"#,
    )
    .unwrap();

    let forest = build_tree(&data.folders);
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].folder.name, "Orphan");
    assert!(forest[0].children.is_empty());
}

#[test]
fn test_dashboard_from_snapshot() {
    let (_dir, path) = write_snapshot(WORK_AND_SUB);
    let mut dashboard = open(&path);

    assert_eq!(dashboard.page_title(), "All Records");
    assert_eq!(titles(&dashboard), vec!["A", "B"]);

    dashboard
        .dispatch(DashboardAction::SelectFolder(FolderSelector::Folder(FolderId(1))))
        .unwrap();
    assert_eq!(dashboard.page_title(), "Work");
    assert_eq!(titles(&dashboard), vec!["A"]);

    dashboard
        .dispatch(DashboardAction::SelectFolder(FolderSelector::Uncategorized))
        .unwrap();
    assert_eq!(dashboard.page_title(), "Uncategorized Records");
    assert_eq!(titles(&dashboard), vec!["B"]);
}

#[test]
fn test_mutations_persist_across_reopen() {
    let (_dir, path) = write_snapshot(WORK_AND_SUB);

    {
        let mut dashboard = open(&path);
        let outcome = dashboard
            .dispatch(DashboardAction::CreateFolder {
                name: "Deep".into(),
                parent: Some(FolderId(2)),
            })
            .unwrap();
        assert_eq!(outcome, ActionOutcome::Updated);

        dashboard
            .dispatch(DashboardAction::MoveRecord {
                title: "B".into(),
                folder: Some(FolderId(3)),
            })
            .unwrap();
        dashboard
            .dispatch(DashboardAction::EditSubtitle {
                title: "B".into(),
                subtitle: "  moved deep  ".into(),
            })
            .unwrap();
    }

    let dashboard = open(&path);
    let b = dashboard.records().iter().find(|r| r.title == "B").unwrap();
    assert_eq!(b.folder_id, Some(FolderId(3)));
    assert_eq!(b.subtitle.as_deref(), Some("moved deep"));
    assert!(!b.updated_at.is_empty());

    let counts = dashboard.counts();
    assert_eq!(counts.get(FolderId(1)), 2);
    assert_eq!(counts.get(FolderId(2)), 2);
    assert_eq!(counts.get(FolderId(3)), 1);
    assert_eq!(counts.uncategorized, 0);
}

#[test]
fn test_delete_selected_folder_resets_selection() {
    let (_dir, path) = write_snapshot(WORK_AND_SUB);
    let mut dashboard = open(&path);

    dashboard
        .dispatch(DashboardAction::SelectFolder(FolderSelector::Folder(FolderId(2))))
        .unwrap();
    dashboard.dispatch(DashboardAction::DeleteFolder(FolderId(2))).unwrap();

    assert_eq!(dashboard.selection(), FolderSelector::All);
    let a = dashboard.records().iter().find(|r| r.title == "A").unwrap();
    assert!(a.is_uncategorized());
    assert_eq!(dashboard.counts().uncategorized, 2);

    let reopened = SnapshotCollaborator::open(&path).unwrap().into_data();
    assert_eq!(reopened.folders.len(), 1);
}

#[test]
fn test_search_within_folder() {
    let (_dir, path) = write_snapshot(
        r#"{
            "folders": [{"id": 1, "name": "Receipts"}],
            "records": [
                {"title": "Invoice Q1", "folder_id": 1},
                {"title": "Lunch", "subtitle": "INVOICE attached", "folder_id": 1},
                {"title": "Invoice Q2"}
            ]
        }"#,
    );
    let mut dashboard = open(&path);

    dashboard.dispatch(DashboardAction::Search("invoice".into())).unwrap();
    assert_eq!(titles(&dashboard), vec!["Invoice Q1", "Lunch", "Invoice Q2"]);

    dashboard
        .dispatch(DashboardAction::SelectFolder(FolderSelector::Folder(FolderId(1))))
        .unwrap();
    assert_eq!(titles(&dashboard), vec!["Invoice Q1", "Lunch"]);

    dashboard.dispatch(DashboardAction::Search("zzz".into())).unwrap();
    assert!(dashboard.view().is_empty());
}

#[test]
fn test_cyclic_snapshot_is_rejected() {
    let (_dir, path) = write_snapshot(
        r#"{
            "folders": [
                {"id": 1, "name": "A", "parent_id": 2},
                {"id": 2, "name": "B", "parent_id": 1}
            ],
            "records": []
        }"#,
    );

    let mut dashboard = DashboardController::new(SnapshotCollaborator::open(&path).unwrap());
    let result = dashboard.load();
    assert!(matches!(
        result,
        Err(DashboardError::Hierarchy(HierarchyError::Cycle { .. }))
    ));
    assert!(dashboard.folders().is_empty());
}

#[test]
fn test_failed_payload_is_rejected() {
    let (_dir, path) = write_snapshot(r#"{"success": false, "error": "Not logged in"}"#);

    let mut dashboard = DashboardController::new(SnapshotCollaborator::open(&path).unwrap());
    match dashboard.load() {
        Err(DashboardError::LoadFailed(reason)) => assert_eq!(reason, "Not logged in"),
        other => panic!("Expected LoadFailed, got {other:?}"),
    }
}

#[test]
fn test_init_then_use() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("dashboard.json");

    commands::init(&path, true).unwrap();
    let mut dashboard = open(&path);
    assert_eq!(dashboard.folders().len(), DEFAULT_FOLDERS.len());

    let archive = dashboard
        .folders()
        .iter()
        .find(|f| f.name == "Archive")
        .map(|f| f.id)
        .unwrap();
    dashboard
        .dispatch(DashboardAction::CreateFolder {
            name: "2024".into(),
            parent: Some(archive),
        })
        .unwrap();

    let forest = dashboard.tree();
    let archive_node = forest.iter().find(|n| n.id() == archive).unwrap();
    assert_eq!(archive_node.children.len(), 1);
    assert_eq!(archive_node.children[0].folder.name, "2024");
}

#[test]
fn test_collaborator_rejects_duplicate_folder() {
    let (_dir, path) = write_snapshot(WORK_AND_SUB);
    let mut collaborator = SnapshotCollaborator::open(&path).unwrap();

    assert!(collaborator.create_folder("Work", None).is_err());
    assert!(collaborator.create_folder("work", None).is_ok());
    assert_eq!(collaborator.load().unwrap().folders.len(), 3);
}

#[test]
fn test_create_under_missing_parent_keeps_snapshot_loadable() {
    let (_dir, path) = write_snapshot(WORK_AND_SUB);
    let mut dashboard = open(&path);

    let result = dashboard.dispatch(DashboardAction::CreateFolder {
        name: "X".into(),
        parent: Some(FolderId(3)),
    });
    assert!(matches!(
        result,
        Err(DashboardError::Collaborator(CollaboratorError::FolderNotFound(FolderId(3))))
    ));

    let reopened = open(&path);
    assert_eq!(reopened.folders().len(), 2);
}

#[test]
fn test_create_after_deleting_top_folder_stays_acyclic() {
    let (_dir, path) = write_snapshot(
        r#"{
            "folders": [
                {"id": 1, "name": "Root", "parent_id": null},
                {"id": 3, "name": "Parent", "parent_id": null},
                {"id": 2, "name": "Child", "parent_id": 3}
            ],
            "records": []
        }"#,
    );

    {
        let mut dashboard = open(&path);
        dashboard.dispatch(DashboardAction::DeleteFolder(FolderId(3))).unwrap();
        let outcome = dashboard
            .dispatch(DashboardAction::CreateFolder {
                name: "Unrelated".into(),
                parent: Some(FolderId(2)),
            })
            .unwrap();
        assert_eq!(outcome, ActionOutcome::Updated);
    }

    let dashboard = open(&path);
    let unrelated = dashboard
        .folders()
        .iter()
        .find(|f| f.name == "Unrelated")
        .unwrap();
    assert_ne!(unrelated.id, FolderId(3));
    assert_eq!(unrelated.parent_id, Some(FolderId(2)));

    let tree = dashboard.tree();
    let names: Vec<&str> = tree.iter().map(|n| n.folder.name.as_str()).collect();
    assert_eq!(names, vec!["Root", "Child"]);
}
