//! Init command - create the snapshot and add the default folders

use crate::collaborator::SnapshotCollaborator;
use crate::model::DashboardData;
use crate::{ScanfolioError, output};
use std::path::Path;

type Result<T> = std::result::Result<T, ScanfolioError>;

/// Execute the init command
///
/// An existing snapshot is kept; only missing default folders are added.
///
/// # Errors
/// Returns `ScanfolioError` if the snapshot cannot be read or written.
pub fn execute(path: &Path, quiet: bool) -> Result<usize> {
    let mut collaborator = if path.exists() {
        SnapshotCollaborator::open(path)?
    } else {
        SnapshotCollaborator::create(path, DashboardData::default())?
    };

    let created = collaborator.seed_default_folders()?;

    if !quiet {
        if created == 0 {
            println!("Dashboard at {} already has the default folders.", path.display());
        } else {
            println!(
                "{}",
                output::success(&format!(
                    "Created {created} default folder(s) in {}",
                    path.display()
                ))
            );
        }
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborator::DEFAULT_FOLDERS;
    use crate::testing::{TestSnapshot, folder};

    #[test]
    fn test_init_creates_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dashboard.json");

        assert_eq!(execute(&path, true).unwrap(), DEFAULT_FOLDERS.len());
        let data = SnapshotCollaborator::open(&path).unwrap().into_data();
        let names: Vec<_> = data.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, DEFAULT_FOLDERS);
    }

    #[test]
    fn test_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");

        execute(&path, true).unwrap();
        assert_eq!(execute(&path, true).unwrap(), 0);
    }

    #[test]
    fn test_init_keeps_existing_data() {
        let data = DashboardData::new(vec![folder(7, "archive", None)], Vec::new());
        let snapshot = TestSnapshot::new(&data);

        assert_eq!(execute(snapshot.path(), true).unwrap(), 3);
        let folders = snapshot.open().into_data().folders;
        assert_eq!(folders[0].name, "archive");
        assert_eq!(folders.len(), 4);
    }
}
