//! Record counts per folder, including subfolders

use super::descendant_ids;
use crate::model::{Folder, FolderId, Record};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Record totals for the dashboard sidebar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FolderCounts {
    /// Every record
    pub all: usize,
    /// Records without a folder
    pub uncategorized: usize,
    /// Records in each folder or any of its descendants; every folder has an entry
    pub by_folder: BTreeMap<FolderId, usize>,
}

impl FolderCounts {
    /// Count for a folder, 0 for folders that were not part of the computation
    #[must_use]
    pub fn get(&self, id: FolderId) -> usize {
        self.by_folder.get(&id).copied().unwrap_or(0)
    }
}

/// Count records for every folder, the whole set, and the uncategorized bucket
///
/// A record counts towards folder `F` when its `folder_id` is in
/// `descendant_ids(F)`. Rather than scanning all records once per folder,
/// records are grouped by folder id and each distinct id is credited to
/// itself and every ancestor reachable through `parent_id`.
#[must_use]
pub fn counts_by_folder(records: &[Record], folders: &[Folder]) -> FolderCounts {
    let mut by_folder: BTreeMap<FolderId, usize> = folders.iter().map(|f| (f.id, 0)).collect();

    let mut parents: HashMap<FolderId, Vec<FolderId>> = HashMap::new();
    for folder in folders {
        parents.entry(folder.id).or_default().extend(folder.parent_id);
    }

    let mut uncategorized = 0;
    let mut direct: HashMap<FolderId, usize> = HashMap::new();
    for record in records {
        match record.folder_id {
            Some(id) => *direct.entry(id).or_default() += 1,
            None => uncategorized += 1,
        }
    }

    for (id, count) in direct {
        for ancestor in ancestor_ids(&parents, id) {
            if let Some(total) = by_folder.get_mut(&ancestor) {
                *total += count;
            }
        }
    }

    FolderCounts {
        all: records.len(),
        uncategorized,
        by_folder,
    }
}

/// Brute-force reference: one descendant closure and one record scan per folder
#[must_use]
pub fn counts_by_folder_scan(records: &[Record], folders: &[Folder]) -> FolderCounts {
    let by_folder = folders
        .iter()
        .map(|folder| {
            let ids = descendant_ids(folders, folder.id);
            let count = records
                .iter()
                .filter(|r| r.folder_id.is_some_and(|id| ids.contains(&id)))
                .count();
            (folder.id, count)
        })
        .collect();

    FolderCounts {
        all: records.len(),
        uncategorized: records.iter().filter(|r| r.is_uncategorized()).count(),
        by_folder,
    }
}

fn ancestor_ids(parents: &HashMap<FolderId, Vec<FolderId>>, start: FolderId) -> HashSet<FolderId> {
    let mut seen = HashSet::from([start]);
    let mut pending = vec![start];

    while let Some(id) = pending.pop() {
        for &parent in parents.get(&id).into_iter().flatten() {
            if seen.insert(parent) {
                pending.push(parent);
            }
        }
    }

    seen
}
