//! Descendant closure over the flat folder list

use crate::model::{Folder, FolderId};
use std::collections::HashSet;

/// Collect a folder id and the ids of all of its descendants
///
/// Children are looked up in the flat list rather than in a built tree, so
/// the result does not depend on how the forest was assembled. The set is
/// reflexive: `folder_id` is always a member, even if no such folder exists.
/// A visited set keeps the walk finite on cyclic input.
///
/// # Examples
/// ```
/// # use scanfolio::model::{Folder, FolderId};
/// # use scanfolio::hierarchy::descendant_ids;
/// let folders = vec![
///     Folder::new(FolderId(1), "Work", None),
///     Folder::new(FolderId(2), "Sub", Some(FolderId(1))),
/// ];
/// let ids = descendant_ids(&folders, FolderId(1));
/// assert!(ids.contains(&FolderId(1)) && ids.contains(&FolderId(2)));
/// assert_eq!(ids.len(), 2);
/// ```
#[must_use]
pub fn descendant_ids(folders: &[Folder], folder_id: FolderId) -> HashSet<FolderId> {
    let mut ids = HashSet::from([folder_id]);
    let mut pending = vec![folder_id];

    while let Some(parent) = pending.pop() {
        for child in folders.iter().filter(|f| f.parent_id == Some(parent)) {
            if ids.insert(child.id) {
                pending.push(child.id);
            }
        }
    }

    ids
}
