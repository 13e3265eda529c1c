//! Forest construction from the flat folder list

use super::HierarchyError;
use crate::model::{Folder, FolderId};
use std::collections::HashMap;

/// A folder together with its immediate children, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    pub folder: Folder,
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    #[must_use]
    pub const fn id(&self) -> FolderId {
        self.folder.id
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, including the node itself
    #[must_use]
    pub fn len(&self) -> usize {
        let mut total = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            total += 1;
            stack.extend(&node.children);
        }
        total
    }

    /// Always false; a node counts itself
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Pre-order walk yielding `(depth, folder)`, depth 0 for this node
    #[must_use]
    pub fn flatten(&self) -> Vec<(usize, &Folder)> {
        let mut out = Vec::new();
        let mut stack = vec![(0, self)];
        while let Some((depth, node)) = stack.pop() {
            out.push((depth, &node.folder));
            stack.extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        }
        out
    }
}

impl Drop for FolderNode {
    // Unlinks children one level at a time so a long chain does not recurse.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Pre-order walk over a whole forest, see [`FolderNode::flatten`]
#[must_use]
pub fn flatten_forest(forest: &[FolderNode]) -> Vec<(usize, &Folder)> {
    forest.iter().flat_map(FolderNode::flatten).collect()
}

/// Build the folder forest
///
/// Pass 1 indexes folders by id (the last folder wins on duplicate ids).
/// Pass 2 walks the input in order: a folder whose parent is present in the
/// index is appended to that parent's children, everything else (no parent,
/// or a parent that is not in the list) is appended to the roots.
///
/// Folders caught in a parent cycle are never reachable from a root and so
/// never appear in the forest. A node is not expanded again below itself,
/// which keeps construction finite even for duplicate ids.
///
/// # Examples
/// ```
/// # use scanfolio::model::{Folder, FolderId};
/// # use scanfolio::hierarchy::build_tree;
/// let folders = vec![
///     Folder::new(FolderId(1), "Work", None),
///     Folder::new(FolderId(2), "Sub", Some(FolderId(1))),
///     Folder::new(FolderId(3), "Orphan", Some(FolderId(99))),
/// ];
/// let forest = build_tree(&folders);
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest[0].children[0].folder.name, "Sub");
/// assert_eq!(forest[1].folder.name, "Orphan");
/// ```
#[must_use]
pub fn build_tree(folders: &[Folder]) -> Vec<FolderNode> {
    let index: HashMap<FolderId, usize> = folders
        .iter()
        .enumerate()
        .map(|(i, folder)| (folder.id, i))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); folders.len()];
    let mut roots = Vec::new();

    for folder in folders {
        let Some(&node) = index.get(&folder.id) else {
            continue;
        };
        match folder.parent_id.and_then(|parent| index.get(&parent)) {
            Some(&parent) => children[parent].push(node),
            None => roots.push(node),
        }
    }

    let mut on_path = vec![false; folders.len()];
    let mut forest = Vec::with_capacity(roots.len());
    for root in roots {
        assemble(folders, &children, root, &mut on_path, &mut forest);
    }
    forest
}

/// Node under construction: its index, the next child to look at, and the
/// children finished so far
struct Frame {
    node: usize,
    next: usize,
    built: Vec<FolderNode>,
}

impl Frame {
    const fn new(node: usize) -> Self {
        Self {
            node,
            next: 0,
            built: Vec::new(),
        }
    }
}

/// Build the subtree under `root` and append it to `out`
///
/// `on_path` marks the nodes between `root` and the current node; a child
/// already on it is skipped.
fn assemble(
    folders: &[Folder],
    children: &[Vec<usize>],
    root: usize,
    on_path: &mut [bool],
    out: &mut Vec<FolderNode>,
) {
    on_path[root] = true;
    let mut stack = vec![Frame::new(root)];

    while let Some(top) = stack.last_mut() {
        if let Some(&child) = children[top.node].get(top.next) {
            top.next += 1;
            if !on_path[child] {
                on_path[child] = true;
                stack.push(Frame::new(child));
            }
            continue;
        }

        let index = top.node;
        let node = FolderNode {
            folder: folders[index].clone(),
            children: std::mem::take(&mut top.built),
        };
        stack.pop();
        on_path[index] = false;

        match stack.last_mut() {
            Some(parent) => parent.built.push(node),
            None => out.push(node),
        }
    }
}

/// Build the forest after checking the parent relation is acyclic
///
/// # Errors
/// Returns `HierarchyError::Cycle` if any folder's ancestor chain loops.
pub fn build_tree_checked(folders: &[Folder]) -> Result<Vec<FolderNode>, HierarchyError> {
    validate(folders)?;
    Ok(build_tree(folders))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Check that following `parent_id` upward never revisits a folder
///
/// Parents that are not in the list end the chain (orphans are fine).
///
/// # Errors
/// Returns `HierarchyError::Cycle` naming the first folder found on a loop.
pub fn validate(folders: &[Folder]) -> Result<(), HierarchyError> {
    let mut parents: HashMap<FolderId, Vec<FolderId>> = HashMap::new();
    for folder in folders {
        parents.entry(folder.id).or_default().extend(folder.parent_id);
    }

    let mut state = HashMap::new();
    for folder in folders {
        if !state.contains_key(&folder.id) {
            visit(folder.id, &parents, &mut state)?;
        }
    }
    Ok(())
}

/// Depth-first walk up the parent links from `start`, with an explicit stack
/// of `(folder, next parent index)`
fn visit(
    start: FolderId,
    parents: &HashMap<FolderId, Vec<FolderId>>,
    state: &mut HashMap<FolderId, Visit>,
) -> Result<(), HierarchyError> {
    state.insert(start, Visit::InProgress);
    let mut stack = vec![(start, 0)];

    while let Some((id, next)) = stack.last_mut() {
        let id = *id;
        let parent = parents.get(&id).and_then(|ups| ups.get(*next)).copied();
        *next += 1;

        match parent {
            None => {
                state.insert(id, Visit::Done);
                stack.pop();
            }
            Some(parent) if !parents.contains_key(&parent) => {}
            Some(parent) => match state.get(&parent) {
                Some(Visit::Done) => {}
                Some(Visit::InProgress) => return Err(HierarchyError::Cycle { folder: parent }),
                None => {
                    state.insert(parent, Visit::InProgress);
                    stack.push((parent, 0));
                }
            },
        }
    }
    Ok(())
}
