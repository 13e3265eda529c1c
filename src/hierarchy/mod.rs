//! Folder hierarchy engine
//!
//! Turns the flat folder list from the dashboard payload into a navigable
//! forest and answers "folder and all of its descendants" questions:
//!
//! - [`build_tree`]: two-pass parent/child grouping, orphans become roots
//! - [`descendant_ids`]: reflexive descendant closure over the flat list
//! - [`counts_by_folder`]: per-folder record totals including subfolders
//! - [`validate`]: reports parent cycles that the other operations only tolerate
//!
//! Every operation here is total. Malformed parent references degrade
//! gracefully, and cyclic input terminates instead of recursing forever.

mod closure;
mod counts;
mod error;
mod tree;

pub use closure::descendant_ids;
pub use counts::{FolderCounts, counts_by_folder, counts_by_folder_scan};
pub use error::HierarchyError;
pub use tree::{FolderNode, build_tree, build_tree_checked, flatten_forest, validate};
