//! Record filtering against a folder selection and a search term
//!
//! The dashboard shows a filtered view of the authoritative record list. Two
//! filters compose conjunctively:
//!
//! - **folder**: everything, only uncategorized records, or records inside a
//!   folder's descendant closure
//! - **search**: case-insensitive substring match on title or subtitle
//!
//! Filtering is stable and never reorders or mutates the input.
//!
//! ```ignore
//! use scanfolio::filter::{FolderSelector, RecordFilter, RecordFilterExt};
//!
//! let filter = RecordFilter::new(&folders, FolderSelector::Folder(FolderId(1)), "invoice");
//! let visible = records.iter().filter_records(&filter);
//! ```

mod error;
mod selector;

pub use error::FilterError;
pub use selector::FolderSelector;

use crate::hierarchy::descendant_ids;
use crate::model::{Folder, FolderId, Record};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Membership {
    Any,
    Uncategorized,
    Within(HashSet<FolderId>),
}

/// A folder selection and search term resolved against one folder list
///
/// Resolving computes the descendant closure once, so the same filter can be
/// applied to many records cheaply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    membership: Membership,
    needle: Option<String>,
}

impl RecordFilter {
    /// Resolve a selector and search term against the given folders
    #[must_use]
    pub fn new(folders: &[Folder], selector: FolderSelector, search: &str) -> Self {
        let membership = match selector {
            FolderSelector::All => Membership::Any,
            FolderSelector::Uncategorized => Membership::Uncategorized,
            FolderSelector::Folder(id) => Membership::Within(descendant_ids(folders, id)),
        };
        let needle = (!search.is_empty()).then(|| search.to_lowercase());

        Self { membership, needle }
    }

    /// Whether a record passes both the folder and the search filter
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_folder(record) && self.matches_search(record)
    }

    fn matches_folder(&self, record: &Record) -> bool {
        match &self.membership {
            Membership::Any => true,
            Membership::Uncategorized => record.folder_id.is_none(),
            Membership::Within(ids) => record.folder_id.is_some_and(|id| ids.contains(&id)),
        }
    }

    fn matches_search(&self, record: &Record) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };

        record.title.to_lowercase().contains(needle)
            || record
                .subtitle
                .as_ref()
                .is_some_and(|s| s.to_lowercase().contains(needle))
    }
}

/// Filter records by folder selection and search term
///
/// Output order equals input order.
///
/// # Examples
/// ```
/// # use scanfolio::model::Record;
/// # use scanfolio::filter::{filter_records, FolderSelector};
/// let records = vec![Record::new("Invoice Q1", None), Record::new("Receipt", None)];
/// let hits = filter_records(&records, &[], FolderSelector::All, "invoice");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].title, "Invoice Q1");
/// ```
#[must_use]
pub fn filter_records<'a>(
    records: &'a [Record],
    folders: &[Folder],
    selector: FolderSelector,
    search: &str,
) -> Vec<&'a Record> {
    let filter = RecordFilter::new(folders, selector, search);
    records.iter().filter_records(&filter)
}

/// Extension trait adding dashboard filtering to record iterators
pub trait RecordFilterExt<'a>: IntoIterator<Item = &'a Record> + Sized {
    /// Keep records passing `filter`, preserving order
    fn filter_records(self, filter: &RecordFilter) -> Vec<&'a Record> {
        self.into_iter().filter(|r| filter.matches(r)).collect()
    }
}

impl<'a, I> RecordFilterExt<'a> for I where I: IntoIterator<Item = &'a Record> {}
