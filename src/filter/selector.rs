//! Folder selection for the record view

use super::FilterError;
use crate::model::FolderId;
use std::fmt;
use std::str::FromStr;

/// Which part of the folder hierarchy the record view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FolderSelector {
    /// No folder filtering
    #[default]
    All,
    /// Records without a folder
    Uncategorized,
    /// A folder and all of its descendants
    Folder(FolderId),
}

impl FolderSelector {
    /// The folder id this selector targets, if any
    #[must_use]
    pub const fn folder_id(self) -> Option<FolderId> {
        match self {
            Self::Folder(id) => Some(id),
            Self::All | Self::Uncategorized => None,
        }
    }
}

impl fmt::Display for FolderSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Uncategorized => f.write_str("uncategorized"),
            Self::Folder(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for FolderSelector {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "uncategorized" => Ok(Self::Uncategorized),
            _ => trimmed
                .parse::<FolderId>()
                .map(Self::Folder)
                .map_err(|_| FilterError::InvalidSelector(s.to_string())),
        }
    }
}

impl From<Option<FolderId>> for FolderSelector {
    /// `None` maps to the uncategorized bucket, matching a record's `folder_id`
    fn from(id: Option<FolderId>) -> Self {
        id.map_or(Self::Uncategorized, Self::Folder)
    }
}
