//! Payload types for folders and records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque folder identifier
///
/// Stable across reloads. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(pub i64);

impl FolderId {
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FolderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for FolderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A named grouping node that may contain records and child folders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    /// Parent folder, `None` for root level
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    /// Server-supplied count; advisory only, the engine recomputes it
    #[serde(default)]
    pub record_count: u64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Folder {
    /// Create a folder with empty timestamps and no advisory count
    #[must_use]
    pub fn new(id: impl Into<FolderId>, name: impl Into<String>, parent_id: Option<FolderId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id,
            record_count: 0,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

/// A named scan dataset, optionally placed into one folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique title, the key for every record-targeted operation
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Folder reference, `None` means uncategorized
    #[serde(default)]
    pub folder_id: Option<FolderId>,
    /// Denormalized folder name some servers attach; never read by the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_name: Option<String>,
    #[serde(default)]
    pub scan_count: u64,
    #[serde(default)]
    pub updated_at: String,
}

impl Record {
    #[must_use]
    pub fn new(title: impl Into<String>, folder_id: Option<FolderId>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            folder_id,
            folder_name: None,
            scan_count: 0,
            updated_at: String::new(),
        }
    }

    /// Builder-style subtitle setter
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub const fn is_uncategorized(&self) -> bool {
        self.folder_id.is_none()
    }
}

/// The `/api/dashboard-data` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

const fn default_success() -> bool {
    true
}

impl DashboardData {
    /// A successful payload carrying the given collections
    #[must_use]
    pub const fn new(folders: Vec<Folder>, records: Vec<Record>) -> Self {
        Self {
            success: true,
            folders,
            records,
            error: None,
        }
    }

    /// A failed payload as the server reports it
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            folders: Vec::new(),
            records: Vec::new(),
            error: Some(error.into()),
        }
    }
}

impl Default for DashboardData {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
