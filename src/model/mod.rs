//! Dashboard data model
//!
//! Folder and record types exactly as the server supplies them in the
//! dashboard payload. These are plain data: the hierarchy, membership and
//! counts are always derived by the engine, never stored back here.

mod types;

pub use types::{DashboardData, Folder, FolderId, Record};
