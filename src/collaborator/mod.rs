//! The external collaborator that owns the authoritative data
//!
//! The dashboard never edits its folder and record lists in place. Every
//! mutation is a request to a collaborator keyed by folder id or record
//! title, after which the full payload is loaded again.
//!
//! [`SnapshotCollaborator`] applies the server's rules in process and can
//! keep its payload in a JSON snapshot file, which is what the command line
//! front end drives.

mod error;
mod snapshot;
mod traits;

pub use error::CollaboratorError;
pub use snapshot::{DEFAULT_FOLDERS, SnapshotCollaborator};
pub use traits::Collaborator;
