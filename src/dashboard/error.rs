//! Dashboard-specific error types

use crate::collaborator::CollaboratorError;
use crate::hierarchy::HierarchyError;
use thiserror::Error;

/// Errors surfaced by the dashboard controller
///
/// On any of these the controller keeps its last good state.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The collaborator rejected or failed an exchange
    #[error("{0}")]
    Collaborator(#[from] CollaboratorError),

    /// A freshly loaded payload has a cyclic folder hierarchy
    #[error("Refusing dashboard data: {0}")]
    Hierarchy(#[from] HierarchyError),

    /// The payload reported `success: false`
    #[error("Failed to load data: {0}")]
    LoadFailed(String),
}
