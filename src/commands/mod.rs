//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against a loaded dashboard.

pub mod counts;
pub mod export;
pub mod folder;
pub mod init;
pub mod list;
pub mod record;
pub mod tree;

// Re-export execute functions for convenience
pub use counts::execute as counts;
pub use export::execute as export;
pub use folder::execute as folder;
pub use init::execute as init;
pub use list::execute as list;
pub use record::execute as record;
pub use tree::execute as tree;

use crate::cli::ViewArgs;
use crate::collaborator::{Collaborator, SnapshotCollaborator};
use crate::dashboard::{DashboardAction, DashboardController};
use crate::ScanfolioError;
use dialoguer::{Confirm, theme::ColorfulTheme};
use std::path::Path;

type Result<T> = std::result::Result<T, ScanfolioError>;

/// Open the snapshot at `path` and load it into a dashboard
///
/// # Errors
/// Returns `ScanfolioError::InvalidInput` if the snapshot does not exist, or
/// the collaborator/dashboard error if it cannot be read or is rejected.
pub fn open_dashboard(path: &Path) -> Result<DashboardController<SnapshotCollaborator>> {
    if !path.exists() {
        return Err(ScanfolioError::InvalidInput(format!(
            "No dashboard data at {}. Run 'scanfolio init' first.",
            path.display()
        )));
    }

    let mut dashboard = DashboardController::new(SnapshotCollaborator::open(path)?);
    dashboard.load()?;
    Ok(dashboard)
}

/// Apply the folder selection and search term of a viewing command
///
/// # Errors
/// Returns `ScanfolioError` if dispatching fails.
pub fn apply_view<C: Collaborator>(
    dashboard: &mut DashboardController<C>,
    view: &ViewArgs,
) -> Result<()> {
    dashboard.dispatch(DashboardAction::SelectFolder(view.folder))?;
    dashboard.dispatch(DashboardAction::Search(view.search_term().to_string()))?;
    Ok(())
}

/// Ask before a destructive change; `force` answers yes without asking
fn confirm(prompt: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| ScanfolioError::InvalidInput(format!("Failed to read input: {e}")))
}
