//! Folder command - create, rename and delete folders

use super::confirm;
use crate::cli::FolderCommands;
use crate::collaborator::Collaborator;
use crate::dashboard::{ActionOutcome, DashboardAction, DashboardController};
use crate::model::FolderId;
use crate::{ScanfolioError, output};

type Result<T> = std::result::Result<T, ScanfolioError>;

/// Execute a folder subcommand
///
/// # Errors
/// Returns `ScanfolioError` if the collaborator rejects the change or the
/// confirmation prompt cannot be read.
pub fn execute<C: Collaborator>(
    dashboard: &mut DashboardController<C>,
    command: &FolderCommands,
    quiet: bool,
) -> Result<ActionOutcome> {
    let outcome = match command {
        FolderCommands::Create { name, parent } => {
            let outcome = dashboard.dispatch(DashboardAction::CreateFolder {
                name: name.clone(),
                parent: *parent,
            })?;
            if outcome == ActionOutcome::Updated && !quiet {
                let id = dashboard
                    .folders()
                    .iter()
                    .find(|f| f.name == name.trim())
                    .map(|f| f.id.to_string())
                    .unwrap_or_default();
                println!(
                    "{}",
                    output::success(&format!("Created folder '{}' [{id}]", name.trim()))
                );
            }
            outcome
        }
        FolderCommands::Rename { id, name } => {
            let outcome = dashboard.dispatch(DashboardAction::RenameFolder {
                id: *id,
                name: name.clone(),
            })?;
            if outcome == ActionOutcome::Updated && !quiet {
                println!(
                    "{}",
                    output::success(&format!("Renamed folder {id} to '{}'", name.trim()))
                );
            }
            outcome
        }
        FolderCommands::Delete { id, force } => {
            let prompt = format!(
                "Delete folder \"{}\"? All records will be moved to Uncategorized.",
                folder_name(dashboard, *id)
            );
            if !confirm(&prompt, *force)? {
                if !quiet {
                    println!("Cancelled.");
                }
                return Ok(ActionOutcome::Unchanged);
            }

            let outcome = dashboard.dispatch(DashboardAction::DeleteFolder(*id))?;
            if !quiet {
                println!("{}", output::success(&format!("Deleted folder {id}")));
            }
            outcome
        }
    };

    if outcome == ActionOutcome::Unchanged && !quiet {
        println!("Nothing to change.");
    }
    Ok(outcome)
}

fn folder_name<C: Collaborator>(dashboard: &DashboardController<C>, id: FolderId) -> String {
    dashboard
        .folders()
        .iter()
        .find(|f| f.id == id)
        .map_or_else(|| id.to_string(), |f| f.name.clone())
}
