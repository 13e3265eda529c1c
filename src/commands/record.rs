//! Record command - move, rename, re-subtitle and delete records

use super::confirm;
use crate::cli::RecordCommands;
use crate::collaborator::Collaborator;
use crate::dashboard::{ActionOutcome, DashboardAction, DashboardController, folder_label};
use crate::filter::FolderSelector;
use crate::hierarchy::{FolderNode, flatten_forest};
use crate::model::FolderId;
use crate::{ScanfolioError, output};
use dialoguer::{Select, theme::ColorfulTheme};

type Result<T> = std::result::Result<T, ScanfolioError>;

/// Execute a record subcommand
///
/// # Errors
/// Returns `ScanfolioError::InvalidInput` when moving to `all` or when the
/// folder picker cannot be read, otherwise the collaborator's error if it
/// rejects the change.
pub fn execute<C: Collaborator>(
    dashboard: &mut DashboardController<C>,
    command: &RecordCommands,
    quiet: bool,
) -> Result<ActionOutcome> {
    let outcome = match command {
        RecordCommands::Move { title, folder } => {
            let target = match folder {
                Some(FolderSelector::All) => {
                    return Err(ScanfolioError::InvalidInput(
                        "Records can only be moved to a folder id or 'uncategorized'".into(),
                    ));
                }
                Some(FolderSelector::Uncategorized) => None,
                Some(FolderSelector::Folder(id)) => Some(*id),
                None => pick_folder(dashboard, title)?,
            };
            let outcome = dashboard.dispatch(DashboardAction::MoveRecord {
                title: title.clone(),
                folder: target,
            })?;
            if !quiet {
                let label = dashboard
                    .records()
                    .iter()
                    .find(|r| &r.title == title)
                    .map_or("Uncategorized", |r| folder_label(r, dashboard.folders()));
                println!(
                    "{}",
                    output::success(&format!("Moved '{title}' to {label}"))
                );
            }
            outcome
        }
        RecordCommands::Rename { title, new_title } => {
            let outcome = dashboard.dispatch(DashboardAction::RenameRecord {
                title: title.clone(),
                new_title: new_title.clone(),
            })?;
            if outcome == ActionOutcome::Updated && !quiet {
                println!(
                    "{}",
                    output::success(&format!("Renamed '{title}' to '{}'", new_title.trim()))
                );
            }
            outcome
        }
        RecordCommands::Subtitle { title, subtitle } => {
            let outcome = dashboard.dispatch(DashboardAction::EditSubtitle {
                title: title.clone(),
                subtitle: subtitle.clone(),
            })?;
            if outcome == ActionOutcome::Updated && !quiet {
                println!(
                    "{}",
                    output::success(&format!("Updated subtitle of '{title}'"))
                );
            }
            outcome
        }
        RecordCommands::Delete { title, force } => {
            if !confirm(&format!("Delete {title}?"), *force)? {
                if !quiet {
                    println!("Cancelled.");
                }
                return Ok(ActionOutcome::Unchanged);
            }
            let outcome = dashboard.dispatch(DashboardAction::DeleteRecord(title.clone()))?;
            if !quiet {
                println!("{}", output::success(&format!("Deleted '{title}'")));
            }
            outcome
        }
    };

    if outcome == ActionOutcome::Unchanged && !quiet {
        println!("Nothing to change.");
    }
    Ok(outcome)
}

/// Destinations in the same order as [`output::folder_options`]
fn move_targets(forest: &[FolderNode]) -> Vec<Option<FolderId>> {
    std::iter::once(None)
        .chain(flatten_forest(forest).into_iter().map(|(_, f)| Some(f.id)))
        .collect()
}

fn pick_folder<C: Collaborator>(
    dashboard: &DashboardController<C>,
    title: &str,
) -> Result<Option<FolderId>> {
    let forest = dashboard.tree();
    let targets = move_targets(&forest);
    let current = dashboard
        .records()
        .iter()
        .find(|r| r.title == title)
        .and_then(|r| r.folder_id);

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Move '{title}' to"))
        .items(&output::folder_options(&forest))
        .default(targets.iter().position(|t| *t == current).unwrap_or(0))
        .interact()
        .map_err(|e| ScanfolioError::InvalidInput(format!("Failed to read input: {e}")))?;

    Ok(targets.get(choice).copied().flatten())
}
