//! Tree command - folder sidebar with record counts

use crate::collaborator::Collaborator;
use crate::dashboard::DashboardController;
use crate::hierarchy::flatten_forest;
use crate::{ScanfolioError, output};

type Result<T> = std::result::Result<T, ScanfolioError>;

/// Execute the tree command
///
/// Quiet mode prints one `id<TAB>name` line per folder, indented by depth.
///
/// # Errors
/// Currently infallible; returns `Result` for consistency with other commands.
pub fn execute<C: Collaborator>(dashboard: &DashboardController<C>, quiet: bool) -> Result<()> {
    let forest = dashboard.tree();

    if quiet {
        for (depth, folder) in flatten_forest(&forest) {
            println!("{}\t{}{}", folder.id, "  ".repeat(depth), folder.name);
        }
        return Ok(());
    }

    let counts = dashboard.counts();
    for line in output::folder_tree(&forest, &counts, dashboard.selection()) {
        println!("{line}");
    }
    if forest.is_empty() {
        println!("\nNo folders yet. Use 'scanfolio folder create <NAME>' to add one.");
    }
    Ok(())
}
