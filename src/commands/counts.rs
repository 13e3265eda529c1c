//! Counts command - record counts per folder, subfolders included

use crate::collaborator::Collaborator;
use crate::dashboard::DashboardController;
use crate::hierarchy::flatten_forest;
use crate::{ScanfolioError, output};

type Result<T> = std::result::Result<T, ScanfolioError>;

/// Execute the counts command
///
/// # Errors
/// Currently infallible; returns `Result` for consistency with other commands.
pub fn execute<C: Collaborator>(dashboard: &DashboardController<C>, quiet: bool) -> Result<()> {
    let counts = dashboard.counts();
    let forest = dashboard.tree();

    if !quiet {
        println!("Record counts:");
    }
    println!("{}", output::folder_count("All Records", counts.all, quiet));
    println!(
        "{}",
        output::folder_count("Uncategorized", counts.uncategorized, quiet)
    );
    for (depth, folder) in flatten_forest(&forest) {
        let label = if quiet {
            folder.id.to_string()
        } else {
            format!("{}{}", "  ".repeat(depth), folder.name)
        };
        println!("{}", output::folder_count(&label, counts.get(folder.id), quiet));
    }
    Ok(())
}
