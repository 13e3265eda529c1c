//! List command - records in a folder selection

use super::apply_view;
use crate::cli::ViewArgs;
use crate::collaborator::Collaborator;
use crate::dashboard::DashboardController;
use crate::{ScanfolioError, output};
use colored::Colorize;

type Result<T> = std::result::Result<T, ScanfolioError>;

/// Execute the list command
///
/// # Errors
/// Returns `ScanfolioError` if applying the view fails.
pub fn execute<C: Collaborator>(
    dashboard: &mut DashboardController<C>,
    view: &ViewArgs,
    quiet: bool,
) -> Result<()> {
    apply_view(dashboard, view)?;
    let records = dashboard.filtered_records();

    if !quiet {
        println!(
            "{}",
            format!("{} ({})", dashboard.page_title(), records.len()).bold()
        );
        if records.is_empty() {
            println!("No records found.");
        }
    }

    for record in records {
        println!("{}", output::record_card(record, dashboard.folders(), quiet));
    }
    Ok(())
}
