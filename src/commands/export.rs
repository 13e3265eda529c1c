//! Export command - write the filtered records as CSV or JSON

use super::apply_view;
use crate::cli::ViewArgs;
use crate::collaborator::Collaborator;
use crate::dashboard::DashboardController;
use crate::export::{ExportFormat, export_records};
use crate::{ScanfolioError, output};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

type Result<T> = std::result::Result<T, ScanfolioError>;

/// Execute the export command
///
/// Writes to `destination` when given, stdout otherwise. Returns the number of
/// exported records.
///
/// # Errors
/// Returns `ScanfolioError` if the output file cannot be created or writing fails.
pub fn execute<C: Collaborator>(
    dashboard: &mut DashboardController<C>,
    view: &ViewArgs,
    format: ExportFormat,
    destination: Option<&Path>,
    quiet: bool,
) -> Result<usize> {
    apply_view(dashboard, view)?;
    let records = dashboard.filtered_records();

    match destination {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            export_records(&records, dashboard.folders(), format, writer)?;
            if !quiet {
                println!(
                    "{}",
                    output::success(&format!(
                        "Exported {} record(s) to {}",
                        records.len(),
                        path.display()
                    ))
                );
            }
        }
        None => export_records(&records, dashboard.folders(), format, io::stdout().lock())?,
    }

    Ok(records.len())
}
