//! Export of the filtered record view
//!
//! Writes one row per visible record with its resolved folder name, either
//! as CSV (header row first) or as a pretty-printed JSON array.

mod error;

pub use error::ExportError;

use crate::dashboard::folder_label;
use crate::model::{Folder, Record};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

/// Output format for exports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// Conventional file extension, without the dot
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    title: &'a str,
    subtitle: &'a str,
    folder: &'a str,
    scan_count: u64,
    updated_at: &'a str,
}

/// Write records in the given format
///
/// # Errors
/// Returns `ExportError` if serialization or writing fails.
pub fn export_records<W: Write>(
    records: &[&Record],
    folders: &[Folder],
    format: ExportFormat,
    mut writer: W,
) -> Result<(), ExportError> {
    let rows: Vec<ExportRow<'_>> = records
        .iter()
        .map(|record| ExportRow {
            title: &record.title,
            subtitle: record.subtitle.as_deref().unwrap_or(""),
            folder: folder_label(record, folders),
            scan_count: record.scan_count,
            updated_at: &record.updated_at,
        })
        .collect();

    match format {
        ExportFormat::Csv => {
            let mut csv = csv::Writer::from_writer(writer);
            for row in &rows {
                csv.serialize(row)?;
            }
            csv.flush()?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &rows)?;
            writeln!(writer)?;
        }
    }

    tracing::debug!("Exported {} record(s) as {:?}", rows.len(), format);
    Ok(())
}
