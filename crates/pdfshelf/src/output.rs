//! Writing the report file.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use pdfshelf_core::{OutputMode, PdfRecord, ReportConfig, ShelfError, write_simple, write_tabular};

/// Result of a [`write_report`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The report file was written with `count` records.
    Written { path: PathBuf, count: usize },
    /// There were no records; no file was created.
    Empty,
}

/// Write `records` to the configured output file, replacing any existing file.
///
/// An empty record set is not an error: nothing is written and
/// [`ReportOutcome::Empty`] is returned.
///
/// # Errors
///
/// Returns [`ShelfError::Io`] if the output file cannot be created or written.
pub fn write_report(
    records: &[PdfRecord],
    config: &ReportConfig,
) -> Result<ReportOutcome, ShelfError> {
    if records.is_empty() {
        tracing::info!(output = %config.output.display(), "no records, skipping report");
        return Ok(ReportOutcome::Empty);
    }

    let path = config.output();
    let file = File::create(path).map_err(|e| ShelfError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let written = match config.mode {
        OutputMode::Tabular => write_tabular(&mut writer, records),
        OutputMode::Simple => write_simple(&mut writer, records),
    };
    written.map_err(|e| ShelfError::io(path, e))?;

    tracing::info!(output = %path.display(), count = records.len(), "report written");
    Ok(ReportOutcome::Written {
        path: path.to_path_buf(),
        count: records.len(),
    })
}
