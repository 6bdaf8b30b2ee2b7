//! Per-file record extraction with filename fallback.

use std::path::Path;

use pdfshelf_core::{ExtractWarning, FileStats, PdfRecord, ShelfError};
use pdfshelf_parse::MetadataBackend;

/// Gather filesystem facts for `path`: name, absolute path, size, mtime.
///
/// # Errors
///
/// Returns [`ShelfError::Io`] if the file cannot be stat'ed (e.g. it vanished
/// after the scan found it).
pub fn read_file_stats(path: &Path) -> Result<FileStats, ShelfError> {
    let stat = std::fs::metadata(path).map_err(|e| ShelfError::io(path, e))?;
    let modified = stat.modified().map_err(|e| ShelfError::io(path, e))?;
    let file_path = std::fs::canonicalize(path).map_err(|e| ShelfError::io(path, e))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.display().to_string());

    Ok(FileStats {
        file_name,
        file_path,
        size_bytes: stat.len(),
        modified,
    })
}

/// Build the record for one file.
///
/// Metadata parse failures never fail this call: the record falls back to the
/// file stem as title and an empty author, and the failure is returned as a
/// warning alongside it.
///
/// # Errors
///
/// Only filesystem stat failures from [`read_file_stats`] are returned.
pub fn read_record<B: MetadataBackend>(
    path: &Path,
) -> Result<(PdfRecord, Option<ExtractWarning>), ShelfError> {
    let stats = read_file_stats(path)?;

    match B::read_file_metadata(path) {
        Ok(meta) => {
            tracing::debug!(file = %stats.file_name, has_info = meta.is_some(), "read metadata");
            Ok((PdfRecord::from_stats(&stats, meta.as_ref()), None))
        }
        Err(err) => {
            tracing::debug!(file = %stats.file_name, error = %err, "metadata unreadable, using fallback");
            let warning = ExtractWarning::new(path, err.to_string());
            Ok((PdfRecord::fallback(&stats), Some(warning)))
        }
    }
}
