//! The per-file catalog record.

use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::metadata::DocumentMetadata;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Timestamp format used for [`PdfRecord::last_modified`].
pub const MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Filesystem facts about a scanned file, gathered independently of parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct FileStats {
    /// Base name of the file on disk.
    pub file_name: String,
    /// Fully resolved absolute path.
    pub file_path: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Filesystem modification time.
    pub modified: SystemTime,
}

/// One catalogued PDF file.
///
/// `file_name`, `file_path`, and `title` are never empty; `author` may be.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfRecord {
    pub file_name: String,
    pub file_path: String,
    /// Size in megabytes, rounded to 2 decimal places.
    pub size_mb: f64,
    /// Modification time formatted as `YYYY-MM-DD HH:MM`.
    pub last_modified: String,
    pub title: String,
    pub author: String,
}

impl PdfRecord {
    /// Build a record from filesystem stats and optional embedded metadata.
    ///
    /// Title falls back to the file stem and author to the empty string when
    /// the metadata is absent or the field is missing or empty.
    pub fn from_stats(stats: &FileStats, meta: Option<&DocumentMetadata>) -> Self {
        let stem = file_stem(&stats.file_name);
        Self {
            file_name: stats.file_name.clone(),
            file_path: stats.file_path.display().to_string(),
            size_mb: size_in_mb(stats.size_bytes),
            last_modified: format_modified(stats.modified),
            title: DocumentMetadata::resolved_title(meta, stem),
            author: DocumentMetadata::resolved_author(meta),
        }
    }

    /// Build a record for a file whose metadata could not be read.
    pub fn fallback(stats: &FileStats) -> Self {
        Self::from_stats(stats, None)
    }

    /// Size rendered with exactly two decimals, as written to reports.
    pub fn size_display(&self) -> String {
        format!("{:.2}", self.size_mb)
    }
}

/// Convert a byte count to megabytes rounded to 2 decimal places.
pub fn size_in_mb(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0
}

/// Format a modification time in local time as `YYYY-MM-DD HH:MM`.
pub fn format_modified(modified: SystemTime) -> String {
    let local: DateTime<Local> = modified.into();
    local.format(MODIFIED_FORMAT).to_string()
}

/// The file name without its final extension.
///
/// Names with nothing before the extension (e.g. `.pdf`) are returned whole
/// so the result is never empty for a non-empty name.
pub fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(idx) => &file_name[..idx],
    }
}
