//! Report serializers for catalogued records.
//!
//! Both writers operate on any [`Write`] sink and succeed on empty input.

use std::io::{self, Write};

use crate::record::PdfRecord;

/// Column names of the tabular report, in output order.
pub const TABULAR_HEADERS: [&str; 6] = [
    "File Name",
    "File Path",
    "Size (MB)",
    "Last Modified",
    "Title",
    "Author",
];

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or line breaks, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

fn write_csv_row<W: Write>(writer: &mut W, fields: &[&str]) -> io::Result<()> {
    let row: Vec<String> = fields.iter().map(|f| csv_escape(f)).collect();
    writeln!(writer, "{}", row.join(","))
}

/// Write the header row followed by one row per record.
pub fn write_tabular<W: Write>(writer: &mut W, records: &[PdfRecord]) -> io::Result<()> {
    write_csv_row(writer, &TABULAR_HEADERS)?;
    for record in records {
        let size = record.size_display();
        write_csv_row(
            writer,
            &[
                record.file_name.as_str(),
                record.file_path.as_str(),
                size.as_str(),
                record.last_modified.as_str(),
                record.title.as_str(),
                record.author.as_str(),
            ],
        )?;
    }
    writer.flush()
}

/// Render one simple-mode line, without the trailing newline.
///
/// An empty author becomes `Unknown`; an empty title falls back to the file name.
pub fn simple_line(record: &PdfRecord) -> String {
    let author = if record.author.is_empty() {
        "Unknown"
    } else {
        record.author.as_str()
    };
    let title = if record.title.is_empty() {
        record.file_name.as_str()
    } else {
        record.title.as_str()
    };
    format!("{author} :— {title} ")
}

/// Write one simple-mode line per record.
pub fn write_simple<W: Write>(writer: &mut W, records: &[PdfRecord]) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{}", simple_line(record))?;
    }
    writer.flush()
}
