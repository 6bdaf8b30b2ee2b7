use std::path::Path;

use pdfshelf::{Catalog, LopdfBackend, OutputMode, ReportConfig, ReportOutcome};

use crate::shared::ProgressReporter;

/// Scan `dir`, then write the report described by `config`.
///
/// Returns `Err(1)` with a message printed to stderr if the directory does not
/// exist or the report cannot be written. Unreadable PDFs only produce warnings.
pub fn run(dir: &Path, config: &ReportConfig) -> Result<(), i32> {
    if !dir.is_dir() {
        eprintln!("❌ Error: Directory '{}' does not exist.", dir.display());
        return Err(1);
    }

    println!("\n📂 Scanning folder: {}", dir.display());

    let progress = ProgressReporter::new();
    let catalog = Catalog::scan_with::<LopdfBackend>(dir, |current, total| {
        progress.report(current, total)
    });
    progress.finish();

    let catalog = catalog.map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    for warning in &catalog.warnings {
        eprintln!("⚠️  {warning}");
    }

    let output = config.output().display();
    match config.mode {
        OutputMode::Tabular => println!("\n💾 Saving to: {output}"),
        OutputMode::Simple => println!("\n📝 Saving simple list to: {output}"),
    }

    let outcome = pdfshelf::write_report(&catalog.records, config).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    match (outcome, config.mode) {
        (ReportOutcome::Empty, _) => println!("⚠️  No data to write."),
        (ReportOutcome::Written { path, count }, OutputMode::Tabular) => {
            println!("✅ CSV file written: {} ({count} PDF(s))", path.display());
        }
        (ReportOutcome::Written { path, count }, OutputMode::Simple) => {
            println!("✅ Text file written: {} ({count} book(s))", path.display());
        }
    }

    Ok(())
}
