use std::path::PathBuf;

use clap::{ArgAction, Parser};
use pdfshelf::ReportConfig;

/// Record your PDFs: scan a directory tree and list each PDF's title and author.
#[derive(Debug, Parser)]
#[command(name = "pdfshelf", about, version)]
pub struct Cli {
    /// Directory to scan recursively for PDF files
    #[arg(long, value_name = "DIR")]
    pub dir: PathBuf,

    /// Save as a simple text file with author and title only
    #[arg(long)]
    pub simple: bool,

    /// Output file name. Default: pdf_library.csv, or pdf_list.txt with --simple
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve the report destination and format from the flags.
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::resolve(self.simple, self.output.clone())
    }
}
