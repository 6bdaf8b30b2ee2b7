//! Output configuration, resolved once before scanning begins.

use std::path::{Path, PathBuf};

/// Default output file for tabular mode.
pub const DEFAULT_TABULAR_OUTPUT: &str = "pdf_library.csv";

/// Default output file for simple mode.
pub const DEFAULT_SIMPLE_OUTPUT: &str = "pdf_list.txt";

/// Report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Comma-separated values with six fixed columns.
    #[default]
    Tabular,
    /// One `<author> :— <title> ` line per record.
    Simple,
}

/// Where and how the report is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub mode: OutputMode,
    pub output: PathBuf,
}

impl ReportConfig {
    /// Resolve the final configuration from the invocation options.
    ///
    /// An explicit output path always wins. Without one, the default file
    /// name follows the selected mode.
    pub fn resolve(simple: bool, explicit_output: Option<PathBuf>) -> Self {
        let mode = if simple {
            OutputMode::Simple
        } else {
            OutputMode::Tabular
        };
        let output = explicit_output.unwrap_or_else(|| PathBuf::from(mode.default_output()));
        Self { mode, output }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::resolve(false, None)
    }
}

impl OutputMode {
    /// The output file name used when none is given.
    pub fn default_output(self) -> &'static str {
        match self {
            OutputMode::Tabular => DEFAULT_TABULAR_OUTPUT,
            OutputMode::Simple => DEFAULT_SIMPLE_OUTPUT,
        }
    }
}
