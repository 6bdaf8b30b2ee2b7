use std::io::{self, IsTerminal, Write};

use tracing::Level;

/// A progress reporter that prints "Reading PDF N/M..." to stderr,
/// but only when stderr is connected to a TTY (terminal).
pub struct ProgressReporter {
    is_tty: bool,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            is_tty: io::stderr().is_terminal(),
        }
    }

    /// Report progress for file `current` (1-indexed) of `total`.
    pub fn report(&self, current: usize, total: usize) {
        if self.is_tty {
            eprint!("\rReading PDF {current}/{total}...");
            let _ = io::stderr().flush();
        }
    }

    /// Clear the progress line (if TTY).
    pub fn finish(&self) {
        if self.is_tty {
            eprint!("\r{}\r", " ".repeat(40));
            let _ = io::stderr().flush();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Map the `-v` count to a maximum log level.
pub fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the stderr log subscriber.
pub fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_defaults_to_warn() {
        assert_eq!(log_level(0), Level::WARN);
    }

    #[test]
    fn log_level_increases_with_verbosity() {
        assert_eq!(log_level(1), Level::INFO);
        assert_eq!(log_level(2), Level::DEBUG);
        assert_eq!(log_level(5), Level::DEBUG);
    }

    #[test]
    fn progress_reporter_does_not_panic() {
        // is_tty depends on test environment; just verify it doesn't panic
        let reporter = ProgressReporter::new();
        reporter.report(1, 3);
        reporter.finish();
    }

    #[test]
    fn progress_reporter_default_matches_new() {
        let reporter = ProgressReporter::default();
        assert_eq!(reporter.is_tty, ProgressReporter::new().is_tty);
        reporter.report(2, 2);
        reporter.finish();
    }
}
