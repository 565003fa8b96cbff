use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the report on stdout.
/// Disabled reporters drop every message, which keeps stderr empty on a
/// normal run.
pub struct StderrProgressReporter {
    enabled: bool,
    use_colors: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            enabled: true,
            use_colors: std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Reporter that stays silent
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            use_colors: false,
        }
    }

    /// Enabled only when `verbose` is set
    pub fn with_verbosity(verbose: bool) -> Self {
        if verbose {
            Self::new()
        } else {
            Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, message: &str, styled: impl FnOnce(&str) -> String) {
        if !self.enabled {
            return;
        }
        if self.use_colors {
            eprintln!("{}", styled(message));
        } else {
            eprintln!("{}", message);
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.emit(message, |m| m.dimmed().to_string());
    }

    fn report_error(&self, message: &str) {
        self.emit(message, |m| m.yellow().to_string());
    }

    fn report_completion(&self, message: &str) {
        self.emit(message, |m| m.green().to_string());
    }
}
