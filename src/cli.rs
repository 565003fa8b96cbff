use clap::Parser;
use std::path::PathBuf;

use sonar_issues::config::SettingsOverrides;

/// Format a SonarQube issues search response as a markdown table
///
/// Reads the JSON response on stdin and writes the report to stdout.
/// Display context comes from SONAR_SEVERITY, SONAR_NEW_CODE and
/// SONAR_PROJECT_KEY unless overridden by flags.
#[derive(Parser, Debug)]
#[command(name = "sonar-format-issues")]
#[command(version)]
#[command(about = "Format SonarQube issues JSON as a markdown table", long_about = None)]
pub struct Args {
    /// Read the JSON payload from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Severity label shown in the report (overrides SONAR_SEVERITY)
    #[arg(short, long, value_name = "LABEL")]
    pub severity: Option<String>,

    /// Project key shown in the report (overrides SONAR_PROJECT_KEY)
    #[arg(short = 'k', long, value_name = "KEY")]
    pub project_key: Option<String>,

    /// Label the report as new-code issues (overrides SONAR_NEW_CODE)
    #[arg(long)]
    pub new_code: bool,

    /// Print progress messages to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Display-setting overrides taken from the flags
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            severity_label: self.severity.clone(),
            new_code: self.new_code,
            project_key: self.project_key.clone(),
        }
    }
}
