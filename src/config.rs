//! Display settings for the issue report.
//!
//! Settings come from environment variables, optionally overridden by
//! command-line flags. No configuration file is read.

use crate::issue_report::domain::ScopeLabel;

pub const SEVERITY_ENV: &str = "SONAR_SEVERITY";
pub const NEW_CODE_ENV: &str = "SONAR_NEW_CODE";
pub const PROJECT_KEY_ENV: &str = "SONAR_PROJECT_KEY";

pub const DEFAULT_SEVERITY_LABEL: &str = "HIGH,MEDIUM";
pub const DEFAULT_PROJECT_KEY: &str = "unknown-project";

/// Resolved display context for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Severity filter that was applied upstream; shown, never applied here
    pub severity_label: String,
    pub scope: ScopeLabel,
    pub project_key: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            severity_label: DEFAULT_SEVERITY_LABEL.to_string(),
            scope: ScopeLabel::Overall,
            project_key: DEFAULT_PROJECT_KEY.to_string(),
        }
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub severity_label: Option<String>,
    pub new_code: bool,
    pub project_key: Option<String>,
}

impl ReportSettings {
    /// Resolves settings with precedence: override, then `lookup`, then default.
    ///
    /// A variable set to an empty string counts as set.
    pub fn resolve<F>(overrides: SettingsOverrides, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let severity_label = overrides
            .severity_label
            .or_else(|| lookup(SEVERITY_ENV))
            .unwrap_or_else(|| DEFAULT_SEVERITY_LABEL.to_string());

        let scope = if overrides.new_code {
            ScopeLabel::NewCode
        } else {
            ScopeLabel::from_flag_value(lookup(NEW_CODE_ENV).as_deref())
        };

        let project_key = overrides
            .project_key
            .or_else(|| lookup(PROJECT_KEY_ENV))
            .unwrap_or_else(|| DEFAULT_PROJECT_KEY.to_string());

        Self {
            severity_label,
            scope,
            project_key,
        }
    }

    /// Resolves settings against the process environment
    pub fn from_env(overrides: SettingsOverrides) -> Self {
        Self::resolve(overrides, |name| std::env::var(name).ok())
    }
}
