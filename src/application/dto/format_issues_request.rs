use crate::config::ReportSettings;

/// FormatIssuesRequest - Request DTO for the format-issues use case
#[derive(Debug, Clone, Default)]
pub struct FormatIssuesRequest {
    /// Display context resolved from environment and flags
    pub settings: ReportSettings,
}

impl FormatIssuesRequest {
    pub fn new(settings: ReportSettings) -> Self {
        Self { settings }
    }
}
