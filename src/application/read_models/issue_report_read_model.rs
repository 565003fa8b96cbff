//! Issue report read model
//!
//! Aggregates the summary header and the table rows for one run.

use super::issue_row_view::IssueRowView;
use crate::issue_report::domain::ScopeLabel;

/// Display-ready view of an issue report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReportReadModel {
    pub summary: ReportSummaryView,
    pub rows: Vec<IssueRowView>,
}

impl IssueReportReadModel {
    /// True when the payload held no issues and only the one-line notice applies
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Header values shared by the summary line and the empty-result notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummaryView {
    pub severity_label: String,
    pub scope: ScopeLabel,
    pub project_key: String,
    /// Total reported upstream, which may exceed the rows shown
    pub total: u64,
    /// Number of rows in this report
    pub shown: usize,
}
