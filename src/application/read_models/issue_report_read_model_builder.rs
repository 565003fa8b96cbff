//! Builder for constructing IssueReportReadModel from the parsed payload
//!
//! Resolves file names, impact fallbacks and message truncation once, so
//! formatters only lay out strings.

use super::issue_report_read_model::{IssueReportReadModel, ReportSummaryView};
use super::issue_row_view::IssueRowView;
use crate::config::ReportSettings;
use crate::issue_report::domain::{truncate_message, ComponentIndex, Issue, IssuesResponse};

/// Builder for constructing IssueReportReadModel from domain objects
pub struct IssueReportReadModelBuilder;

impl IssueReportReadModelBuilder {
    /// Builds the read model
    ///
    /// # Arguments
    /// * `response` - Parsed search response
    /// * `settings` - Display context (severity label, scope, project key)
    ///
    /// # Returns
    /// A read model whose rows follow the payload's issue order exactly
    pub fn build(response: IssuesResponse, settings: &ReportSettings) -> IssueReportReadModel {
        let (issues, components, total) = response.into_parts();
        let index = ComponentIndex::new(components);
        let rows = Self::build_rows(&issues, &index);

        IssueReportReadModel {
            summary: ReportSummaryView {
                severity_label: settings.severity_label.clone(),
                scope: settings.scope,
                project_key: settings.project_key.clone(),
                total,
                shown: rows.len(),
            },
            rows,
        }
    }

    fn build_rows(issues: &[Issue], index: &ComponentIndex) -> Vec<IssueRowView> {
        issues
            .iter()
            .enumerate()
            .map(|(position, issue)| IssueRowView {
                index: position + 1,
                file_name: index.resolve_file_name(issue.component_key()).to_string(),
                line: issue.line_display().to_string(),
                rule: issue.rule().to_string(),
                message: truncate_message(issue.message()).into_owned(),
                impact_severity: issue.impact_severity().to_string(),
                software_quality: issue.software_quality().to_string(),
            })
            .collect()
    }
}
