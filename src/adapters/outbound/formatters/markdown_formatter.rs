use crate::application::read_models::{IssueReportReadModel, IssueRowView, ReportSummaryView};
use crate::ports::outbound::IssueReportFormatter;
use crate::shared::Result;

/// Tag lines wrapping a non-empty report; downstream tooling matches on them
const OPEN_TAG: &str = "<sonar-issues>\n";
const CLOSE_TAG: &str = "</sonar-issues>\n";

/// Markdown table header for issue information
const TABLE_HEADER: &str =
    "| # | File | Line | Rule | Message | Impact Severity | Software Quality |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str =
    "|---|------|------|------|---------|-----------------|------------------|\n";

/// Instructions appended after the table
const FIX_INSTRUCTIONS: &str = "Fix these issues one by one. For each issue:\n\
1. Read the file at the specified line\n\
2. Apply the fix following the project coding standards\n\
3. Move to the next issue\n\
4. After all fixes, run your build command\n";

/// MarkdownTableFormatter adapter for the `<sonar-issues>` report
///
/// Cell values are written verbatim; the output is a fixed textual contract,
/// so nothing is escaped or reordered.
pub struct MarkdownTableFormatter;

impl MarkdownTableFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownTableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownTableFormatter {
    fn render_empty_notice(&self, output: &mut String, summary: &ReportSummaryView) {
        output.push_str(&format!(
            "SonarQube: No open {} impact severity issues found ({}).\n",
            summary.severity_label, summary.scope
        ));
    }

    fn render_summary(&self, output: &mut String, summary: &ReportSummaryView) {
        output.push_str(&format!(
            "SonarQube: {} open issues ({} impact, {}) for {}.\n",
            summary.total, summary.severity_label, summary.scope, summary.project_key
        ));
        output.push_str(&format!(
            "Showing top {} sorted by severity.\n\n",
            summary.shown
        ));
    }

    fn render_table(&self, output: &mut String, rows: &[IssueRowView]) {
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for row in rows {
            output.push_str(&format!(
                "| {} | `{}` | {} | {} | {} | {} | {} |\n",
                row.index,
                row.file_name,
                row.line,
                row.rule,
                row.message,
                row.impact_severity,
                row.software_quality
            ));
        }
    }

    fn render_instructions(&self, output: &mut String) {
        output.push('\n');
        output.push_str(FIX_INSTRUCTIONS);
    }
}

impl IssueReportFormatter for MarkdownTableFormatter {
    fn format(&self, model: &IssueReportReadModel) -> Result<String> {
        let mut output = String::new();

        if model.is_empty() {
            self.render_empty_notice(&mut output, &model.summary);
            return Ok(output);
        }

        output.push_str(OPEN_TAG);
        self.render_summary(&mut output, &model.summary);
        self.render_table(&mut output, &model.rows);
        self.render_instructions(&mut output);
        output.push_str(CLOSE_TAG);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue_report::domain::ScopeLabel;

    fn summary(total: u64, shown: usize, scope: ScopeLabel) -> ReportSummaryView {
        ReportSummaryView {
            severity_label: "HIGH,MEDIUM".to_string(),
            scope,
            project_key: "acme-api".to_string(),
            total,
            shown,
        }
    }

    fn row(index: usize, file_name: &str, message: &str) -> IssueRowView {
        IssueRowView {
            index,
            file_name: file_name.to_string(),
            line: "42".to_string(),
            rule: "python:S3776".to_string(),
            message: message.to_string(),
            impact_severity: "HIGH".to_string(),
            software_quality: "MAINTAINABILITY".to_string(),
        }
    }

    #[test]
    fn test_format_empty_report() {
        let model = IssueReportReadModel {
            summary: summary(0, 0, ScopeLabel::Overall),
            rows: vec![],
        };

        let output = MarkdownTableFormatter::new().format(&model).unwrap();

        assert_eq!(
            output,
            "SonarQube: No open HIGH,MEDIUM impact severity issues found (overall).\n"
        );
    }

    #[test]
    fn test_format_empty_report_new_code() {
        let model = IssueReportReadModel {
            summary: summary(0, 0, ScopeLabel::NewCode),
            rows: vec![],
        };

        let output = MarkdownTableFormatter::new().format(&model).unwrap();

        assert!(output.contains("found (new code)."));
        assert!(!output.contains("<sonar-issues>"));
    }

    #[test]
    fn test_format_full_report() {
        let model = IssueReportReadModel {
            summary: summary(15, 2, ScopeLabel::NewCode),
            rows: vec![
                row(1, "main.py", "Refactor this function."),
                row(2, "util.py", "Remove this unused variable."),
            ],
        };

        let output = MarkdownTableFormatter::new().format(&model).unwrap();

        let expected = "<sonar-issues>\n\
SonarQube: 15 open issues (HIGH,MEDIUM impact, new code) for acme-api.\n\
Showing top 2 sorted by severity.\n\
\n\
| # | File | Line | Rule | Message | Impact Severity | Software Quality |\n\
|---|------|------|------|---------|-----------------|------------------|\n\
| 1 | `main.py` | 42 | python:S3776 | Refactor this function. | HIGH | MAINTAINABILITY |\n\
| 2 | `util.py` | 42 | python:S3776 | Remove this unused variable. | HIGH | MAINTAINABILITY |\n\
\n\
Fix these issues one by one. For each issue:\n\
1. Read the file at the specified line\n\
2. Apply the fix following the project coding standards\n\
3. Move to the next issue\n\
4. After all fixes, run your build command\n\
</sonar-issues>\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_does_not_escape_cells() {
        let model = IssueReportReadModel {
            summary: summary(1, 1, ScopeLabel::Overall),
            rows: vec![row(1, "a.py", "Use `a | b` here")],
        };

        let output = MarkdownTableFormatter::new().format(&model).unwrap();

        assert!(output.contains("| Use `a | b` here |"));
    }

    #[test]
    fn test_format_row_count_matches_rows() {
        let rows: Vec<IssueRowView> = (1..=5).map(|i| row(i, "f.rs", "m")).collect();
        let model = IssueReportReadModel {
            summary: summary(5, 5, ScopeLabel::Overall),
            rows,
        };

        let output = MarkdownTableFormatter::new().format(&model).unwrap();

        let data_rows = output
            .lines()
            .filter(|l| l.starts_with("| ") && l.contains("`f.rs`"))
            .count();
        assert_eq!(data_rows, 5);
        assert!(output.starts_with(OPEN_TAG));
        assert!(output.ends_with(CLOSE_TAG));
    }
}
