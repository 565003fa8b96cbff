use crate::application::dto::FormatIssuesRequest;
use crate::application::read_models::{IssueReportReadModel, IssueReportReadModelBuilder};
use crate::issue_report::services::PayloadParser;
use crate::ports::outbound::{PayloadReader, ProgressReporter};
use crate::shared::Result;


/// FormatIssuesUseCase - Core use case for turning a search response into a report
///
/// Reads the whole payload, parses it, and resolves the display model.
/// Nothing is rendered here; a formatter port takes the returned model.
///
/// # Type Parameters
/// * `R` - PayloadReader implementation
/// * `PR` - ProgressReporter implementation
pub struct FormatIssuesUseCase<R, PR> {
    payload_reader: R,
    progress_reporter: PR,
}

impl<R, PR> FormatIssuesUseCase<R, PR>
where
    R: PayloadReader,
    PR: ProgressReporter,
{
    /// Creates a new FormatIssuesUseCase with injected dependencies
    pub fn new(payload_reader: R, progress_reporter: PR) -> Self {
        Self {
            payload_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Returns `IssueFormatError::InvalidJson` when the payload does not parse,
    /// or the reader's error when the payload cannot be read.
    pub fn execute(&self, request: FormatIssuesRequest) -> Result<IssueReportReadModel> {
        // Step 1: Read the complete payload
        self.progress_reporter.report(&format!(
            "📖 Reading issues payload from {}",
            self.payload_reader.source_name()
        ));
        let payload = self.payload_reader.read_payload()?;

        // Step 2: Parse
        let response = PayloadParser::parse(&payload)?;
        self.progress_reporter.report(&format!(
            "✅ Parsed {} issue(s) and {} component(s)",
            response.issues().len(),
            response.components().len()
        ));

        if let Some(total) = response.total {
            let shown = response.issues().len() as u64;
            if total > shown {
                self.progress_reporter.report(&format!(
                    "   - Showing {} of {} reported issue(s)",
                    shown, total
                ));
            } else if total < shown {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: payload total ({}) is smaller than the {} issue(s) it contains",
                    total, shown
                ));
            }
        }

        // Step 3: Resolve display values
        let model = IssueReportReadModelBuilder::build(response, &request.settings);

        if model.is_empty() {
            self.progress_reporter.report_completion(&format!(
                "✨ No open issues for {} ({})",
                model.summary.project_key, model.summary.scope
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "📝 Prepared {} row(s) for {}",
                model.rows.len(),
                model.summary.project_key
            ));
        }

        Ok(model)
    }
}
