use crate::application::read_models::IssueReportReadModel;
use crate::shared::Result;

/// IssueReportFormatter port for rendering a resolved issue report
pub trait IssueReportFormatter {
    /// Renders the report as text
    ///
    /// # Arguments
    /// * `model` - Display-ready header values and rows, in input order
    ///
    /// # Returns
    /// The complete output, newline-terminated
    fn format(&self, model: &IssueReportReadModel) -> Result<String>;
}
