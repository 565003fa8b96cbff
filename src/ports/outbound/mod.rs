/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the outside world (stdin, files, stdout, stderr).
pub mod formatter;
pub mod output_presenter;
pub mod payload_reader;
pub mod progress_reporter;

pub use formatter::IssueReportFormatter;
pub use output_presenter::OutputPresenter;
pub use payload_reader::PayloadReader;
pub use progress_reporter::ProgressReporter;
