/// ProgressReporter port for reporting what the formatter is doing
///
/// Messages go to stderr (or nowhere) so they never mix with the report
/// written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
