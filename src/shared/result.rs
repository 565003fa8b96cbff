/// Result alias used across the crate; errors are carried as `anyhow::Error`
/// and downcast to `IssueFormatError` where the exit code depends on them.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
