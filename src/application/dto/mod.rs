/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod format_issues_request;

pub use format_issues_request::FormatIssuesRequest;
