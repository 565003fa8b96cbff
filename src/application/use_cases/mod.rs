/// Use cases module containing application business logic orchestration
mod format_issues;

pub use format_issues::FormatIssuesUseCase;
