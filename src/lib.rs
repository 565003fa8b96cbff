//! sonar-issues - SonarQube issues to markdown
//!
//! This library turns a SonarQube `api/issues/search` response into the
//! `<sonar-issues>` markdown report consumed by CI comments and coding agents,
//! following hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`issue_report`): payload model, component lookup, display rules
//! - **Application Layer** (`application`): use case, read model and its builder
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): stdin/file readers, stdout/file presenters, markdown formatter
//! - **Config** (`config`): display settings from environment and flags
//! - **Shared** (`shared`): error types and exit codes
//!
//! # Example
//!
//! ```no_run
//! use sonar_issues::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = FormatIssuesUseCase::new(StdinReader::new(), StderrProgressReporter::disabled());
//! let settings = ReportSettings::from_env(SettingsOverrides::default());
//!
//! let model = use_case.execute(FormatIssuesRequest::new(settings))?;
//! let report = MarkdownTableFormatter::new().format(&model)?;
//! StdoutPresenter::new().present(&report)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod issue_report;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdinReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::MarkdownTableFormatter;
    pub use crate::application::dto::FormatIssuesRequest;
    pub use crate::application::read_models::{
        IssueReportReadModel, IssueReportReadModelBuilder, IssueRowView, ReportSummaryView,
    };
    pub use crate::application::use_cases::FormatIssuesUseCase;
    pub use crate::config::{ReportSettings, SettingsOverrides};
    pub use crate::issue_report::domain::{
        Component, ComponentIndex, Impact, Issue, IssuesResponse, ScopeLabel,
    };
    pub use crate::issue_report::services::PayloadParser;
    pub use crate::ports::outbound::{
        IssueReportFormatter, OutputPresenter, PayloadReader, ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, IssueFormatError};
    pub use crate::shared::Result;
}
