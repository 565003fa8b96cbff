//! Read models for CQRS-lite pattern
//!
//! This module contains the display-ready view of an issue report, built
//! once from the parsed payload and consumed by formatters.

pub mod issue_report_read_model;
pub mod issue_report_read_model_builder;
pub mod issue_row_view;

pub use issue_report_read_model::{IssueReportReadModel, ReportSummaryView};
pub use issue_report_read_model_builder::IssueReportReadModelBuilder;
pub use issue_row_view::IssueRowView;
