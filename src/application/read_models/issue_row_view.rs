//! Row view for the issue table
//!
//! Every field is already resolved to its display string, defaults included.

/// One table row, in payload order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRowView {
    /// 1-based position in the payload
    pub index: usize,
    /// File name only, without directories
    pub file_name: String,
    /// Line number, or `?`
    pub line: String,
    pub rule: String,
    /// Message after truncation
    pub message: String,
    pub impact_severity: String,
    pub software_quality: String,
}
