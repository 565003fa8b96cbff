use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// The filter contract only promises `0` and `1`; the remaining codes cover
/// the optional command-line surface so CI jobs can still tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report rendered, including the "no issues" line
    Success = 0,
    /// The payload was not valid JSON or did not match the issues schema
    InvalidInput = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Anything else: unreadable input file, unwritable output, etc.
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error bubbled up from `run()`
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<IssueFormatError>() {
            Some(IssueFormatError::InvalidJson { .. }) => ExitCode::InvalidInput,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidInput => write!(f, "Invalid Input (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for issue formatting.
///
/// `InvalidJson` renders as the single stderr line downstream tooling
/// matches on, so its message carries no hint block.
#[derive(Debug, Error)]
pub enum IssueFormatError {
    #[error("Error: Invalid JSON input - {details}")]
    InvalidJson { details: String },

    #[error("Failed to read issues payload from {source_name}\nDetails: {details}")]
    InputReadError { source_name: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
