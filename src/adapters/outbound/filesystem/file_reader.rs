use crate::ports::outbound::PayloadReader;
use crate::shared::error::IssueFormatError;
use crate::shared::security::{validate_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// FileSystemReader adapter for reading the payload from a file
///
/// Used when `--input` is given. Symbolic links, non-regular files and
/// files over `MAX_FILE_SIZE` are refused.
pub struct FileSystemReader {
    path: PathBuf,
}

impl FileSystemReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PayloadReader for FileSystemReader {
    fn read_payload(&self) -> Result<Vec<u8>> {
        validate_input_file(&self.path, MAX_FILE_SIZE)?;

        fs::read(&self.path).map_err(|e| {
            IssueFormatError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}

/// StdinReader adapter for reading the payload from standard input
///
/// Reads until EOF before returning.
pub struct StdinReader;

impl StdinReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadReader for StdinReader {
    fn read_payload(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .map_err(|e| IssueFormatError::InputReadError {
                source_name: self.source_name(),
                details: e.to_string(),
            })?;
        Ok(buffer)
    }

    fn source_name(&self) -> String {
        "stdin".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_payload_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("issues.json");
        fs::write(&path, r#"{"issues":[]}"#).unwrap();

        let reader = FileSystemReader::new(path);
        let payload = reader.read_payload().unwrap();

        assert_eq!(payload, br#"{"issues":[]}"#.to_vec());
    }

    #[test]
    fn test_read_payload_missing_file() {
        let reader = FileSystemReader::new(PathBuf::from("/nonexistent/issues.json"));
        let err = reader.read_payload().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<IssueFormatError>(),
            Some(IssueFormatError::FileReadError { .. })
        ));
    }

    #[test]
    fn test_read_payload_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let reader = FileSystemReader::new(temp_dir.path().to_path_buf());

        let err = reader.read_payload().unwrap_err();
        assert!(err.to_string().contains("Not a regular file"));
    }

    #[test]
    fn test_source_names() {
        let reader = FileSystemReader::new(PathBuf::from("out/issues.json"));
        assert_eq!(reader.source_name(), "out/issues.json");
        assert_eq!(StdinReader::new().source_name(), "stdin");
    }
}
