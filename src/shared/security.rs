use crate::shared::error::IssueFormatError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest payload file accepted through `--input` (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects a path that is itself a symbolic link
///
/// Uses `symlink_metadata()` so the link is inspected, not its target.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| IssueFormatError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata before {}: {}", operation, e),
    })?;

    if metadata.is_symlink() {
        return Err(IssueFormatError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} through a symbolic link is not allowed", operation),
            hint: "Pass the real file path instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that `path` is a regular, reasonably sized file and returns its size
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds `max_size` bytes
pub fn validate_input_file(path: &Path, max_size: u64) -> Result<u64> {
    validate_not_symlink(path, "reading")?;

    let metadata = fs::metadata(path).map_err(|e| IssueFormatError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if !metadata.is_file() {
        return Err(IssueFormatError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(IssueFormatError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                max_size
            ),
            hint: "Request fewer issues per page upstream".to_string(),
        }
        .into());
    }

    Ok(metadata.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("issues.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_not_symlink(&file_path, "reading").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/issues.json");
        let err = validate_not_symlink(&path, "reading").unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("issues.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_not_symlink(&link, "reading").unwrap_err();
        assert!(err.to_string().contains("Security violation"));
    }

    #[test]
    fn test_validate_input_file_returns_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("issues.json");
        fs::write(&file_path, r#"{"issues":[]}"#).unwrap();

        assert_eq!(validate_input_file(&file_path, MAX_FILE_SIZE).unwrap(), 13);
    }

    #[test]
    fn test_validate_input_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = validate_input_file(temp_dir.path(), MAX_FILE_SIZE).unwrap_err();
        assert!(err.to_string().contains("Not a regular file"));
    }

    #[test]
    fn test_validate_input_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("issues.json");
        fs::write(&file_path, "0123456789").unwrap();

        let err = validate_input_file(&file_path, 4).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
