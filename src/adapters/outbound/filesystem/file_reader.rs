use crate::ports::outbound::ReportReader;
use crate::shared::error::ConvertError;
use crate::shared::security::{validate_regular_file, MAX_REPORT_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading the Inspector report from disk
pub struct FileSystemReader {
    max_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_size: MAX_REPORT_SIZE,
        }
    }

    /// Overrides the size limit (used by tests to exercise the limit cheaply)
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ConvertError::ReportNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "\"{}\" does not exist.\n   \
                     Export your Inspector findings to this file, or specify another report with the --input option.",
                    path.display()
                ),
            }
            .into());
        }

        // Symlink, file type and size checks before loading into memory
        validate_regular_file(path, self.max_size)?;

        fs::read_to_string(path).map_err(|e| {
            ConvertError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
