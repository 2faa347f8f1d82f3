use crate::shared::Result;
use std::path::Path;

/// ReportReader port for loading the raw Inspector report
///
/// This port abstracts the file system operations needed to get the
/// Inspector export into memory; parsing stays in the application layer.
pub trait ReportReader {
    /// Reads the Inspector report at the given path
    ///
    /// # Returns
    /// The raw JSON text of the report
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report does not exist
    /// - The path is not a regular file, or is a symbolic link
    /// - The file cannot be read due to permissions or I/O errors
    fn read_report(&self, path: &Path) -> Result<String>;
}
