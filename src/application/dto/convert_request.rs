use std::path::PathBuf;

/// ConvertRequest - Internal request DTO for the conversion use case
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Path to the Inspector findings export
    pub report_path: PathBuf,
}

impl ConvertRequest {
    pub fn new(report_path: PathBuf) -> Self {
        Self { report_path }
    }
}
