use inspector_prism::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ReportReader that serves fixed content and records requested paths
#[derive(Clone)]
pub struct MockReportReader {
    pub content: String,
    pub should_fail: bool,
    pub requested_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockReportReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
            requested_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    pub fn get_requested_paths(&self) -> Vec<PathBuf> {
        self.requested_paths.lock().unwrap().clone()
    }
}

impl ReportReader for MockReportReader {
    fn read_report(&self, path: &Path) -> Result<String> {
        self.requested_paths.lock().unwrap().push(path.to_path_buf());
        if self.should_fail {
            anyhow::bail!("Mock report read failure");
        }
        Ok(self.content.clone())
    }
}
