use crate::application::dto::{ConvertRequest, ConvertResponse};
use crate::conversion::domain::InspectorReport;
use crate::conversion::services::FindingMapper;
use crate::ports::outbound::{ProgressReporter, ReportReader};
use crate::shared::error::ConvertError;
use crate::shared::Result;
use std::path::Path;

/// ConvertReportUseCase - Core use case for Inspector to Prism conversion
///
/// # Type Parameters
/// * `R` - ReportReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ConvertReportUseCase<R, PR> {
    report_reader: R,
    progress_reporter: PR,
}

impl<R, PR> ConvertReportUseCase<R, PR>
where
    R: ReportReader,
    PR: ProgressReporter,
{
    /// Creates a new ConvertReportUseCase with injected dependencies
    pub fn new(report_reader: R, progress_reporter: PR) -> Self {
        Self {
            report_reader,
            progress_reporter,
        }
    }

    /// Executes the conversion use case
    ///
    /// # Returns
    /// ConvertResponse containing the mapped Prism report
    pub fn execute(&self, request: ConvertRequest) -> Result<ConvertResponse> {
        // Step 1: Load and parse the Inspector report
        self.progress_reporter.report(&format!(
            "📖 Loading Inspector report from: {}",
            request.report_path.display()
        ));

        let content = self.report_reader.read_report(&request.report_path)?;
        let inspector_report = self.parse_report(&content, &request.report_path)?;

        let finding_count = inspector_report.findings.len();
        self.progress_reporter
            .report(&format!("✅ Detected {} finding(s)", finding_count));

        if finding_count == 0 {
            self.progress_reporter.report_error(
                "⚠️  Warning: The Inspector report contains no findings. The Prism file will have no issues.",
            );
        }

        // Step 2: Map findings to Prism issues
        self.progress_reporter
            .report("🔄 Mapping findings to Prism issues...");
        let prism_report = FindingMapper::map(&inspector_report);

        self.progress_reporter.report_completion(&format!(
            "✅ Conversion complete: {} issue(s) ({})",
            prism_report.issue_count(),
            prism_report.rating_counts()
        ));

        Ok(ConvertResponse::new(prism_report))
    }

    /// Only invalid JSON is an error. Fields that are absent or of the wrong
    /// type read as empty values.
    fn parse_report(&self, content: &str, path: &Path) -> Result<InspectorReport> {
        let document: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConvertError::ReportParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        if !document.is_object() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} is not a JSON object. It will be treated as a report with no findings.",
                path.display()
            ));
        }

        Ok(InspectorReport::from_value(document))
    }
}
