use crate::conversion::domain::PrismReport;

/// ConvertResponse - Internal response DTO from the conversion use case
///
/// Carries the mapped report; adapters decide how to format and where to
/// deliver it.
#[derive(Debug, Clone)]
pub struct ConvertResponse {
    pub report: PrismReport,
}

impl ConvertResponse {
    pub fn new(report: PrismReport) -> Self {
        Self { report }
    }
}
