use crate::conversion::domain::PrismReport;
use crate::shared::Result;

/// PrismFormatter port for rendering a Prism report
pub trait PrismFormatter {
    /// Formats the report as the text that will be written out
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &PrismReport) -> Result<String>;
}
