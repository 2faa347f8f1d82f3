use crate::conversion::domain::RiskRating;

/// SeverityPolicy for translating Inspector severities into Prism ratings
///
/// Matching is case-sensitive. `INFORMATIONAL`, `UNTRIAGED` and any value
/// the scanner may introduce later all land on `Info`.
pub struct SeverityPolicy;

impl SeverityPolicy {
    /// Maps an Inspector severity string to a Prism risk rating
    ///
    /// # Arguments
    /// * `severity` - Severity as it appears in the Inspector report
    ///
    /// # Returns
    /// The matching rating, or `RiskRating::Info` for anything unrecognized
    pub fn map_severity(severity: &str) -> RiskRating {
        match severity {
            "LOW" => RiskRating::Low,
            "MEDIUM" => RiskRating::Medium,
            "HIGH" => RiskRating::High,
            "CRITICAL" => RiskRating::Critical,
            "INFORMATIONAL" | "UNTRIAGED" => RiskRating::Info,
            _ => RiskRating::Info,
        }
    }
}
