use super::RiskRating;
use std::fmt;

/// Import format version understood by Prism
pub const PRISM_FORMAT_VERSION: u32 = 1;

/// AffectedHost value object - the infrastructure item an issue applies to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffectedHost {
    name: String,
}

impl AffectedHost {
    pub fn new(name: String) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// PrismIssue value object representing one normalized issue
///
/// Both risk-rating fields are set from a single rating at construction,
/// so they can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrismIssue {
    name: String,
    original_risk_rating: RiskRating,
    client_defined_risk_rating: RiskRating,
    finding: String,
    recommendation: String,
    affected_hosts: Vec<AffectedHost>,
    cves: Vec<String>,
}

impl PrismIssue {
    pub fn new(
        name: String,
        finding: String,
        recommendation: String,
        risk_rating: RiskRating,
        affected_host: AffectedHost,
        cves: Vec<String>,
    ) -> Self {
        Self {
            name,
            original_risk_rating: risk_rating,
            client_defined_risk_rating: risk_rating,
            finding,
            recommendation,
            affected_hosts: vec![affected_host],
            cves,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn original_risk_rating(&self) -> RiskRating {
        self.original_risk_rating
    }

    pub fn client_defined_risk_rating(&self) -> RiskRating {
        self.client_defined_risk_rating
    }

    pub fn finding(&self) -> &str {
        &self.finding
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    pub fn affected_hosts(&self) -> &[AffectedHost] {
        &self.affected_hosts
    }

    pub fn cves(&self) -> &[String] {
        &self.cves
    }
}

/// PrismReport aggregate - the root of a Prism import file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrismReport {
    version: u32,
    issues: Vec<PrismIssue>,
}

impl PrismReport {
    pub fn new(issues: Vec<PrismIssue>) -> Self {
        Self {
            version: PRISM_FORMAT_VERSION,
            issues,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn issues(&self) -> &[PrismIssue] {
        &self.issues
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Tallies issues per risk rating
    pub fn rating_counts(&self) -> RatingCounts {
        let mut counts = RatingCounts::default();
        for issue in &self.issues {
            counts.increment(issue.original_risk_rating());
        }
        counts
    }
}

/// Number of issues per risk rating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingCounts {
    critical: usize,
    high: usize,
    medium: usize,
    low: usize,
    info: usize,
}

impl RatingCounts {
    pub fn get(&self, rating: RiskRating) -> usize {
        match rating {
            RiskRating::Critical => self.critical,
            RiskRating::High => self.high,
            RiskRating::Medium => self.medium,
            RiskRating::Low => self.low,
            RiskRating::Info => self.info,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low + self.info
    }

    fn increment(&mut self, rating: RiskRating) {
        let slot = match rating {
            RiskRating::Critical => &mut self.critical,
            RiskRating::High => &mut self.high,
            RiskRating::Medium => &mut self.medium,
            RiskRating::Low => &mut self.low,
            RiskRating::Info => &mut self.info,
        };
        *slot += 1;
    }
}

impl fmt::Display for RatingCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = RiskRating::ALL
            .iter()
            .map(|rating| format!("{}: {}", rating, self.get(*rating)))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(name: &str, rating: RiskRating) -> PrismIssue {
        PrismIssue::new(
            name.to_string(),
            "finding".to_string(),
            "recommendation".to_string(),
            rating,
            AffectedHost::new("host".to_string()),
            vec![],
        )
    }

    #[test]
    fn test_issue_ratings_are_equal() {
        let issue = issue("openssl", RiskRating::High);
        assert_eq!(issue.original_risk_rating(), RiskRating::High);
        assert_eq!(
            issue.original_risk_rating(),
            issue.client_defined_risk_rating()
        );
    }

    #[test]
    fn test_issue_has_exactly_one_affected_host() {
        let issue = issue("openssl", RiskRating::Low);
        assert_eq!(issue.affected_hosts().len(), 1);
        assert_eq!(issue.affected_hosts()[0].name(), "host");
    }

    #[test]
    fn test_report_version_is_constant() {
        assert_eq!(PrismReport::new(vec![]).version(), 1);
        assert_eq!(
            PrismReport::new(vec![issue("a", RiskRating::Info)]).version(),
            PRISM_FORMAT_VERSION
        );
    }

    #[test]
    fn test_report_preserves_issue_order() {
        let report = PrismReport::new(vec![
            issue("first", RiskRating::Low),
            issue("second", RiskRating::Critical),
        ]);
        let names: Vec<&str> = report.issues().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(report.issue_count(), 2);
    }

    #[test]
    fn test_rating_counts() {
        let report = PrismReport::new(vec![
            issue("a", RiskRating::Critical),
            issue("b", RiskRating::Critical),
            issue("c", RiskRating::Medium),
            issue("d", RiskRating::Info),
        ]);
        let counts = report.rating_counts();
        assert_eq!(counts.get(RiskRating::Critical), 2);
        assert_eq!(counts.get(RiskRating::High), 0);
        assert_eq!(counts.get(RiskRating::Medium), 1);
        assert_eq!(counts.get(RiskRating::Low), 0);
        assert_eq!(counts.get(RiskRating::Info), 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_rating_counts_display() {
        let report = PrismReport::new(vec![issue("a", RiskRating::High)]);
        assert_eq!(
            format!("{}", report.rating_counts()),
            "Critical: 0, High: 1, Medium: 0, Low: 0, Info: 0"
        );
    }
}
