use crate::conversion::domain::{AffectedHost, PrismIssue, PrismReport};
use crate::ports::outbound::PrismFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct PrismFile<'a> {
    version: u32,
    issues: Vec<Issue<'a>>,
}

#[derive(Debug, Serialize)]
struct Issue<'a> {
    name: &'a str,
    original_risk_rating: &'static str,
    client_defined_risk_rating: &'static str,
    finding: &'a str,
    recommendation: &'a str,
    affected_hosts: Vec<Host<'a>>,
    cves: &'a [String],
}

#[derive(Debug, Serialize)]
struct Host<'a> {
    name: &'a str,
}

/// PrismJsonFormatter adapter for generating the Prism import JSON
///
/// Output is compact by default, matching what Prism has always been fed;
/// `pretty` switches to indented output for humans.
pub struct PrismJsonFormatter {
    pretty: bool,
}

impl PrismJsonFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn build_issue(issue: &PrismIssue) -> Issue<'_> {
        Issue {
            name: issue.name(),
            original_risk_rating: issue.original_risk_rating().as_str(),
            client_defined_risk_rating: issue.client_defined_risk_rating().as_str(),
            finding: issue.finding(),
            recommendation: issue.recommendation(),
            affected_hosts: issue.affected_hosts().iter().map(Self::build_host).collect(),
            cves: issue.cves(),
        }
    }

    fn build_host(host: &AffectedHost) -> Host<'_> {
        Host { name: host.name() }
    }
}

impl Default for PrismJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PrismFormatter for PrismJsonFormatter {
    fn format(&self, report: &PrismReport) -> Result<String> {
        let file = PrismFile {
            version: report.version(),
            issues: report.issues().iter().map(Self::build_issue).collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&file)?
        } else {
            serde_json::to_string(&file)?
        };
        Ok(json)
    }
}
