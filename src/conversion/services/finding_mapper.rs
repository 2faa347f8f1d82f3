use crate::conversion::domain::{
    AffectedHost, InspectorFinding, InspectorReport, InspectorResource, PrismIssue, PrismReport,
};
use crate::conversion::policies::SeverityPolicy;

/// Marker identifying a vulnerability id as a CVE
const CVE_MARKER: &str = "CVE-";

/// FindingMapper service for converting Inspector findings into Prism issues
///
/// This service contains pure business logic: it never fails, never performs
/// I/O and keeps issues in the same order as the source findings.
pub struct FindingMapper;

impl FindingMapper {
    /// Maps a whole Inspector report to a Prism report, one issue per finding
    pub fn map(report: &InspectorReport) -> PrismReport {
        let issues = report.findings.iter().map(Self::map_finding).collect();
        PrismReport::new(issues)
    }

    /// Maps a single finding
    pub fn map_finding(finding: &InspectorFinding) -> PrismIssue {
        PrismIssue::new(
            finding.title.clone(),
            finding.description.clone(),
            finding.recommendation_text().to_string(),
            SeverityPolicy::map_severity(&finding.severity),
            Self::derive_affected_host(&finding.resources),
            Self::extract_cves(finding.vulnerability_id()),
        )
    }

    /// Returns the vulnerability id as the only CVE when it contains `CVE-`
    pub fn extract_cves(vulnerability_id: &str) -> Vec<String> {
        if vulnerability_id.contains(CVE_MARKER) {
            vec![vulnerability_id.to_string()]
        } else {
            Vec::new()
        }
    }

    /// Derives the affected host from the first resource only
    ///
    /// Priority order:
    /// 1. ECR repository name (if non-empty)
    /// 2. The `Name` tag, when the resource carries an EC2 key name
    /// 3. Empty name (also used when there are no resources at all)
    pub fn derive_affected_host(resources: &[InspectorResource]) -> AffectedHost {
        let name = match resources.first() {
            Some(resource) if !resource.repository_name().is_empty() => {
                resource.repository_name().to_string()
            }
            // The tag, not the key name, identifies the instance in Prism.
            Some(resource) if !resource.key_name().is_empty() => resource.tag_name().to_string(),
            _ => String::new(),
        };
        AffectedHost::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::domain::{
        Ec2Instance, EcrContainerImage, PackageVulnerabilityDetails, Recommendation, Remediation,
        ResourceDetails, ResourceTags, RiskRating,
    };

    fn resource(repository_name: &str, key_name: &str, tag_name: &str) -> InspectorResource {
        InspectorResource {
            details: ResourceDetails {
                aws_ecr_container_image: EcrContainerImage {
                    repository_name: repository_name.to_string(),
                },
                aws_ec2_instance: Ec2Instance {
                    key_name: key_name.to_string(),
                },
            },
            tags: ResourceTags {
                name: tag_name.to_string(),
            },
        }
    }

    fn finding(title: &str, severity: &str, vulnerability_id: &str) -> InspectorFinding {
        InspectorFinding {
            title: title.to_string(),
            description: format!("{} description", title),
            severity: severity.to_string(),
            package_vulnerability_details: PackageVulnerabilityDetails {
                vulnerability_id: vulnerability_id.to_string(),
            },
            remediation: Remediation {
                recommendation: Recommendation {
                    text: format!("Fix {}", title),
                },
            },
            resources: vec![resource("my-repo", "", "")],
        }
    }

    #[test]
    fn test_map_copies_text_fields() {
        let issue = FindingMapper::map_finding(&finding("openssl", "HIGH", "CVE-2023-12345"));

        assert_eq!(issue.name(), "openssl");
        assert_eq!(issue.finding(), "openssl description");
        assert_eq!(issue.recommendation(), "Fix openssl");
        assert_eq!(issue.original_risk_rating(), RiskRating::High);
        assert_eq!(issue.client_defined_risk_rating(), RiskRating::High);
    }

    #[test]
    fn test_map_preserves_count_and_order() {
        let report = InspectorReport {
            findings: vec![
                finding("first", "LOW", ""),
                finding("second", "CRITICAL", ""),
                finding("third", "BOGUS", ""),
            ],
        };

        let prism = FindingMapper::map(&report);

        assert_eq!(prism.version(), 1);
        assert_eq!(prism.issue_count(), report.findings.len());
        let names: Vec<&str> = prism.issues().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        for issue in prism.issues() {
            assert_eq!(
                issue.original_risk_rating(),
                issue.client_defined_risk_rating()
            );
        }
    }

    #[test]
    fn test_map_empty_report() {
        let prism = FindingMapper::map(&InspectorReport::default());
        assert_eq!(prism.version(), 1);
        assert!(prism.issues().is_empty());
    }

    #[test]
    fn test_extract_cves_with_cve_id() {
        assert_eq!(
            FindingMapper::extract_cves("CVE-2023-12345"),
            vec!["CVE-2023-12345".to_string()]
        );
    }

    #[test]
    fn test_extract_cves_substring_match() {
        assert_eq!(
            FindingMapper::extract_cves("ALAS-CVE-2022-0001"),
            vec!["ALAS-CVE-2022-0001".to_string()]
        );
    }

    #[test]
    fn test_extract_cves_without_cve_id() {
        assert!(FindingMapper::extract_cves("").is_empty());
        assert!(FindingMapper::extract_cves("GHSA-xxxx-yyyy-zzzz").is_empty());
        assert!(FindingMapper::extract_cves("cve-2023-12345").is_empty());
    }

    #[test]
    fn test_affected_host_from_repository_name() {
        let host = FindingMapper::derive_affected_host(&[resource("my-repo", "", "")]);
        assert_eq!(host.name(), "my-repo");
    }

    #[test]
    fn test_affected_host_uses_tag_when_key_name_present() {
        let host = FindingMapper::derive_affected_host(&[resource("", "key1", "prod-host")]);
        assert_eq!(host.name(), "prod-host");
    }

    #[test]
    fn test_affected_host_repository_wins_over_key_name() {
        let host = FindingMapper::derive_affected_host(&[resource("my-repo", "key1", "prod-host")]);
        assert_eq!(host.name(), "my-repo");
    }

    #[test]
    fn test_affected_host_tag_ignored_without_key_name() {
        let host = FindingMapper::derive_affected_host(&[resource("", "", "prod-host")]);
        assert_eq!(host.name(), "");
    }

    #[test]
    fn test_affected_host_only_first_resource_counts() {
        let host = FindingMapper::derive_affected_host(&[
            resource("", "", ""),
            resource("second-repo", "", ""),
        ]);
        assert_eq!(host.name(), "");
    }

    #[test]
    fn test_affected_host_without_resources() {
        let mut no_resources = finding("orphan", "MEDIUM", "");
        no_resources.resources.clear();

        let issue = FindingMapper::map_finding(&no_resources);

        assert_eq!(issue.affected_hosts(), &[AffectedHost::new(String::new())]);
    }
}
