pub mod inspector_report;
pub mod prism_report;
pub mod risk_rating;

pub use inspector_report::{
    Ec2Instance, EcrContainerImage, InspectorFinding, InspectorReport, InspectorResource,
    PackageVulnerabilityDetails, Recommendation, Remediation, ResourceDetails, ResourceTags,
};
pub use prism_report::{AffectedHost, PrismIssue, PrismReport, RatingCounts, PRISM_FORMAT_VERSION};
pub use risk_rating::RiskRating;
