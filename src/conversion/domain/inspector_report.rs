use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes a field, falling back to its default when the value is `null`
/// or of the wrong JSON type.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decodes a sequence element by element. A malformed element becomes a
/// default entry so the sequence keeps its length; a non-array is empty.
fn each_or_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| T::deserialize(item).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Lowercases every object key so fields match regardless of case.
/// If two keys fold to the same name, the one that sorts last wins.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), fold_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

/// Root of an AWS Inspector findings export.
///
/// Build it with [`InspectorReport::from_value`], which matches field names
/// case-insensitively. That covers both the PascalCase export layout and the
/// camelCase output of `aws inspector2 list-findings`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InspectorReport {
    #[serde(rename = "findings", default, deserialize_with = "each_or_default")]
    pub findings: Vec<InspectorFinding>,
}

impl InspectorReport {
    /// Builds a report from a parsed JSON document.
    ///
    /// Never fails: absent, `null` and mistyped fields read as empty, and a
    /// document that is not an object yields a report with no findings.
    pub fn from_value(value: Value) -> Self {
        match fold_keys(value) {
            object @ Value::Object(_) => Self::deserialize(object).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

/// A single finding reported by the scanner.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InspectorFinding {
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,

    #[serde(default, deserialize_with = "or_default")]
    pub description: String,

    #[serde(default, deserialize_with = "or_default")]
    pub severity: String,

    #[serde(
        rename = "packagevulnerabilitydetails",
        default,
        deserialize_with = "or_default"
    )]
    pub package_vulnerability_details: PackageVulnerabilityDetails,

    #[serde(default, deserialize_with = "or_default")]
    pub remediation: Remediation,

    #[serde(default, deserialize_with = "each_or_default")]
    pub resources: Vec<InspectorResource>,
}

impl InspectorFinding {
    pub fn vulnerability_id(&self) -> &str {
        &self.package_vulnerability_details.vulnerability_id
    }

    pub fn recommendation_text(&self) -> &str {
        &self.remediation.recommendation.text
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PackageVulnerabilityDetails {
    #[serde(rename = "vulnerabilityid", default, deserialize_with = "or_default")]
    pub vulnerability_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Remediation {
    #[serde(default, deserialize_with = "or_default")]
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Recommendation {
    #[serde(default, deserialize_with = "or_default")]
    pub text: String,
}

/// Infrastructure object a finding was raised against.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InspectorResource {
    #[serde(default, deserialize_with = "or_default")]
    pub details: ResourceDetails,

    #[serde(default, deserialize_with = "or_default")]
    pub tags: ResourceTags,
}

impl InspectorResource {
    /// ECR repository name, empty when the resource is not a container image
    pub fn repository_name(&self) -> &str {
        &self.details.aws_ecr_container_image.repository_name
    }

    /// EC2 key pair name, empty when the resource is not an instance
    pub fn key_name(&self) -> &str {
        &self.details.aws_ec2_instance.key_name
    }

    /// Value of the `Name` tag
    pub fn tag_name(&self) -> &str {
        &self.tags.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResourceDetails {
    #[serde(
        rename = "awsecrcontainerimage",
        default,
        deserialize_with = "or_default"
    )]
    pub aws_ecr_container_image: EcrContainerImage,

    #[serde(rename = "awsec2instance", default, deserialize_with = "or_default")]
    pub aws_ec2_instance: Ec2Instance,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EcrContainerImage {
    #[serde(rename = "repositoryname", default, deserialize_with = "or_default")]
    pub repository_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ec2Instance {
    #[serde(rename = "keyname", default, deserialize_with = "or_default")]
    pub key_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResourceTags {
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
}
