//! Data model for the report pipeline.
//!
//! Three layers, one per pipeline stage:
//! - raw input types matching the trivy-operator JSON shape (`ScanReport`)
//! - flat records stamped with their source resource (`VulnerabilityRecord`,
//!   `ConfigRecord`)
//! - grouped records keyed by finding identity (`VulnerabilityGroup`,
//!   `ConfigGroup`)

use serde::{Deserialize, Deserializer, Serialize};

/// Finding severity with an explicit display rank.
///
/// Any severity string outside the four known levels deserializes to
/// `Unknown` rather than failing; a missing severity field defaults to
/// `Unknown` as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    #[default]
    Unknown,
}

impl Severity {
    /// Parse a severity name. Unrecognized values map to `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "CRITICAL" => Severity::Critical,
            "HIGH" => Severity::High,
            "MEDIUM" => Severity::Medium,
            "LOW" => Severity::Low,
            _ => Severity::Unknown,
        }
    }

    /// Display rank used for sorting: lower ranks render first.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
            Severity::Unknown => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Severity::from_name(&name))
    }
}

/// One scan report as produced by the upstream scanner, covering a single
/// workload resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub namespace: String,
    pub name: String,
    pub report: ReportPayload,
}

/// Report payload: a vulnerability report carries `vulnerabilities`, a
/// config-audit report carries `checks`. A payload with neither key is
/// recognized as "no findings" and skipped by the normalizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vulnerabilities: Option<Vec<RawVulnerability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<RawCheck>>,
}

/// A vulnerability entry as it appears in the raw report payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVulnerability {
    #[serde(rename = "vulnerabilityID")]
    pub vulnerability_id: String,
    #[serde(default)]
    pub severity: Severity,
    pub title: String,
    #[serde(rename = "packagePURL", default)]
    pub package_purl: Option<String>,
    #[serde(default)]
    pub installed_version: Option<String>,
    #[serde(default)]
    pub fixed_version: Option<String>,
}

/// A config-audit check entry as it appears in the raw report payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCheck {
    #[serde(rename = "checkID")]
    pub check_id: String,
    #[serde(default)]
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub remediation: String,
    pub success: bool,
}

/// Flat vulnerability record: one raw entry stamped with its source
/// resource. Optional fields serialize as explicit `null` so every record
/// has a uniform shape downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityRecord {
    pub namespace: String,
    pub resource: String,
    #[serde(rename = "vulnerabilityID")]
    pub vulnerability_id: String,
    pub severity: Severity,
    pub title: String,
    #[serde(rename = "packagePURL")]
    pub package_purl: Option<String>,
    pub installed_version: Option<String>,
    pub fixed_version: Option<String>,
}

/// Flat config-audit record. `success` exists at this stage only; grouping
/// drops it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    pub namespace: String,
    pub resource: String,
    #[serde(rename = "checkID")]
    pub check_id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub remediation: String,
    pub success: bool,
}

/// A `{namespace, resource}` pair marking one occurrence of a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub namespace: String,
    pub resource: String,
}

/// One entry per distinct vulnerability ID across all resources.
/// Descriptive fields come from the first occurrence; `affected_resources`
/// holds one entry per occurrence, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityGroup {
    #[serde(rename = "vulnerabilityID")]
    pub vulnerability_id: String,
    pub severity: Severity,
    pub title: String,
    #[serde(rename = "packagePURL")]
    pub package_purl: Option<String>,
    pub installed_version: Option<String>,
    pub fixed_version: Option<String>,
    #[serde(rename = "affected_resources")]
    pub affected_resources: Vec<ResourceRef>,
}

/// One entry per distinct check ID across all resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigGroup {
    #[serde(rename = "checkID")]
    pub check_id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub remediation: String,
    #[serde(rename = "affected_resources")]
    pub affected_resources: Vec<ResourceRef>,
}

/// Intermediate persisted format: the two flat sequences produced by the
/// normalizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlatReport {
    pub vulnerabilities: Vec<VulnerabilityRecord>,
    pub config_issues: Vec<ConfigRecord>,
}

/// Final persisted format: grouped and severity-sorted, ready for
/// rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupedReport {
    pub vulnerabilities: Vec<VulnerabilityGroup>,
    pub config_issues: Vec<ConfigGroup>,
}

impl GroupedReport {
    pub fn is_empty(&self) -> bool {
        self.vulnerabilities.is_empty() && self.config_issues.is_empty()
    }

    /// Number of distinct vulnerabilities at the given severity rank
    /// (rank 0 = critical).
    pub fn vulnerabilities_at_rank(&self, rank: u8) -> usize {
        self.vulnerabilities
            .iter()
            .filter(|g| g.severity.rank() == rank)
            .count()
    }
}
