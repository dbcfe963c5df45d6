//! Aggregator: groups flat findings by identity and orders them by
//! severity.
//!
//! Grouping is first-write-wins: descriptive fields come from the first
//! record carrying a given identity and are never updated afterwards, even
//! if a later record disagrees. Every record, first included, appends its
//! `{namespace, resource}` pair to the group's affected-resources list, so
//! duplicates across resources are preserved in input order.

use crate::error::{ReportError, Result};
use crate::model::{
    ConfigGroup, ConfigRecord, FlatReport, GroupedReport, ResourceRef, VulnerabilityGroup,
    VulnerabilityRecord,
};
use std::collections::HashMap;

/// Group flat vulnerability records by vulnerability ID.
///
/// The result is sorted ascending by severity rank; the sort is stable, so
/// groups of equal severity keep their first-occurrence order. An empty
/// identity is a malformed upstream payload and fails hard.
pub fn group_vulnerabilities(
    records: &[VulnerabilityRecord],
) -> Result<Vec<VulnerabilityGroup>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<VulnerabilityGroup> = Vec::new();

    for record in records {
        if record.vulnerability_id.is_empty() {
            return Err(ReportError::MissingIdentity {
                kind: "vulnerability ID",
                resource: format!("{}/{}", record.namespace, record.resource),
            });
        }

        let slot = *index
            .entry(record.vulnerability_id.as_str())
            .or_insert_with(|| {
                groups.push(VulnerabilityGroup {
                    vulnerability_id: record.vulnerability_id.clone(),
                    severity: record.severity,
                    title: record.title.clone(),
                    package_purl: record.package_purl.clone(),
                    installed_version: record.installed_version.clone(),
                    fixed_version: record.fixed_version.clone(),
                    affected_resources: Vec::new(),
                });
                groups.len() - 1
            });

        groups[slot].affected_resources.push(ResourceRef {
            namespace: record.namespace.clone(),
            resource: record.resource.clone(),
        });
    }

    groups.sort_by_key(|g| g.severity.rank());
    Ok(groups)
}

/// Group flat config-audit records by check ID. Same contract as
/// [`group_vulnerabilities`]; the flat-stage `success` flag is dropped.
pub fn group_config_issues(records: &[ConfigRecord]) -> Result<Vec<ConfigGroup>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ConfigGroup> = Vec::new();

    for record in records {
        if record.check_id.is_empty() {
            return Err(ReportError::MissingIdentity {
                kind: "check ID",
                resource: format!("{}/{}", record.namespace, record.resource),
            });
        }

        let slot = *index.entry(record.check_id.as_str()).or_insert_with(|| {
            groups.push(ConfigGroup {
                check_id: record.check_id.clone(),
                severity: record.severity,
                title: record.title.clone(),
                description: record.description.clone(),
                remediation: record.remediation.clone(),
                affected_resources: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].affected_resources.push(ResourceRef {
            namespace: record.namespace.clone(),
            resource: record.resource.clone(),
        });
    }

    groups.sort_by_key(|g| g.severity.rank());
    Ok(groups)
}

/// Group both flat sequences into the final report structure.
pub fn aggregate(flat: &FlatReport) -> Result<GroupedReport> {
    Ok(GroupedReport {
        vulnerabilities: group_vulnerabilities(&flat.vulnerabilities)?,
        config_issues: group_config_issues(&flat.config_issues)?,
    })
}
