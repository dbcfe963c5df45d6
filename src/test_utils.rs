#[cfg(test)]
pub mod fixtures {
    use crate::model::{
        ConfigGroup, ConfigRecord, GroupedReport, RawCheck, RawVulnerability, ReportPayload,
        ResourceRef, ScanReport, Severity, VulnerabilityGroup, VulnerabilityRecord,
    };

    pub fn raw_vuln(id: &str, severity: Severity, title: &str) -> RawVulnerability {
        RawVulnerability {
            vulnerability_id: id.to_string(),
            severity,
            title: title.to_string(),
            package_purl: None,
            installed_version: None,
            fixed_version: None,
        }
    }

    pub fn raw_check(id: &str, severity: Severity) -> RawCheck {
        RawCheck {
            check_id: id.to_string(),
            severity,
            title: "test check".to_string(),
            description: "test description".to_string(),
            remediation: "test remediation".to_string(),
            success: false,
        }
    }

    pub fn vuln_report(namespace: &str, name: &str, vulns: Vec<RawVulnerability>) -> ScanReport {
        ScanReport {
            namespace: namespace.to_string(),
            name: name.to_string(),
            report: ReportPayload {
                vulnerabilities: Some(vulns),
                checks: None,
            },
        }
    }

    pub fn check_report(namespace: &str, name: &str, checks: Vec<RawCheck>) -> ScanReport {
        ScanReport {
            namespace: namespace.to_string(),
            name: name.to_string(),
            report: ReportPayload {
                vulnerabilities: None,
                checks: Some(checks),
            },
        }
    }

    pub fn empty_report(namespace: &str, name: &str) -> ScanReport {
        ScanReport {
            namespace: namespace.to_string(),
            name: name.to_string(),
            report: ReportPayload::default(),
        }
    }

    pub fn vuln_record(
        id: &str,
        severity: Severity,
        namespace: &str,
        resource: &str,
    ) -> VulnerabilityRecord {
        VulnerabilityRecord {
            namespace: namespace.to_string(),
            resource: resource.to_string(),
            vulnerability_id: id.to_string(),
            severity,
            title: "test title".to_string(),
            package_purl: None,
            installed_version: None,
            fixed_version: None,
        }
    }

    pub fn config_record(
        id: &str,
        severity: Severity,
        namespace: &str,
        resource: &str,
    ) -> ConfigRecord {
        ConfigRecord {
            namespace: namespace.to_string(),
            resource: resource.to_string(),
            check_id: id.to_string(),
            severity,
            title: "test check".to_string(),
            description: "test description".to_string(),
            remediation: "test remediation".to_string(),
            success: false,
        }
    }

    pub fn vuln_group(
        id: &str,
        severity: Severity,
        affected: &[(&str, &str)],
    ) -> VulnerabilityGroup {
        VulnerabilityGroup {
            vulnerability_id: id.to_string(),
            severity,
            title: "test title".to_string(),
            package_purl: None,
            installed_version: None,
            fixed_version: None,
            affected_resources: resource_refs(affected),
        }
    }

    pub fn config_group(id: &str, severity: Severity, affected: &[(&str, &str)]) -> ConfigGroup {
        ConfigGroup {
            check_id: id.to_string(),
            severity,
            title: "test check".to_string(),
            description: "test description".to_string(),
            remediation: "test remediation".to_string(),
            affected_resources: resource_refs(affected),
        }
    }

    pub fn grouped_report(
        vulnerabilities: Vec<VulnerabilityGroup>,
        config_issues: Vec<ConfigGroup>,
    ) -> GroupedReport {
        GroupedReport {
            vulnerabilities,
            config_issues,
        }
    }

    fn resource_refs(pairs: &[(&str, &str)]) -> Vec<ResourceRef> {
        pairs
            .iter()
            .map(|(namespace, resource)| ResourceRef {
                namespace: namespace.to_string(),
                resource: resource.to_string(),
            })
            .collect()
    }
}
