//! Normalizer: flattens per-resource scan reports into annotated records.

use crate::model::{ConfigRecord, FlatReport, ScanReport, VulnerabilityRecord};
use tracing::debug;

/// Flatten a sequence of scan reports into the two flat finding lists.
///
/// Each finding is stamped with the namespace and resource name of the
/// report it came from. Output order follows input report order, then
/// finding order within each report. Reports exposing neither a
/// `vulnerabilities` nor a `checks` payload contribute nothing.
pub fn normalize(reports: &[ScanReport]) -> FlatReport {
    let mut flat = FlatReport::default();

    for report in reports {
        if let Some(vulns) = &report.report.vulnerabilities {
            for vuln in vulns {
                flat.vulnerabilities.push(VulnerabilityRecord {
                    namespace: report.namespace.clone(),
                    resource: report.name.clone(),
                    vulnerability_id: vuln.vulnerability_id.clone(),
                    severity: vuln.severity,
                    title: vuln.title.clone(),
                    package_purl: vuln.package_purl.clone(),
                    installed_version: vuln.installed_version.clone(),
                    fixed_version: vuln.fixed_version.clone(),
                });
            }
        } else if let Some(checks) = &report.report.checks {
            for check in checks {
                flat.config_issues.push(ConfigRecord {
                    namespace: report.namespace.clone(),
                    resource: report.name.clone(),
                    check_id: check.check_id.clone(),
                    severity: check.severity,
                    title: check.title.clone(),
                    description: check.description.clone(),
                    remediation: check.remediation.clone(),
                    success: check.success,
                });
            }
        } else {
            debug!(
                namespace = %report.namespace,
                resource = %report.name,
                "report has no recognized payload, skipping"
            );
        }
    }

    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use crate::test_utils::fixtures::{
        check_report, empty_report, raw_check, raw_vuln, vuln_report,
    };

    #[test]
    fn test_normalize_stamps_resource_identity() {
        let reports = vec![vuln_report(
            "default",
            "pod-nginx",
            vec![raw_vuln("CVE-2024-1", Severity::High, "Heap overflow")],
        )];
        let flat = normalize(&reports);

        assert_eq!(flat.vulnerabilities.len(), 1);
        assert!(flat.config_issues.is_empty());
        let record = &flat.vulnerabilities[0];
        assert_eq!(record.namespace, "default");
        assert_eq!(record.resource, "pod-nginx");
        assert_eq!(record.vulnerability_id, "CVE-2024-1");
        assert_eq!(record.severity, Severity::High);
    }

    #[test]
    fn test_normalize_splits_payload_kinds() {
        let reports = vec![
            vuln_report(
                "default",
                "pod-a",
                vec![raw_vuln("CVE-1", Severity::Low, "t")],
            ),
            check_report("kube-system", "ds-proxy", vec![raw_check("KSV001", Severity::Medium)]),
        ];
        let flat = normalize(&reports);

        assert_eq!(flat.vulnerabilities.len(), 1);
        assert_eq!(flat.config_issues.len(), 1);
        assert_eq!(flat.config_issues[0].check_id, "KSV001");
        assert_eq!(flat.config_issues[0].namespace, "kube-system");
    }

    #[test]
    fn test_normalize_skips_unrecognized_payload() {
        let reports = vec![
            empty_report("default", "pod-a"),
            vuln_report(
                "default",
                "pod-b",
                vec![raw_vuln("CVE-1", Severity::Low, "t")],
            ),
        ];
        let flat = normalize(&reports);

        assert_eq!(flat.vulnerabilities.len(), 1);
        assert!(flat.config_issues.is_empty());
    }

    #[test]
    fn test_normalize_preserves_input_order() {
        let reports = vec![
            vuln_report(
                "a",
                "pod-1",
                vec![
                    raw_vuln("CVE-2", Severity::Low, "second"),
                    raw_vuln("CVE-1", Severity::High, "first"),
                ],
            ),
            vuln_report("b", "pod-2", vec![raw_vuln("CVE-3", Severity::Medium, "third")]),
        ];
        let flat = normalize(&reports);

        let ids: Vec<&str> = flat
            .vulnerabilities
            .iter()
            .map(|v| v.vulnerability_id.as_str())
            .collect();
        assert_eq!(ids, vec!["CVE-2", "CVE-1", "CVE-3"]);
    }

    #[test]
    fn test_normalize_empty_input() {
        let flat = normalize(&[]);
        assert!(flat.vulnerabilities.is_empty());
        assert!(flat.config_issues.is_empty());
    }

    #[test]
    fn test_normalize_keeps_optional_fields_absent() {
        let reports = vec![vuln_report(
            "n",
            "r",
            vec![raw_vuln("CVE-1", Severity::High, "t")],
        )];
        let flat = normalize(&reports);
        let record = &flat.vulnerabilities[0];
        assert!(record.package_purl.is_none());
        assert!(record.installed_version.is_none());
        assert!(record.fixed_version.is_none());
    }

    #[test]
    fn test_normalize_carries_success_flag() {
        let mut check = raw_check("KSV002", Severity::Low);
        check.success = true;
        let reports = vec![check_report("n", "r", vec![check])];
        let flat = normalize(&reports);
        assert!(flat.config_issues[0].success);
    }
}
