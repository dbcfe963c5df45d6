use crate::error::Result;
use crate::model::{ConfigGroup, GroupedReport, ResourceRef, VulnerabilityGroup};
use crate::renderer::{Renderer, Template};
use chrono::Utc;

/// Renders the grouped report as a self-contained HTML document.
pub struct HtmlRenderer {
    template: Template,
}

impl HtmlRenderer {
    pub fn new(template: Template) -> Self {
        Self { template }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(Template::Default)
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, report: &GroupedReport) -> Result<Vec<u8>> {
        let body = match self.template {
            Template::Default => render_default(report),
            Template::Compact => render_compact(report),
        };

        let generated_at = Utc::now().format("%Y-%m-%d %H:%M UTC");
        let critical = report.vulnerabilities_at_rank(0);

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Security Scan Report</title>
    <style>
        :root {{
            --critical: #dc2626;
            --high: #ea580c;
            --medium: #ca8a04;
            --low: #2563eb;
            --unknown: #6b7280;
        }}

        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.5;
            color: #1f2937;
            background: #fff;
            padding: 2rem;
        }}

        .header {{
            border-bottom: 2px solid #e5e7eb;
            padding-bottom: 1rem;
            margin-bottom: 1.5rem;
        }}

        .header h1 {{
            font-size: 1.6rem;
            margin-bottom: 0.25rem;
        }}

        .header-meta {{
            color: #6b7280;
            font-size: 0.85rem;
        }}

        h2 {{
            font-size: 1.2rem;
            margin: 1.5rem 0 0.75rem;
        }}

        .summary {{
            color: #374151;
            font-size: 0.9rem;
            margin-bottom: 1rem;
        }}

        .finding {{
            border: 1px solid #e5e7eb;
            border-left-width: 4px;
            border-radius: 6px;
            padding: 0.75rem 1rem;
            margin-bottom: 0.75rem;
            page-break-inside: avoid;
        }}

        .severity-critical {{ border-left-color: var(--critical); }}
        .severity-high {{ border-left-color: var(--high); }}
        .severity-medium {{ border-left-color: var(--medium); }}
        .severity-low {{ border-left-color: var(--low); }}
        .severity-unknown {{ border-left-color: var(--unknown); }}

        .finding-header {{
            display: flex;
            gap: 0.5rem;
            align-items: baseline;
            margin-bottom: 0.25rem;
        }}

        .finding-id {{
            font-family: monospace;
            font-weight: 600;
        }}

        .severity-badge {{
            font-size: 0.7rem;
            font-weight: 700;
            padding: 0.1rem 0.4rem;
            border-radius: 4px;
            color: #fff;
        }}

        .severity-badge.critical {{ background: var(--critical); }}
        .severity-badge.high {{ background: var(--high); }}
        .severity-badge.medium {{ background: var(--medium); }}
        .severity-badge.low {{ background: var(--low); }}
        .severity-badge.unknown {{ background: var(--unknown); }}

        .finding-detail {{
            font-size: 0.85rem;
            color: #374151;
            margin-bottom: 0.25rem;
        }}

        .resources {{
            font-size: 0.8rem;
            color: #6b7280;
        }}

        .resources code {{
            background: #f3f4f6;
            padding: 0.05rem 0.3rem;
            border-radius: 3px;
        }}

        table {{
            width: 100%;
            border-collapse: collapse;
            font-size: 0.85rem;
        }}

        th, td {{
            text-align: left;
            padding: 0.4rem 0.6rem;
            border-bottom: 1px solid #e5e7eb;
        }}

        th {{
            background: #f9fafb;
        }}

        .empty {{
            color: #6b7280;
            font-style: italic;
        }}
    </style>
</head>
<body>
    <div class="header">
        <h1>Security Scan Report</h1>
        <div class="header-meta">Generated {generated_at} &middot; {vuln_count} vulnerabilities ({critical} critical) &middot; {config_count} configuration issues</div>
    </div>
{body}
</body>
</html>
"#,
            vuln_count = report.vulnerabilities.len(),
            config_count = report.config_issues.len(),
        );

        Ok(html.into_bytes())
    }
}

fn render_default(report: &GroupedReport) -> String {
    let vulns: String = if report.vulnerabilities.is_empty() {
        r#"    <p class="empty">No vulnerabilities found.</p>"#.to_string()
    } else {
        report.vulnerabilities.iter().map(vuln_card).collect()
    };

    let configs: String = if report.config_issues.is_empty() {
        r#"    <p class="empty">No configuration issues found.</p>"#.to_string()
    } else {
        report.config_issues.iter().map(config_card).collect()
    };

    format!(
        "    <h2>Vulnerabilities</h2>\n{vulns}\n    <h2>Configuration Issues</h2>\n{configs}"
    )
}

fn vuln_card(group: &VulnerabilityGroup) -> String {
    let severity_class = group.severity.as_str().to_lowercase();

    let mut package_line = String::new();
    if let Some(purl) = &group.package_purl {
        package_line.push_str(&format!("Package: <code>{}</code>", html_escape(purl)));
    }
    if let Some(installed) = &group.installed_version {
        if !package_line.is_empty() {
            package_line.push_str(" &middot; ");
        }
        package_line.push_str(&format!("Installed: {}", html_escape(installed)));
    }
    if let Some(fixed) = &group.fixed_version {
        if !package_line.is_empty() {
            package_line.push_str(" &middot; ");
        }
        package_line.push_str(&format!("Fixed in: {}", html_escape(fixed)));
    }
    let package_html = if package_line.is_empty() {
        String::new()
    } else {
        format!("        <div class=\"finding-detail\">{package_line}</div>\n")
    };

    format!(
        r#"    <div class="finding severity-{severity_class}">
        <div class="finding-header">
            <span class="finding-id">{id}</span>
            <span class="severity-badge {severity_class}">{severity}</span>
        </div>
        <div class="finding-detail">{title}</div>
{package_html}        <div class="resources">Affected: {resources}</div>
    </div>
"#,
        id = html_escape(&group.vulnerability_id),
        severity = group.severity,
        title = html_escape(&group.title),
        resources = resource_list(&group.affected_resources),
    )
}

fn config_card(group: &ConfigGroup) -> String {
    let severity_class = group.severity.as_str().to_lowercase();
    format!(
        r#"    <div class="finding severity-{severity_class}">
        <div class="finding-header">
            <span class="finding-id">{id}</span>
            <span class="severity-badge {severity_class}">{severity}</span>
        </div>
        <div class="finding-detail"><strong>{title}</strong></div>
        <div class="finding-detail">{description}</div>
        <div class="finding-detail">Remediation: {remediation}</div>
        <div class="resources">Affected: {resources}</div>
    </div>
"#,
        id = html_escape(&group.check_id),
        severity = group.severity,
        title = html_escape(&group.title),
        description = html_escape(&group.description),
        remediation = html_escape(&group.remediation),
        resources = resource_list(&group.affected_resources),
    )
}

fn render_compact(report: &GroupedReport) -> String {
    let vuln_rows: String = report
        .vulnerabilities
        .iter()
        .map(|g| {
            format!(
                "        <tr><td><code>{}</code></td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                html_escape(&g.vulnerability_id),
                g.severity,
                html_escape(&g.title),
                g.affected_resources.len(),
            )
        })
        .collect();

    let config_rows: String = report
        .config_issues
        .iter()
        .map(|g| {
            format!(
                "        <tr><td><code>{}</code></td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                html_escape(&g.check_id),
                g.severity,
                html_escape(&g.title),
                g.affected_resources.len(),
            )
        })
        .collect();

    format!(
        r#"    <h2>Vulnerabilities</h2>
    <table>
        <tr><th>ID</th><th>Severity</th><th>Title</th><th>Resources</th></tr>
{vuln_rows}    </table>
    <h2>Configuration Issues</h2>
    <table>
        <tr><th>ID</th><th>Severity</th><th>Title</th><th>Resources</th></tr>
{config_rows}    </table>"#
    )
}

fn resource_list(resources: &[ResourceRef]) -> String {
    resources
        .iter()
        .map(|r| {
            format!(
                "<code>{}/{}</code>",
                html_escape(&r.namespace),
                html_escape(&r.resource)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
