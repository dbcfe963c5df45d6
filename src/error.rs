//! Error types for trivy-report.

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read input: {path}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scan reports: {path}: {source}")]
    ParseInput {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record from {resource} is missing its {kind}")]
    MissingIdentity {
        kind: &'static str,
        resource: String,
    },

    #[error("Unknown template: {0} (expected 'default' or 'compact')")]
    UnknownTemplate(String),

    #[error("PDF engine '{command}' failed: {message}")]
    PdfEngine { command: String, message: String },

    #[error("Failed to write output: {path}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_identity() {
        let err = ReportError::MissingIdentity {
            kind: "vulnerability ID",
            resource: "default/pod-nginx".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Record from default/pod-nginx is missing its vulnerability ID"
        );
    }

    #[test]
    fn test_error_display_read_input() {
        let err = ReportError::ReadInput {
            path: "/tmp/reports.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read input: /tmp/reports.json");
    }

    #[test]
    fn test_error_display_unknown_template() {
        let err = ReportError::UnknownTemplate("fancy".to_string());
        assert!(err.to_string().contains("fancy"));
    }

    #[test]
    fn test_error_display_pdf_engine() {
        let err = ReportError::PdfEngine {
            command: "weasyprint".to_string(),
            message: "exit status 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "PDF engine 'weasyprint' failed: exit status 1"
        );
    }
}
