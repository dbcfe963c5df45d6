//! Document renderers for the grouped report.
//!
//! Rendering is an injected capability: the pipeline hands a
//! [`GroupedReport`] to a [`Renderer`] and writes the returned bytes. No
//! grouping or sorting logic lives on this side of the boundary.

pub mod html;
pub mod json;
pub mod pdf;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use pdf::PdfEngine;

use crate::error::{ReportError, Result};
use crate::model::GroupedReport;

pub trait Renderer {
    fn render(&self, report: &GroupedReport) -> Result<Vec<u8>>;
}

/// Built-in HTML template variants, selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Template {
    /// Full finding cards with descriptions and remediation.
    #[default]
    Default,
    /// One table row per finding group.
    Compact,
}

impl Template {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(Template::Default),
            "compact" => Ok(Template::Compact),
            other => Err(ReportError::UnknownTemplate(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Default => "default",
            Template::Compact => "compact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_from_name() {
        assert_eq!(Template::from_name("default").unwrap(), Template::Default);
        assert_eq!(Template::from_name("compact").unwrap(), Template::Compact);
    }

    #[test]
    fn test_template_from_name_unknown() {
        let err = Template::from_name("glossy").unwrap_err();
        assert!(matches!(err, ReportError::UnknownTemplate(_)));
    }

    #[test]
    fn test_template_default() {
        assert_eq!(Template::default(), Template::Default);
        assert_eq!(Template::Default.as_str(), "default");
    }
}
