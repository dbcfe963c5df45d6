//! trivy-report: groups trivy-operator scan findings across resources and
//! renders a severity-ordered summary document.
//!
//! The pipeline is a one-shot batch of pure transforms: raw scan reports
//! are flattened into per-resource records ([`normalizer`]), grouped by
//! finding identity and sorted by severity ([`aggregator`]), then handed
//! to an injected [`renderer::Renderer`] for document generation.

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod renderer;
pub mod run;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, OutputFormat};
pub use error::{ReportError, Result};
pub use model::{
    ConfigGroup, ConfigRecord, FlatReport, GroupedReport, ResourceRef, ScanReport, Severity,
    VulnerabilityGroup, VulnerabilityRecord,
};
pub use renderer::{HtmlRenderer, JsonRenderer, PdfEngine, Renderer, Template};
