use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pdf,
    Html,
    Json,
}

impl OutputFormat {
    /// File extension used when the output path is not given explicitly.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(
    name = "trivy-report",
    version,
    about = "Generates a grouped security summary from trivy-operator scan reports",
    long_about = "trivy-report reads a JSON dump of trivy-operator vulnerability and \
config-audit reports, groups findings across resources by CVE/check ID, and renders \
a severity-ordered summary document (PDF, HTML, or JSON)."
)]
pub struct Cli {
    /// Scan report JSON to read, or '-' for stdin
    pub input: PathBuf,

    /// Where to write the rendered document
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Built-in template variant for HTML/PDF output (default, compact)
    #[arg(long)]
    pub template: Option<String>,

    /// Also write the intermediate flat findings JSON to this path
    #[arg(long, value_name = "PATH")]
    pub emit_flat: Option<PathBuf>,

    /// External HTML-to-PDF converter command
    #[arg(long, value_name = "CMD")]
    pub pdf_engine: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
