//! Pipeline orchestration: load, normalize, aggregate, render, write.

use crate::aggregator::aggregate;
use crate::cli::{Cli, OutputFormat};
use crate::config::{Config, EffectiveConfig};
use crate::error::{ReportError, Result};
use crate::model::{FlatReport, ScanReport};
use crate::normalizer::normalize;
use crate::renderer::{HtmlRenderer, JsonRenderer, PdfEngine, Renderer};
use colored::Colorize;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Run the whole batch: one input, one transform, one document.
pub fn execute(cli: &Cli) -> Result<()> {
    let config = Config::load(input_dir(&cli.input));
    let effective = EffectiveConfig::resolve(cli, &config)?;

    let raw = read_input(&cli.input)?;
    let reports: Vec<ScanReport> =
        serde_json::from_str(&raw).map_err(|e| ReportError::ParseInput {
            path: cli.input.display().to_string(),
            source: e,
        })?;
    info!(reports = reports.len(), "loaded scan reports");

    let flat = normalize(&reports);
    info!(
        vulnerabilities = flat.vulnerabilities.len(),
        config_issues = flat.config_issues.len(),
        "normalized findings"
    );

    if let Some(path) = &cli.emit_flat {
        write_flat(&flat, path)?;
    }

    let grouped = aggregate(&flat)?;
    info!(
        vulnerability_groups = grouped.vulnerabilities.len(),
        config_groups = grouped.config_issues.len(),
        "grouped findings"
    );

    match effective.format {
        OutputFormat::Json => {
            let bytes = JsonRenderer::new().render(&grouped)?;
            write_output(&bytes, &effective.output)?;
        }
        OutputFormat::Html => {
            let bytes = HtmlRenderer::new(effective.template).render(&grouped)?;
            write_output(&bytes, &effective.output)?;
        }
        OutputFormat::Pdf => {
            let html = HtmlRenderer::new(effective.template).render(&grouped)?;
            PdfEngine::new(&effective.pdf_engine).convert(&html, &effective.output)?;
        }
    }

    println!(
        "{} {}",
        "Report written to".green().bold(),
        effective.output.display()
    );
    Ok(())
}

/// Directory to search for a project-level config file. Stdin input has
/// none.
fn input_dir(input: &Path) -> Option<&Path> {
    if input == Path::new("-") {
        None
    } else {
        input.parent().filter(|p| !p.as_os_str().is_empty())
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| ReportError::ReadInput {
                path: "<stdin>".to_string(),
                source: e,
            })?;
        Ok(buf)
    } else {
        fs::read_to_string(path).map_err(|e| ReportError::ReadInput {
            path: path.display().to_string(),
            source: e,
        })
    }
}

fn write_flat(flat: &FlatReport, path: &Path) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(flat)?;
    write_output(&bytes, path)?;
    info!(path = %path.display(), "wrote intermediate flat findings");
    Ok(())
}

fn write_output(bytes: &[u8], path: &Path) -> Result<()> {
    fs::write(path, bytes).map_err(|e| ReportError::WriteOutput {
        path: path.display().to_string(),
        source: e,
    })
}
