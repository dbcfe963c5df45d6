//! Configuration layer.
//!
//! Settings resolve in three layers: built-in defaults, an optional config
//! file, and CLI flags, each overriding the one below. The config file is
//! discovered next to the input file first, then in the user config
//! directory.

use crate::cli::{Cli, OutputFormat};
use crate::error::Result;
use crate::renderer::Template;
use crate::renderer::pdf::DEFAULT_PDF_ENGINE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {path}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {path}")]
    ParseYaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse JSON config: {path}")]
    ParseJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse TOML config: {path}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unsupported config format: {0} (extension '{1}')")]
    UnsupportedFormat(String, String),
}

/// File-level configuration: every field optional so CLI flags and
/// defaults can fill the gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: Option<OutputFormat>,
    pub template: Option<String>,
    pub pdf_engine: Option<String>,
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file, dispatching on its extension.
    pub fn from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseYaml {
                path: path.display().to_string(),
                source: e,
            }),
            "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
                path: path.display().to_string(),
                source: e,
            }),
            "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseToml {
                path: path.display().to_string(),
                source: e,
            }),
            _ => Err(ConfigError::UnsupportedFormat(
                path.display().to_string(),
                ext,
            )),
        }
    }

    /// Load configuration from the directory of the input file or the
    /// global config.
    ///
    /// Search order:
    /// 1. `.trivy-report.yaml` / `.yml` / `.json` / `.toml` next to the input
    /// 2. `~/.config/trivy-report/config.yaml`
    /// 3. Default configuration
    ///
    /// A candidate that exists but fails to parse is skipped with a
    /// warning.
    pub fn load(input_dir: Option<&Path>) -> Self {
        if let Some(dir) = input_dir {
            for filename in &[
                ".trivy-report.yaml",
                ".trivy-report.yml",
                ".trivy-report.json",
                ".trivy-report.toml",
            ] {
                let path = dir.join(filename);
                if path.exists() {
                    match Self::from_file(&path) {
                        Ok(config) => return config,
                        Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable config"),
                    }
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("trivy-report").join("config.yaml");
            if global_config.exists() {
                match Self::from_file(&global_config) {
                    Ok(config) => return config,
                    Err(e) => {
                        warn!(path = %global_config.display(), error = %e, "skipping unreadable config")
                    }
                }
            }
        }

        Self::default()
    }
}

/// Fully resolved settings after merging CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub format: OutputFormat,
    pub template: Template,
    pub pdf_engine: String,
    pub output: PathBuf,
}

impl EffectiveConfig {
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let format = cli.format.or(config.format).unwrap_or_default();

        let template_name = cli
            .template
            .as_deref()
            .or(config.template.as_deref())
            .unwrap_or("default");
        let template = Template::from_name(template_name)?;

        let pdf_engine = cli
            .pdf_engine
            .clone()
            .or_else(|| config.pdf_engine.clone())
            .unwrap_or_else(|| DEFAULT_PDF_ENGINE.to_string());

        let output = cli
            .output
            .clone()
            .or_else(|| config.output.clone())
            .unwrap_or_else(|| PathBuf::from(format!("security-report.{}", format.extension())));

        Ok(Self {
            format,
            template,
            pdf_engine,
            output,
        })
    }
}
