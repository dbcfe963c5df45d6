//! Adapter around an external HTML-to-PDF converter.
//!
//! The engine is an opaque command (weasyprint by default) that reads HTML
//! on stdin and writes the PDF to the path given as its last argument.
//! Nothing on the grouping side depends on it.

use crate::error::{ReportError, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

pub const DEFAULT_PDF_ENGINE: &str = "weasyprint";

pub struct PdfEngine {
    command: String,
}

impl PdfEngine {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Pipe the rendered HTML through the converter, producing a PDF at
    /// `output`. A failed conversion removes any partial output file.
    pub fn convert(&self, html: &[u8], output: &Path) -> Result<()> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or_else(|| ReportError::PdfEngine {
            command: self.command.clone(),
            message: "empty engine command".to_string(),
        })?;

        debug!(engine = %self.command, output = %output.display(), "invoking PDF engine");

        let mut child = Command::new(program)
            .args(parts)
            .arg("-")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ReportError::PdfEngine {
                command: self.command.clone(),
                message: e.to_string(),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A write error here usually means the engine exited early;
            // the exit status below is what decides success.
            let _ = stdin.write_all(html);
        }

        let result = child.wait_with_output().map_err(|e| ReportError::PdfEngine {
            command: self.command.clone(),
            message: e.to_string(),
        })?;

        if !result.status.success() {
            // All-or-nothing: never leave a partial document behind.
            let _ = std::fs::remove_file(output);
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ReportError::PdfEngine {
                command: self.command.clone(),
                message: format!("{} ({})", stderr.trim(), result.status),
            });
        }

        Ok(())
    }
}
