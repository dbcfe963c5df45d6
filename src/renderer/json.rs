use crate::error::Result;
use crate::model::GroupedReport;
use crate::renderer::Renderer;

/// Renders the grouped report as pretty-printed JSON (the final persisted
/// format).
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, report: &GroupedReport) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(report)?)
    }
}
