//! JSON renderer — the index as nested objects, for tooling integration.

use crate::model::ModuleIndex;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, index: &ModuleIndex) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(index).context("failed to serialize index")?;
        out.push('\n');
        Ok(out)
    }

    fn name(&self) -> &str {
        "json"
    }
}
