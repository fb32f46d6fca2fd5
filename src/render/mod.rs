//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod tree;

use crate::model::ModuleIndex;
use anyhow::{anyhow, Result};

/// Trait for rendering a module index into a specific output format.
pub trait Renderer {
    fn render(&self, index: &ModuleIndex) -> Result<String>;
    fn name(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer)),
        "tree" => Ok(Box::new(tree::TreeRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use json or tree", format)),
    }
}
