//! Indented plain-text listing of the index.

use crate::model::*;
use crate::render::Renderer;
use anyhow::Result;
use std::fmt::Write;

pub struct TreeRenderer;

impl Renderer for TreeRenderer {
    fn render(&self, index: &ModuleIndex) -> Result<String> {
        let mut out = String::new();
        for (module, types) in index {
            writeln!(out, "{}", module)?;
            for (type_name, fields) in types {
                writeln!(out, "  {}", type_name)?;
                for (name, entry) in fields {
                    writeln!(out, "    {}", field_line(name, &entry.field))?;
                    for (key, value) in &entry.meta {
                        writeln!(out, "      {} = {}", key, value)?;
                    }
                }
            }
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        "tree"
    }
}

fn field_line(name: &str, info: &FieldInfo) -> String {
    match info.integer_bounds {
        Some((lo, hi)) => format!("{}: {} ({}..{})", name, info.declared_type, lo, hi),
        None => format!("{}: {}", name, info.declared_type),
    }
}
