//! Parser module — scanner, directive values and field declarations.

pub mod field;
pub mod scan;
pub mod value;

use crate::model::Scan;

/// Scan one source text.
pub fn parse_source(content: &str) -> Scan {
    let lines: Vec<&str> = content.lines().collect();
    scan::scan(&lines)
}
