//! Field declaration lines: `name TYPE (lo..hi),`.

use crate::model::FieldDecl;
use regex::Regex;
use std::sync::LazyLock;

static RE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w[\w-]*)\s+(\w[\w-]*)(?:\s*\((-?[0-9]+)\.\.(-?[0-9]+)\))?,?").unwrap()
});

/// Parse a trimmed field declaration line.
///
/// Returns `None` when the leading name and type tokens are missing. Bounds
/// are only attached to `INTEGER` fields; on other types they are accepted
/// syntactically and discarded.
pub fn parse(line: &str) -> Option<FieldDecl> {
    let caps = RE_FIELD.captures(line)?;

    let declared_type = caps[2].to_string();
    let integer_bounds = match (caps.get(3), caps.get(4)) {
        (Some(lo), Some(hi)) if declared_type == "INTEGER" => {
            match (lo.as_str().parse::<i64>(), hi.as_str().parse::<i64>()) {
                (Ok(lo), Ok(hi)) => Some((lo, hi)),
                _ => None,
            }
        }
        _ => None,
    };

    Some(FieldDecl {
        name: caps[1].to_string(),
        declared_type,
        integer_bounds,
    })
}
