//! Data model for extracted metadata — format-agnostic.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Fallback module name used before any `DEFINITIONS` line is seen.
pub const UNKNOWN_MODULE: &str = "UnknownModule";

/// Fallback type name used outside a `SEQUENCE` body.
pub const UNKNOWN_TYPE: &str = "UnknownType";

/// A coerced directive value.
///
/// Serializes untagged: a number, a string, or an array of numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Tuple(Vec<f64>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "'{}'", s),
            Value::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Directive key → value, keys verbatim from source.
pub type Meta = BTreeMap<String, Value>;

/// A parsed field declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub declared_type: String,
    /// `(lo..hi)`, only kept when the declared type is `INTEGER`.
    pub integer_bounds: Option<(i64, i64)>,
}

/// Field information stored in an index entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    #[serde(rename = "type")]
    pub declared_type: String,
    #[serde(rename = "restrict-to", skip_serializing_if = "Option::is_none")]
    pub integer_bounds: Option<(i64, i64)>,
}

impl From<FieldDecl> for FieldInfo {
    fn from(decl: FieldDecl) -> Self {
        FieldInfo {
            declared_type: decl.declared_type,
            integer_bounds: decl.integer_bounds,
        }
    }
}

/// Leaf of the index: field info plus its annotation directives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub field: FieldInfo,
    pub meta: Meta,
}

/// Field name → entry.
pub type FieldMap = BTreeMap<String, Entry>;

/// Type name → fields.
pub type TypeMap = BTreeMap<String, FieldMap>;

/// Module → type → field → entry.
pub type ModuleIndex = BTreeMap<String, TypeMap>;

/// One scanned `(module, type, field, entry)` tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub module: String,
    pub type_name: String,
    pub field: String,
    pub entry: Entry,
}

/// Lexical context of the scanner.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Context {
    pub module: Option<String>,
    pub type_name: Option<String>,
    pub in_sequence: bool,
}

impl Context {
    pub fn module_name(&self) -> &str {
        self.module.as_deref().unwrap_or(UNKNOWN_MODULE)
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_deref().unwrap_or(UNKNOWN_TYPE)
    }

    pub fn enter_module(&mut self, name: &str) {
        self.module = Some(name.to_string());
    }

    pub fn open_type(&mut self, name: &str) {
        self.type_name = Some(name.to_string());
        self.in_sequence = true;
    }

    /// Leave the current `SEQUENCE` body; the module is kept.
    pub fn close_type(&mut self) {
        self.type_name = None;
        self.in_sequence = false;
    }
}

/// Why an annotation block produced no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// Input ended before a terminating line.
    UnterminatedBlock,
    /// The terminating line is not a field declaration.
    InvalidField(String),
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::UnterminatedBlock => write!(f, "annotation block reaches end of input"),
            DropReason::InvalidField(line) if line.is_empty() => {
                write!(f, "annotation block not followed by a field declaration")
            }
            DropReason::InvalidField(line) => {
                write!(f, "annotation block followed by non-field line: {}", line)
            }
        }
    }
}

/// An annotation block that was discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedBlock {
    /// 1-based line number of the `-- [Meta]` marker.
    pub line: usize,
    pub reason: DropReason,
}

/// A directive line whose key/value grammar failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDirective {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
}

/// Result of scanning one source text.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scan {
    pub records: Vec<Record>,
    pub dropped: Vec<DroppedBlock>,
    pub skipped_directives: Vec<SkippedDirective>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_falls_back_to_unknown_names() {
        let mut ctx = Context::default();
        assert_eq!(ctx.module_name(), "UnknownModule");
        assert_eq!(ctx.type_name(), "UnknownType");

        ctx.enter_module("MyModule");
        ctx.open_type("Telemetry");
        assert_eq!(ctx.module_name(), "MyModule");
        assert_eq!(ctx.type_name(), "Telemetry");
        assert!(ctx.in_sequence);

        ctx.close_type();
        assert_eq!(ctx.module_name(), "MyModule");
        assert_eq!(ctx.type_name(), "UnknownType");
        assert!(!ctx.in_sequence);
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Number(0.1).to_string(), "0.1");
        assert_eq!(Value::Text("m/s".into()).to_string(), "'m/s'");
        assert_eq!(Value::Tuple(vec![-12.8, 12.7]).to_string(), "(-12.8, 12.7)");
    }

    #[test]
    fn entry_serializes_like_index_leaf() {
        let mut meta = Meta::new();
        meta.insert("Scale".into(), Value::Number(0.1));
        meta.insert("Range".into(), Value::Tuple(vec![-12.8, 12.7]));
        let entry = Entry {
            field: FieldInfo {
                declared_type: "INTEGER".into(),
                integer_bounds: Some((-128, 127)),
            },
            meta,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": {"type": "INTEGER", "restrict-to": [-128, 127]},
                "meta": {"Range": [-12.8, 12.7], "Scale": 0.1}
            })
        );
    }

    #[test]
    fn restrict_to_omitted_when_absent() {
        let info = FieldInfo {
            declared_type: "Stat32u".into(),
            integer_bounds: None,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json, serde_json::json!({"type": "Stat32u"}));
    }
}
