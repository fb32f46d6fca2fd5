//! Line-by-line state machine over ASN.1 source.
//!
//! Tracks module → type context and, inside a `SEQUENCE { ... }` body,
//! collects `-- [Meta]` annotation blocks up to the field declaration that
//! terminates them. A single forward-only [`Cursor`] is shared between the
//! outer scan and the block collector, so lines consumed by a block are
//! never revisited.

use super::{field, value};
use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_MODULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w[\w-]*)\s+DEFINITIONS\b").unwrap());

static RE_TYPE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w[\w-]*)\s*::=\s*SEQUENCE\s*\{").unwrap());

static RE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--\s*@(\w+)\s+(.*)").unwrap());

const MARKER: &str = "-- [Meta]";
const DIRECTIVE_PREFIX: &str = "-- @";

// -- Cursor -------------------------------------------------------------------

/// Forward-only cursor over source lines.
pub struct Cursor<'a, S: AsRef<str>> {
    lines: &'a [S],
    pos: usize,
}

impl<'a, S: AsRef<str>> Cursor<'a, S> {
    pub fn new(lines: &'a [S]) -> Self {
        Self::at(lines, 0)
    }

    pub fn at(lines: &'a [S], pos: usize) -> Self {
        Cursor {
            lines,
            pos: pos.min(lines.len()),
        }
    }

    /// Next line, trimmed, without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).map(|l| l.as_ref().trim())
    }

    /// Consume and return the next line, trimmed.
    pub fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Index of the next unconsumed line.
    pub fn position(&self) -> usize {
        self.pos
    }
}

// -- Line classification ------------------------------------------------------

/// What a trimmed line means to the scanner.
#[derive(Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Module(&'a str),
    TypeOpen(&'a str),
    TypeClose,
    Marker,
    Other,
}

/// Classify a trimmed line given the current context.
pub fn classify<'a>(line: &'a str, ctx: &Context) -> LineKind<'a> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if let Some(caps) = RE_MODULE.captures(line) {
        return caps.get(1).map_or(LineKind::Other, |m| LineKind::Module(m.as_str()));
    }
    if let Some(caps) = RE_TYPE_OPEN.captures(line) {
        return caps.get(1).map_or(LineKind::Other, |m| LineKind::TypeOpen(m.as_str()));
    }
    if ctx.in_sequence && line == "}" {
        return LineKind::TypeClose;
    }
    if ctx.in_sequence && line.starts_with(MARKER) {
        return LineKind::Marker;
    }
    LineKind::Other
}

// -- Public API ---------------------------------------------------------------

/// Scan a whole source text split into lines.
pub fn scan<S: AsRef<str>>(lines: &[S]) -> Scan {
    scan_from(lines, 0).0
}

/// Scan from `start` to the end of `lines`; returns the scan and the index
/// one past the last consumed line.
pub fn scan_from<S: AsRef<str>>(lines: &[S], start: usize) -> (Scan, usize) {
    let mut cursor = Cursor::at(lines, start);
    let mut ctx = Context::default();
    let mut out = Scan::default();

    while let Some(line) = cursor.advance() {
        match classify(line, &ctx) {
            LineKind::Blank | LineKind::Other => {}
            LineKind::Module(name) => ctx.enter_module(name),
            LineKind::TypeOpen(name) => ctx.open_type(name),
            LineKind::TypeClose => ctx.close_type(),
            LineKind::Marker => {
                // Line numbers are 1-based; the marker was just consumed.
                let marker_line = cursor.position();
                collect_block(&mut cursor, &ctx, marker_line, &mut out);
            }
        }
    }

    let end = cursor.position();
    (out, end)
}

// -- Annotation blocks --------------------------------------------------------

/// Gather directive lines after a marker and resolve the terminating field.
fn collect_block<S: AsRef<str>>(
    cursor: &mut Cursor<'_, S>,
    ctx: &Context,
    marker_line: usize,
    out: &mut Scan,
) {
    let mut meta = Meta::new();

    let terminator = loop {
        let Some(line) = cursor.advance() else {
            out.dropped.push(DroppedBlock {
                line: marker_line,
                reason: DropReason::UnterminatedBlock,
            });
            return;
        };
        if !line.starts_with(DIRECTIVE_PREFIX) {
            break line;
        }
        match parse_directive(line) {
            // Last occurrence of a key wins.
            Some((key, val)) => {
                meta.insert(key.to_string(), val);
            }
            None => out.skipped_directives.push(SkippedDirective {
                line: cursor.position(),
                text: line.to_string(),
            }),
        }
    };

    match field::parse(terminator) {
        Some(decl) => out.records.push(Record {
            module: ctx.module_name().to_string(),
            type_name: ctx.type_name().to_string(),
            field: decl.name.clone(),
            entry: Entry {
                field: FieldInfo::from(decl),
                meta,
            },
        }),
        None => out.dropped.push(DroppedBlock {
            line: marker_line,
            reason: DropReason::InvalidField(terminator.to_string()),
        }),
    }
}

/// Split a `-- @Key value` line into its key and coerced value.
pub fn parse_directive(line: &str) -> Option<(&str, Value)> {
    let caps = RE_DIRECTIVE.captures(line)?;
    let key = caps.get(1)?.as_str();
    let raw = caps.get(2).map_or("", |m| m.as_str());
    Some((key, value::coerce(raw)))
}
