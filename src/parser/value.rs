//! Directive value coercion: tuple, quoted text, number, raw text.
//!
//! Coercion never fails; anything unrecognized stays as trimmed text.

use crate::model::Value;
use regex::Regex;
use std::sync::LazyLock;

// Optional leading minus and a decimal point. No exponent, no sign `+`.
static RE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap());

/// Coerce the raw text following a directive key into a [`Value`].
pub fn coerce(raw: &str) -> Value {
    let text = raw.trim();

    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        return match parse_tuple(inner) {
            Some(items) => Value::Tuple(items),
            None => Value::Text(text.to_string()),
        };
    }

    if let Some(inner) = strip_quotes(text) {
        return Value::Text(inner.to_string());
    }

    match parse_number(text) {
        Some(n) => Value::Number(n),
        None => Value::Text(text.to_string()),
    }
}

/// Parse a number in the restricted directive grammar.
pub fn parse_number(text: &str) -> Option<f64> {
    if !RE_NUMBER.is_match(text) {
        return None;
    }
    // Digit runs past f64 range parse to infinity; keep those as text.
    text.parse().ok().filter(|n: &f64| n.is_finite())
}

fn parse_tuple(inner: &str) -> Option<Vec<f64>> {
    inner.split(',').map(|p| parse_number(p.trim())).collect()
}

/// Strip exactly one layer of matching single or double quotes.
fn strip_quotes(text: &str) -> Option<&str> {
    for quote in ['\'', '"'] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return Some(&text[1..text.len() - 1]);
        }
    }
    None
}
