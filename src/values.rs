//! Conversion of stored values into display text.
//!
//! Values returned by the data store are text, integers, raw bytes, or
//! nested lists of those. Echoing them back to the user needs plain strings
//! and, like `redis-cli`, double-quoted strings.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::error::{KeylineError, Result};

/// A value as stored in the data store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// UTF-8 text.
    Text(String),
    /// Signed integer reply.
    Integer(i64),
    /// Raw bytes, not necessarily valid UTF-8.
    Binary(Vec<u8>),
    /// Nested list of values.
    List(Vec<Value>),
}

/// Display form of a [`Value`], keeping list structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayText {
    Text(String),
    List(Vec<DisplayText>),
}

/// Text decoding applied to binary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decode {
    Utf8,
}

impl std::str::FromStr for Decode {
    type Err = KeylineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            _ => Err(KeylineError::value(format!(
                "Unsupported encoding: '{s}'. Expected: utf-8"
            ))),
        }
    }
}

/// Decodes bytes as UTF-8, replacing invalid sequences.
pub fn native_str(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Renders bytes as printable text.
///
/// Printable ASCII is kept, backslashes are doubled, `\t`, `\n` and `\r`
/// become escapes and every other byte is written as `\xNN`. Quote
/// characters are left as they are.
pub fn literal_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            0x20..=0x7e => out.push(char::from(b)),
            _ => {
                let _ = write!(out, "\\x{b:02x}");
            }
        }
    }
    out
}

/// Converts a value into display text.
///
/// Binary values are decoded with `decode` when given, otherwise rendered
/// with [`literal_bytes`]. List elements never use `decode`.
pub fn ensure_str(value: &Value, decode: Option<Decode>) -> Result<DisplayText> {
    match value {
        Value::Text(s) => Ok(DisplayText::Text(s.clone())),
        Value::Integer(n) => Ok(DisplayText::Text(n.to_string())),
        Value::Binary(bytes) => match decode {
            Some(Decode::Utf8) => std::str::from_utf8(bytes)
                .map(|s| DisplayText::Text(s.to_string()))
                .map_err(|e| KeylineError::value(format!("Cannot decode value as utf-8: {e}"))),
            None => Ok(DisplayText::Text(literal_bytes(bytes))),
        },
        Value::List(items) => items
            .iter()
            .map(|item| ensure_str(item, None))
            .collect::<Result<Vec<_>>>()
            .map(DisplayText::List),
    }
}

/// Wraps `s` in double quotes, escaping inner double quotes.
pub fn quote_str(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\\\""))
}

/// Double-quotes display text the way `redis-cli` prints strings.
pub fn double_quotes(text: &DisplayText) -> DisplayText {
    match text {
        DisplayText::Text(s) => DisplayText::Text(quote_str(s)),
        DisplayText::List(items) => DisplayText::List(items.iter().map(double_quotes).collect()),
    }
}
