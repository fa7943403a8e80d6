//! Output formats and C string escaping.

use clap::ValueEnum;
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;

/// Default variable name for the source-array format.
pub const DEFAULT_ARRAY_NAME: &str = "test_strings";

/// How generated literals are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One literal per line
    #[default]
    #[value(name = "lines")]
    Lines,
    /// C array of string literals
    #[value(name = "source-array")]
    SourceArray,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Lines => f.write_str("lines"),
            OutputFormat::SourceArray => f.write_str("source-array"),
        }
    }
}

/// Escape a string for use inside a C double-quoted literal.
///
/// Only backslash and double quote are escaped. Borrows when there is
/// nothing to escape.
pub fn escape_c_string(s: &str) -> Cow<'_, str> {
    if !s.contains(|c: char| c == '\\' || c == '"') {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Whether `name` is a valid C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
