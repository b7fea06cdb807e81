//! Version module parsing
//!
//! An engine checkout carries its version as a small script of top-level
//! assignments at the repository root:
//!
//! ```text
//! short_name = "godot"
//! major = 4
//! minor = 3
//! patch = 0
//! status = "stable"
//! ```
//!
//! Only simple `name = literal` lines are understood. Everything else
//! (imports, indented code, augmented assignments) is skipped, and a later
//! assignment to the same name wins.

use crate::error::{RecordError, Result};
use crate::version::VersionRecord;
use std::collections::HashMap;
use std::fmt;

/// Right-hand side of a module assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(String),
    Bool(bool),
    None,
    /// Any expression that is not a plain literal, kept as written
    Raw(String),
}

impl Value {
    fn parse(text: &str) -> Self {
        match text {
            "True" => return Value::Bool(true),
            "False" => return Value::Bool(false),
            "None" => return Value::None,
            _ => {}
        }

        if let Some(s) = parse_string_literal(text) {
            return Value::Str(s);
        }
        if let Some(n) = parse_int_literal(text) {
            return Value::Int(n);
        }
        Value::Raw(text.to_string())
    }

    /// Value as a version component, if it is an integer that fits
    pub fn as_component(&self) -> Option<u32> {
        match self {
            Value::Int(n) => u32::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Source-like rendering, used in diagnostics
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => format!("{:?}", s),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::None => f.write_str("None"),
            Value::Raw(raw) => f.write_str(raw),
        }
    }
}

/// Top-level assignments of a version module
#[derive(Debug, Clone, Default)]
pub struct ModuleAssignments {
    values: HashMap<String, Value>,
}

impl ModuleAssignments {
    pub fn parse(content: &str) -> Self {
        let mut values = HashMap::new();

        for (lineno, line) in content.lines().enumerate() {
            let Some((name, value)) = parse_assignment(line) else {
                continue;
            };
            tracing::trace!("line {}: {} = {:?}", lineno + 1, name, value);
            values.insert(name.to_string(), value);
        }

        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Resolve the assignments into a record
    ///
    /// `major` and `minor` are required; `patch` may be missing or `None`;
    /// a missing `status` becomes the empty string.
    pub fn to_record(&self) -> Result<VersionRecord> {
        let major = self.component("major")?;
        let minor = self.component("minor")?;

        let patch = match self.get("patch") {
            None | Some(Value::None) => None,
            Some(value) => Some(value.as_component().ok_or_else(|| RecordError::InvalidField {
                field: "patch",
                value: value.repr(),
            })?),
        };

        let status = self.get("status").map(Value::to_string).unwrap_or_default();

        Ok(VersionRecord::new(major, minor)
            .with_patch(patch)
            .with_status(status))
    }

    fn component(&self, field: &'static str) -> Result<u32> {
        let value = self.get(field).ok_or(RecordError::MissingField { field })?;
        value
            .as_component()
            .ok_or_else(|| RecordError::InvalidField {
                field,
                value: value.repr(),
            })
    }
}

/// Split a line into `(name, value)` if it is a top-level simple assignment
fn parse_assignment(line: &str) -> Option<(&str, Value)> {
    // Indented lines belong to a block
    if line.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }

    let line = strip_comment(line).trim_end();
    if line.is_empty() {
        return None;
    }

    let (name, rest) = line.split_once('=')?;
    let name = name.trim();
    // `x == 1` is a comparison, not an assignment
    if rest.starts_with('=') || !is_identifier(name) {
        return None;
    }

    let value = rest.trim();
    if value.is_empty() {
        return None;
    }

    Some((name, Value::parse(value)))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Drop a trailing `#` comment that is not inside a string literal
fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (Some(_), '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (None, '"' | '\'') => quote = Some(c),
            (None, '#') => return &line[..idx],
            _ => {}
        }
    }

    line
}

/// Parse a complete single-line string literal, or `None` if `text` is anything else
fn parse_string_literal(text: &str) -> Option<String> {
    let mut chars = text.chars();
    let quote = chars.next().filter(|c| *c == '"' || *c == '\'')?;

    let mut out = String::new();
    let mut closed = false;

    while let Some(c) = chars.next() {
        if closed {
            // Trailing tokens after the closing quote: not a plain literal
            return None;
        }
        match c {
            '\\' => match chars.next()? {
                'n' => out.push('\n'),
                't' => out.push('\t'),
                'r' => out.push('\r'),
                '0' => out.push('\0'),
                c @ ('\\' | '"' | '\'') => out.push(c),
                other => {
                    out.push('\\');
                    out.push(other);
                }
            },
            c if c == quote => closed = true,
            c => out.push(c),
        }
    }

    closed.then_some(out)
}

/// Parse a decimal integer literal with optional sign and `_` separators
fn parse_int_literal(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => match text.strip_prefix('+') {
            Some(rest) => (false, rest.trim_start()),
            None => (false, text),
        },
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '_')
    {
        return None;
    }
    // Python rejects leading zeros on non-zero decimals
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if cleaned.len() > 1 && cleaned.starts_with('0') && cleaned.chars().any(|c| c != '0') {
        return None;
    }

    let value: i64 = cleaned.parse().ok()?;
    Some(if negative { -value } else { value })
}
