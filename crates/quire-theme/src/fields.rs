//! Table-driven resolution of the paragraph fields.
//!
//! Each row of [`FIELDS`] names a JSON key, the literal reported when the key
//! falls back, and a pair of functions moving the value between the JSON
//! object and [`ThemeConfig`]. Resolution never fails: a bad value is replaced
//! by the field default and described by a [`FieldIssue`].

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::config::ThemeConfig;
use crate::keys;
use crate::style::{LineBreakMode, TextAlignment, UnknownLiteral, WritingDirection};

/// Why a field fell back to its default.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldIssue {
    /// The key is absent from the paragraph object.
    Missing,
    /// The value has the wrong JSON type.
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    /// The value is a string but not an accepted literal.
    UnknownLiteral { value: String },
    /// The value is a number below zero.
    Negative { value: f64 },
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::Missing => f.write_str("missing"),
            FieldIssue::WrongType { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            FieldIssue::UnknownLiteral { value } => write!(f, "unknown value [{value}]"),
            FieldIssue::Negative { value } => write!(f, "negative value [{value}]"),
        }
    }
}

/// One field that was replaced by its default.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWarning {
    pub key: &'static str,
    pub issue: FieldIssue,
    /// The default that was substituted, as it would appear in a theme.
    pub fallback: &'static str,
}

impl FieldWarning {
    pub fn is_missing(&self) -> bool {
        self.issue == FieldIssue::Missing
    }
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "paragraph {}: {}, assuming [{}]",
            self.key, self.issue, self.fallback
        )
    }
}

pub(crate) struct FieldDef {
    pub key: &'static str,
    pub fallback: &'static str,
    /// Stores the resolved value, returning the issue if it fell back.
    pub apply: fn(&mut ThemeConfig, Option<&Value>) -> Option<FieldIssue>,
    pub read: fn(&ThemeConfig) -> Value,
}

const ZERO: &str = "0.0";

pub(crate) const FIELDS: &[FieldDef] = &[
    FieldDef {
        key: keys::ALIGNMENT,
        fallback: TextAlignment::Natural.as_str(),
        apply: |config, value| store(&mut config.alignment, resolve_literal(value)),
        read: |config| config.alignment.as_str().into(),
    },
    FieldDef {
        key: keys::FIRST_LINE_HEAD_INDENT,
        fallback: ZERO,
        apply: |config, value| store(&mut config.first_line_head_indent, resolve_length(value)),
        read: |config| config.first_line_head_indent.into(),
    },
    FieldDef {
        key: keys::HEAD_INDENT,
        fallback: ZERO,
        apply: |config, value| store(&mut config.head_indent, resolve_length(value)),
        read: |config| config.head_indent.into(),
    },
    FieldDef {
        key: keys::TAIL_INDENT,
        fallback: ZERO,
        apply: |config, value| store(&mut config.tail_indent, resolve_length(value)),
        read: |config| config.tail_indent.into(),
    },
    FieldDef {
        key: keys::LINE_BREAK_MODE,
        fallback: LineBreakMode::WordWrapping.as_str(),
        apply: |config, value| store(&mut config.line_break_mode, resolve_literal(value)),
        read: |config| config.line_break_mode.as_str().into(),
    },
    FieldDef {
        key: keys::MAXIMUM_LINE_HEIGHT,
        fallback: ZERO,
        apply: |config, value| store(&mut config.maximum_line_height, resolve_length(value)),
        read: |config| config.maximum_line_height.into(),
    },
    FieldDef {
        key: keys::MINIMUM_LINE_HEIGHT,
        fallback: ZERO,
        apply: |config, value| store(&mut config.minimum_line_height, resolve_length(value)),
        read: |config| config.minimum_line_height.into(),
    },
    FieldDef {
        key: keys::LINE_HEIGHT_MULTIPLE,
        fallback: ZERO,
        apply: |config, value| store(&mut config.line_height_multiple, resolve_length(value)),
        read: |config| config.line_height_multiple.into(),
    },
    FieldDef {
        key: keys::LINE_SPACING,
        fallback: ZERO,
        apply: |config, value| store(&mut config.line_spacing, resolve_length(value)),
        read: |config| config.line_spacing.into(),
    },
    FieldDef {
        key: keys::PARAGRAPH_SPACING,
        fallback: ZERO,
        apply: |config, value| store(&mut config.paragraph_spacing, resolve_length(value)),
        read: |config| config.paragraph_spacing.into(),
    },
    FieldDef {
        key: keys::PARAGRAPH_SPACING_BEFORE,
        fallback: ZERO,
        apply: |config, value| store(&mut config.paragraph_spacing_before, resolve_length(value)),
        read: |config| config.paragraph_spacing_before.into(),
    },
    FieldDef {
        key: keys::WRITING_DIRECTION,
        fallback: WritingDirection::Natural.as_str(),
        apply: |config, value| store(&mut config.writing_direction, resolve_literal(value)),
        read: |config| config.writing_direction.as_str().into(),
    },
];

fn store<T>(slot: &mut T, (value, issue): (T, Option<FieldIssue>)) -> Option<FieldIssue> {
    *slot = value;
    issue
}

/// Resolve an enum field from its string literal.
fn resolve_literal<T>(value: Option<&Value>) -> (T, Option<FieldIssue>)
where
    T: FromStr<Err = UnknownLiteral> + Default,
{
    match value {
        None => (T::default(), Some(FieldIssue::Missing)),
        Some(Value::String(s)) => match s.parse() {
            Ok(parsed) => (parsed, None),
            Err(UnknownLiteral { value, .. }) => {
                (T::default(), Some(FieldIssue::UnknownLiteral { value }))
            }
        },
        Some(other) => (
            T::default(),
            Some(FieldIssue::WrongType {
                expected: "string",
                found: json_type_name(other),
            }),
        ),
    }
}

/// Resolve a non-negative length. Integers and floats are both accepted.
fn resolve_length(value: Option<&Value>) -> (f64, Option<FieldIssue>) {
    match value {
        None => (0.0, Some(FieldIssue::Missing)),
        Some(v) => match v.as_f64() {
            Some(n) if n < 0.0 => (0.0, Some(FieldIssue::Negative { value: n })),
            // -0.0 is stored as 0.0
            Some(n) if n == 0.0 => (0.0, None),
            Some(n) => (n, None),
            None => (
                0.0,
                Some(FieldIssue::WrongType {
                    expected: "number",
                    found: json_type_name(v),
                }),
            ),
        },
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
