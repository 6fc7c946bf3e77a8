use serde::Serialize;
use serde_json::{Map, Value};

use crate::fields::FIELDS;
use crate::keys;
use crate::style::{LineBreakMode, TextAlignment, WritingDirection};

/// Validated paragraph style read from a theme's `defaults.paragraph` object.
///
/// A config is only built by the loader (or [`Default`]) and is read-only
/// afterwards. Every length is finite and non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub(crate) alignment: TextAlignment,
    pub(crate) first_line_head_indent: f64,
    pub(crate) head_indent: f64,
    pub(crate) tail_indent: f64,
    pub(crate) line_break_mode: LineBreakMode,
    pub(crate) maximum_line_height: f64,
    pub(crate) minimum_line_height: f64,
    pub(crate) line_height_multiple: f64,
    pub(crate) line_spacing: f64,
    pub(crate) paragraph_spacing: f64,
    pub(crate) paragraph_spacing_before: f64,
    pub(crate) writing_direction: WritingDirection,
}

impl ThemeConfig {
    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    pub fn first_line_head_indent(&self) -> f64 {
        self.first_line_head_indent
    }

    pub fn head_indent(&self) -> f64 {
        self.head_indent
    }

    pub fn tail_indent(&self) -> f64 {
        self.tail_indent
    }

    pub fn line_break_mode(&self) -> LineBreakMode {
        self.line_break_mode
    }

    pub fn maximum_line_height(&self) -> f64 {
        self.maximum_line_height
    }

    pub fn minimum_line_height(&self) -> f64 {
        self.minimum_line_height
    }

    pub fn line_height_multiple(&self) -> f64 {
        self.line_height_multiple
    }

    pub fn line_spacing(&self) -> f64 {
        self.line_spacing
    }

    pub fn paragraph_spacing(&self) -> f64 {
        self.paragraph_spacing
    }

    pub fn paragraph_spacing_before(&self) -> f64 {
        self.paragraph_spacing_before
    }

    pub fn writing_direction(&self) -> WritingDirection {
        self.writing_direction
    }

    /// Build the theme document this config was read from, with every field
    /// spelled out.
    ///
    /// Loading the returned value yields an equal config.
    pub fn to_value(&self) -> Value {
        let paragraph: Map<String, Value> = FIELDS
            .iter()
            .map(|field| (field.key.to_string(), (field.read)(self)))
            .collect();

        let mut defaults = Map::new();
        defaults.insert(keys::PARAGRAPH.to_string(), Value::Object(paragraph));

        let mut document = Map::new();
        document.insert(keys::DEFAULTS.to_string(), Value::Object(defaults));
        Value::Object(document)
    }
}
