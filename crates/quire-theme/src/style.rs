use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string that is not one of the accepted literals for a style enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownLiteral {
    pub kind: &'static str,
    pub value: String,
}

/// Horizontal alignment of the lines in a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    Justified,
    /// Follows the script's writing direction.
    #[default]
    Natural,
}

impl TextAlignment {
    pub const ALL: [TextAlignment; 5] = [
        TextAlignment::Left,
        TextAlignment::Center,
        TextAlignment::Right,
        TextAlignment::Justified,
        TextAlignment::Natural,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TextAlignment::Left => "left",
            TextAlignment::Center => "center",
            TextAlignment::Right => "right",
            TextAlignment::Justified => "justified",
            TextAlignment::Natural => "natural",
        }
    }
}

impl FromStr for TextAlignment {
    type Err = UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alignment| alignment.as_str() == s)
            .ok_or_else(|| UnknownLiteral {
                kind: "alignment",
                value: s.to_string(),
            })
    }
}

/// Where a line may be broken when it does not fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineBreakMode {
    /// Break at word boundaries.
    #[default]
    WordWrapping,
    /// Break between any two characters.
    CharacterWrapping,
}

impl LineBreakMode {
    pub const ALL: [LineBreakMode; 2] = [LineBreakMode::WordWrapping, LineBreakMode::CharacterWrapping];

    pub const fn as_str(self) -> &'static str {
        match self {
            LineBreakMode::WordWrapping => "wordWrapping",
            LineBreakMode::CharacterWrapping => "characterWrapping",
        }
    }
}

impl FromStr for LineBreakMode {
    type Err = UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownLiteral {
                kind: "line break mode",
                value: s.to_string(),
            })
    }
}

/// Base writing direction of a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WritingDirection {
    /// Determined from the text content.
    #[default]
    Natural,
    LeftToRight,
    RightToLeft,
}

impl WritingDirection {
    pub const ALL: [WritingDirection; 3] = [
        WritingDirection::Natural,
        WritingDirection::LeftToRight,
        WritingDirection::RightToLeft,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            WritingDirection::Natural => "natural",
            WritingDirection::LeftToRight => "leftToRight",
            WritingDirection::RightToLeft => "rightToLeft",
        }
    }
}

impl FromStr for WritingDirection {
    type Err = UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or_else(|| UnknownLiteral {
                kind: "writing direction",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for TextAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LineBreakMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WritingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

