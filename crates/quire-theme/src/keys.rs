//! JSON key names used in theme documents.

/// Top-level object holding the default styles.
pub const DEFAULTS: &str = "defaults";
/// Object under [`DEFAULTS`] holding the paragraph style.
pub const PARAGRAPH: &str = "paragraph";

// Paragraph style fields
pub const ALIGNMENT: &str = "alignment";
pub const FIRST_LINE_HEAD_INDENT: &str = "firstLineHeadIndent";
pub const HEAD_INDENT: &str = "headIndent";
pub const TAIL_INDENT: &str = "tailIndent";
pub const LINE_BREAK_MODE: &str = "lineBreakMode";
pub const MAXIMUM_LINE_HEIGHT: &str = "maximumLineHeight";
pub const MINIMUM_LINE_HEIGHT: &str = "minimumLineHeight";
pub const LINE_HEIGHT_MULTIPLE: &str = "lineHeightMultiple";
pub const LINE_SPACING: &str = "lineSpacing";
pub const PARAGRAPH_SPACING: &str = "paragraphSpacing";
pub const PARAGRAPH_SPACING_BEFORE: &str = "paragraphSpacingBefore";
pub const WRITING_DIRECTION: &str = "writingDirection";
