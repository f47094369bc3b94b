//! Paragraph structure and paragraph-level formatting properties.
use crate::document::InlineElement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A paragraph in a Word document.
///
/// Paragraphs contain inline elements (runs, text, tabs, breaks) and carry
/// the paragraph-level formatting read from `<w:pPr>`: alignment, indent,
/// spacing, and numbering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Ordered inline children
    pub children: Vec<InlineElement>,
    /// Style identifier from `<w:pStyle>`, if any
    pub style_id: Option<String>,
    /// Resolved style display name, if any
    pub style_name: Option<String>,
    /// Numbering properties when the paragraph is a list item
    pub numbering: Option<NumberingProperties>,
    /// Paragraph alignment from `<w:jc>`
    pub alignment: Option<Alignment>,
    /// Indentation in twips
    pub indent: Indent,
    /// Inter-paragraph and line spacing in twips
    pub spacing: Spacing,
}

impl Paragraph {
    /// Create a paragraph from its inline children, with no formatting.
    pub fn new(children: Vec<InlineElement>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }
}

/// Paragraph indentation, each field a nullable length in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Indent {
    /// Leading-edge indent (`w:start`/`w:left`)
    pub start: Option<i64>,
    /// Trailing-edge indent (`w:end`/`w:right`)
    pub end: Option<i64>,
    /// Extra indent applied to the first line only (`w:firstLine`)
    pub first_line: Option<i64>,
    /// Hanging indent: first line pulled back by this amount (`w:hanging`)
    pub hanging: Option<i64>,
}

/// Paragraph spacing read from `<w:spacing>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Spacing {
    /// Space before the paragraph, in twips (`w:before`)
    pub before: Option<i64>,
    /// Space after the paragraph, in twips (`w:after`)
    pub after: Option<i64>,
    /// Line spacing value (`w:line`); twips for `AtLeast`/`Exactly`,
    /// 240ths of a line otherwise
    pub line: Option<i64>,
    /// How the `line` value is interpreted (`w:lineRule`)
    pub line_rule: Option<LineRule>,
    /// Whether space before is determined automatically (`w:beforeAutospacing`)
    pub before_autospacing: Option<bool>,
    /// Whether space after is determined automatically (`w:afterAutospacing`)
    pub after_autospacing: Option<bool>,
}

/// Specifies how a line spacing value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LineRule {
    /// The value is a multiplier of single spacing, in 240ths of a line.
    Auto = 0,
    /// The value is a minimum height in twips.
    AtLeast = 1,
    /// The value is an exact height in twips.
    Exactly = 2,
}

impl LineRule {
    /// Convert the line rule to its XML attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::AtLeast => "atLeast",
            Self::Exactly => "exactly",
        }
    }

    /// Parse a line rule from its XML attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Self::Auto),
            "atLeast" => Some(Self::AtLeast),
            "exactly" => Some(Self::Exactly),
            _ => None,
        }
    }

    /// Whether the spacing value is an absolute height rather than a
    /// multiplier.
    #[inline]
    pub const fn is_absolute(self) -> bool {
        matches!(self, Self::AtLeast | Self::Exactly)
    }
}

impl Default for LineRule {
    #[inline]
    fn default() -> Self {
        Self::Auto
    }
}

impl fmt::Display for LineRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}

/// Paragraph alignment options.
///
/// Corresponds to the `<w:jc>` element. `Both` is the OOXML name for
/// justified text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Alignment {
    Left = 0,
    Right = 1,
    Center = 2,
    /// Justified ("both" in OOXML)
    Both = 3,
}

impl Alignment {
    /// Convert the alignment to its XML attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Both => "both",
        }
    }

    /// Parse an alignment from its XML attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "center" => Some(Self::Center),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    /// The `text-align` value for this alignment.
    ///
    /// `Both` maps to `justify`; all other values pass through unchanged.
    #[inline]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Both => "justify",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}

/// Numbering (list) properties of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumberingProperties {
    /// Zero-based list nesting level (`<w:ilvl>`)
    pub level: Option<u32>,
    /// Whether the list is ordered (numbered) rather than bulleted
    pub ordered: bool,
    /// Number format name from the numbering definition (`<w:numFmt>`),
    /// e.g. `decimal` or `upperRoman`. Kept open-ended: unlisted formats
    /// are valid input and simply produce no list `type` attribute.
    pub format: Option<String>,
}
