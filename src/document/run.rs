//! Text run structure and run-level formatting properties.
use crate::document::InlineElement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A text run in a paragraph.
///
/// Runs carry the character-level formatting read from `<w:rPr>`. Color and
/// shading values are stored display-ready (`#RRGGBB`); `highlight` keeps
/// the raw token (`yellow`). `font_size` is an open string: numeric values
/// gain a `pt` suffix at CSS time, anything else passes through unsuffixed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Run {
    /// Ordered inline children (text, tabs, breaks)
    pub children: Vec<InlineElement>,
    /// Character style identifier from `<w:rStyle>`, if any
    pub style_id: Option<String>,
    /// Resolved style display name, if any
    pub style_name: Option<String>,
    /// Bold (`<w:b>`)
    pub is_bold: bool,
    /// Italic (`<w:i>`)
    pub is_italic: bool,
    /// Strikethrough (`<w:strike>`)
    pub is_strikethrough: bool,
    /// Baseline, superscript, or subscript (`<w:vertAlign>`)
    pub vertical_alignment: VerticalAlignment,
    /// Font family name (`<w:rFonts>`)
    pub font: Option<String>,
    /// Font size in points, as text (`<w:sz>` is stored in half-points)
    pub font_size: Option<String>,
    /// Text color as a CSS value, e.g. `#FF0000` (`<w:color>`)
    pub color: Option<String>,
    /// Highlight color token, e.g. `yellow` (`<w:highlight>`)
    pub highlight: Option<String>,
    /// Shading fill as a CSS value, e.g. `#FFFF00` (`<w:shd>`)
    pub shading: Option<String>,
}

impl Run {
    /// Create a run from its inline children, with no formatting.
    pub fn new(children: Vec<InlineElement>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }
}

/// Vertical position of run text relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum VerticalAlignment {
    Baseline = 0,
    Superscript = 1,
    Subscript = 2,
}

impl VerticalAlignment {
    /// Convert the vertical alignment to its XML attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Superscript => "superscript",
            Self::Subscript => "subscript",
        }
    }

    /// Parse a vertical alignment from its XML attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "baseline" => Some(Self::Baseline),
            "superscript" => Some(Self::Superscript),
            "subscript" => Some(Self::Subscript),
            _ => None,
        }
    }
}

impl Default for VerticalAlignment {
    #[inline]
    fn default() -> Self {
        Self::Baseline
    }
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}
