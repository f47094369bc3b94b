//! Block and inline element nodes of the document tree.
use crate::document::{Paragraph, Run, Table};
use serde::{Deserialize, Serialize};

/// A block-level element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockElement {
    /// A paragraph (`<w:p>`)
    Paragraph(Paragraph),
    /// A table (`<w:tbl>`)
    Table(Table),
}

/// An inline element inside a paragraph or run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InlineElement {
    /// A formatted text run (`<w:r>`)
    Run(Run),
    /// Literal text (`<w:t>`)
    Text(String),
    /// A tab character (`<w:tab>`)
    Tab,
    /// A line, page, or column break (`<w:br>`)
    Break(BreakType),
}

/// The kind of break a `<w:br>` element represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreakType {
    /// Line break within a paragraph
    Line,
    /// Page break
    Page,
    /// Column break
    Column,
}

impl BreakType {
    /// Parse a break type from its XML attribute value.
    ///
    /// A missing `w:type` attribute means a line break.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "textWrapping" => Some(Self::Line),
            "page" => Some(Self::Page),
            "column" => Some(Self::Column),
            _ => None,
        }
    }
}

impl Default for BreakType {
    #[inline]
    fn default() -> Self {
        Self::Line
    }
}
