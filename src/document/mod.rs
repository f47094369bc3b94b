//! Semantic document model for Word documents.
//!
//! This module provides the in-memory representation consumed by the HTML
//! conversion traversal: a tree of block elements (paragraphs, tables)
//! containing inline elements (runs, text, tabs, breaks), each carrying the
//! styling fields read from the source markup.
//!
//! All types are plain values: immutable by convention once constructed,
//! created during document reading and consumed once during rendering.
//! Numeric length fields stay in their source units (twips, eighths of a
//! point) until CSS text is produced.
//!
//! # Example
//!
//! ```rust
//! use longan::document::{Document, BlockElement, InlineElement, Paragraph, Run};
//!
//! let run = Run::new(vec![InlineElement::Text("Hello".into())]);
//! let paragraph = Paragraph::new(vec![InlineElement::Run(run)]);
//! let doc = Document::new(vec![BlockElement::Paragraph(paragraph)]);
//! assert_eq!(doc.children.len(), 1);
//! ```

// Submodule declarations
mod element;
mod paragraph;
mod run;
mod table;

// Re-export public API
pub use element::{BlockElement, BreakType, InlineElement};
pub use paragraph::{Alignment, Indent, LineRule, NumberingProperties, Paragraph, Spacing};
pub use run::{Run, VerticalAlignment};
pub use table::{
    Border, BorderSide, CellBorders, CellWidth, Table, TableCell, TableRow, WidthUnit,
};

use serde::{Deserialize, Serialize};

/// A parsed Word document: an ordered sequence of block elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Top-level block elements in document order
    pub children: Vec<BlockElement>,
}

impl Document {
    /// Create a document from its block elements.
    pub fn new(children: Vec<BlockElement>) -> Self {
        Self { children }
    }
}
