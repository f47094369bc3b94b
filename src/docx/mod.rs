//! Reading document model fields from raw OOXML markup.
//!
//! This module provides a lightweight element tree over WordprocessingML
//! fragments ([`element::XmlElement`]) and the reader functions that pull
//! paragraph spacing, indentation, run formatting, and table cell borders
//! and widths out of it ([`reader`]).
//!
//! Opening the surrounding `.docx` package is the host's concern; the
//! readers here operate on already-extracted markup elements.

// Submodule declarations
pub mod element;
pub mod reader;

// Re-export public API
pub use element::{XmlElement, XmlNode, parse_fragment};
pub use reader::{
    read_alignment, read_paragraph_indent, read_paragraph_spacing, run_with_properties,
    table_cell_with_borders,
};
