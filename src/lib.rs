//! Longan - A Rust library for converting Word documents to HTML with
//! high-fidelity styling
//!
//! This library turns a parsed Word document model into HTML, preserving
//! the styling Word users actually reach for: paragraph alignment, indent
//! and spacing, ordered-list numbering types, run colors, backgrounds and
//! fonts, and table cell borders and widths.
//!
//! # Features
//!
//! - **Document model**: paragraphs, runs, tables, and cells with their
//!   OOXML formatting fields
//! - **Readers**: extract formatting from raw WordprocessingML elements
//! - **Style mapping engine**: byte-exact CSS generation from formatting
//!   fields
//! - **HTML paths**: nested wrapper tags with merge-aware rendering
//!
//! # Example - Converting a document
//!
//! ```rust
//! use longan::ToHtml;
//! use longan::document::{Document, BlockElement, InlineElement, Paragraph, Run};
//!
//! let mut run = Run::new(vec![InlineElement::Text("Hello".into())]);
//! run.color = Some("#FF0000".into());
//! let doc = Document::new(vec![BlockElement::Paragraph(Paragraph::new(vec![
//!     InlineElement::Run(run),
//! ]))]);
//!
//! assert_eq!(doc.to_html()?, "<p><font color=\"#FF0000\">Hello</font></p>");
//! # Ok::<(), longan::Error>(())
//! ```
//!
//! # Example - Reading formatting from markup
//!
//! ```rust
//! use longan::docx::{parse_fragment, read_paragraph_spacing};
//!
//! let element = parse_fragment(r#"<w:spacing w:line="720" w:lineRule="exactly"/>"#)?;
//! let spacing = read_paragraph_spacing(&element);
//! assert_eq!(spacing.line, Some(720));
//! # Ok::<(), longan::Error>(())
//! ```
//!
//! Opening the `.docx` package, resolving notes and comments, and image
//! extraction are the host application's concern; this crate starts from
//! parsed markup elements and document model values.

/// Common types and utilities shared across the crate
pub mod common;

/// HTML conversion traversal and the style-to-CSS mapping engine
pub mod convert;

/// Semantic document model (paragraphs, runs, tables)
pub mod document;

/// Readers over raw WordprocessingML markup elements
pub mod docx;

/// HTML path model, node tree, and markup writer
pub mod html;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use convert::{HtmlOptions, ToHtml};
pub use document::Document;
