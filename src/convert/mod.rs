//! HTML conversion for Word documents.
//!
//! This module provides the document-to-HTML traversal. Each node of the
//! document model is wrapped in an [`HtmlPath`](crate::html::HtmlPath)
//! decided per node kind, the style mappers in [`styles`] contribute CSS
//! and wrapper elements, and the resulting node tree is simplified (merging
//! adjacent mergeable wrappers) and written out as markup text.
//!
//! # Quick Start
//!
//! ```rust
//! use longan::convert::ToHtml;
//! use longan::document::{Document, BlockElement, InlineElement, Paragraph, Run};
//!
//! let mut run = Run::new(vec![InlineElement::Text("air".into())]);
//! run.color = Some("#FF0000".into());
//! let doc = Document::new(vec![BlockElement::Paragraph(Paragraph::new(vec![
//!     InlineElement::Run(run),
//! ]))]);
//!
//! let html = doc.to_html()?;
//! assert_eq!(html, "<p><font color=\"#FF0000\">air</font></p>");
//! # Ok::<(), longan::Error>(())
//! ```
//!
//! # Architecture
//!
//! - [`ToHtml`] trait: entry point for types that can be converted to HTML
//! - [`HtmlOptions`]: configuration for conversion behavior
//! - [`styles`]: the style-to-CSS mapping engine

// Module declarations
pub mod styles;

// Re-export public API
pub use styles::{
    width_declaration, with_alignment_indent_and_spacing, with_background_color_and_font_style,
    with_borders, with_numbering,
};

use crate::common::Result;
use crate::document::{
    BlockElement, BreakType, Document, InlineElement, Paragraph, Run, Table, TableCell, TableRow,
    VerticalAlignment,
};
use crate::html::{Attributes, HtmlElement, HtmlNode, HtmlPath, simplify, write_html};

/// Configuration options for HTML conversion.
///
/// # Examples
///
/// ```rust
/// use longan::convert::HtmlOptions;
///
/// let options = HtmlOptions::new().with_ignore_empty_paragraphs(false);
/// assert!(!options.ignore_empty_paragraphs);
/// ```
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Whether paragraphs without content are dropped from the output
    pub ignore_empty_paragraphs: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            ignore_empty_paragraphs: true,
        }
    }
}

impl HtmlOptions {
    /// Create a new `HtmlOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether paragraphs without content are dropped.
    #[inline]
    pub fn with_ignore_empty_paragraphs(mut self, ignore: bool) -> Self {
        self.ignore_empty_paragraphs = ignore;
        self
    }
}

/// Core trait for types that can be converted to HTML.
///
/// Implemented for [`Document`] and its constituent block elements.
pub trait ToHtml {
    /// Convert this item to HTML with default options.
    fn to_html(&self) -> Result<String> {
        self.to_html_with_options(&HtmlOptions::default())
    }

    /// Convert this item to HTML with custom options.
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String>;
}

impl ToHtml for Document {
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String> {
        let converter = DocumentConverter { options };
        Ok(write_html(&simplify(
            converter.convert_blocks(&self.children),
        )))
    }
}

impl ToHtml for Paragraph {
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String> {
        let converter = DocumentConverter { options };
        Ok(write_html(&simplify(converter.convert_paragraph(self))))
    }
}

impl ToHtml for Table {
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String> {
        let converter = DocumentConverter { options };
        Ok(write_html(&simplify(converter.convert_table(self))))
    }
}

/// The conversion traversal. Stateless apart from the options; safe to
/// call repeatedly with fresh inputs.
struct DocumentConverter<'a> {
    options: &'a HtmlOptions,
}

impl DocumentConverter<'_> {
    fn convert_blocks(&self, blocks: &[BlockElement]) -> Vec<HtmlNode> {
        blocks
            .iter()
            .flat_map(|block| self.convert_block(block))
            .collect()
    }

    fn convert_block(&self, block: &BlockElement) -> Vec<HtmlNode> {
        match block {
            BlockElement::Paragraph(paragraph) => self.convert_paragraph(paragraph),
            BlockElement::Table(table) => self.convert_table(table),
        }
    }

    fn convert_paragraph(&self, paragraph: &Paragraph) -> Vec<HtmlNode> {
        let path = self.paragraph_path(paragraph);
        let mut children = Vec::new();
        if !self.options.ignore_empty_paragraphs {
            children.push(HtmlNode::ForceWrite);
        }
        children.extend(self.convert_inlines(&paragraph.children));
        path.wrap(children)
    }

    /// Decide the wrapper path for a paragraph: a fresh `<p>`, or a
    /// mergeable list container with a fresh `<li>` for numbered
    /// paragraphs, then let the style mappers contribute.
    fn paragraph_path(&self, paragraph: &Paragraph) -> HtmlPath {
        let base = match &paragraph.numbering {
            Some(numbering) => {
                let list_tag = if numbering.ordered { "ol" } else { "ul" };
                let template = HtmlPath::new(vec![
                    HtmlElement::new(list_tag),
                    HtmlElement::new("li").fresh(),
                ]);
                with_numbering(&template, paragraph)
            },
            None => HtmlPath::top_level("p"),
        };
        with_alignment_indent_and_spacing(&base, paragraph)
    }

    fn convert_inlines(&self, inlines: &[InlineElement]) -> Vec<HtmlNode> {
        inlines
            .iter()
            .flat_map(|inline| self.convert_inline(inline))
            .collect()
    }

    fn convert_inline(&self, inline: &InlineElement) -> Vec<HtmlNode> {
        match inline {
            InlineElement::Run(run) => self.convert_run(run),
            InlineElement::Text(text) => vec![HtmlNode::text(text.clone())],
            InlineElement::Tab => vec![HtmlNode::text("\t")],
            InlineElement::Break(BreakType::Line) => {
                vec![HtmlNode::element(HtmlElement::new("br").fresh(), vec![])]
            },
            // Page and column breaks have no HTML counterpart
            InlineElement::Break(_) => vec![],
        }
    }

    fn convert_run(&self, run: &Run) -> Vec<HtmlNode> {
        let mut wrappers: Vec<HtmlElement> = Vec::new();
        if run.is_strikethrough {
            wrappers.push(HtmlElement::new("s"));
        }
        match run.vertical_alignment {
            VerticalAlignment::Superscript => wrappers.push(HtmlElement::new("sup")),
            VerticalAlignment::Subscript => wrappers.push(HtmlElement::new("sub")),
            VerticalAlignment::Baseline => {},
        }
        if run.is_italic {
            wrappers.push(HtmlElement::new("em"));
        }
        if run.is_bold {
            wrappers.push(HtmlElement::new("strong"));
        }
        with_background_color_and_font_style(&mut wrappers, run);

        let mut nodes = self.convert_inlines(&run.children);
        // Earlier wrappers end up innermost
        for wrapper in &wrappers {
            nodes = vec![HtmlNode::element(wrapper.clone(), nodes)];
        }
        nodes
    }

    fn convert_table(&self, table: &Table) -> Vec<HtmlNode> {
        let mut style = String::from("border-collapse: collapse;");
        if let Some(declaration) = width_declaration(table.width, table.width_unit) {
            style.push_str(&declaration);
        }
        let tag = HtmlElement::new("table")
            .fresh()
            .with_attribute("style", style);
        let rows = table
            .children
            .iter()
            .map(|row| self.convert_row(row))
            .collect();
        vec![HtmlNode::element(tag, rows)]
    }

    fn convert_row(&self, row: &TableRow) -> HtmlNode {
        let cells = row
            .children
            .iter()
            .map(|cell| self.convert_cell(cell, row.is_header))
            .collect();
        HtmlNode::element(HtmlElement::new("tr").fresh(), cells)
    }

    fn convert_cell(&self, cell: &TableCell, is_header: bool) -> HtmlNode {
        let tag_name = if is_header { "th" } else { "td" };
        let mut attributes = Attributes::new();
        if cell.col_span != 1 {
            attributes.set("colspan", cell.col_span.to_string());
        }
        if cell.row_span != 1 {
            attributes.set("rowspan", cell.row_span.to_string());
        }
        // Borders first; the width declaration appends to whatever they set
        with_borders(cell, &mut attributes);
        if let Some(declaration) = width_declaration(cell.width.value, cell.width.unit) {
            let style = match attributes.get("style") {
                Some(existing) => format!("{existing}{declaration}"),
                None => declaration,
            };
            attributes.set("style", style);
        }

        let mut children = vec![HtmlNode::ForceWrite];
        children.extend(self.convert_blocks(&cell.children));
        HtmlNode::element(
            HtmlElement::new(tag_name).fresh().with_attributes(attributes),
            children,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{
        Alignment, Border, CellWidth, LineRule, NumberingProperties, WidthUnit,
    };

    fn text_run(text: &str) -> InlineElement {
        InlineElement::Run(Run::new(vec![InlineElement::Text(text.to_string())]))
    }

    fn paragraph_of_text(text: &str) -> Paragraph {
        Paragraph::new(vec![text_run(text)])
    }

    fn doc(children: Vec<BlockElement>) -> Document {
        Document::new(children)
    }

    #[test]
    fn converts_alignment_indent_and_spacing() {
        let mut right = paragraph_of_text("alignment right");
        right.alignment = Some(Alignment::Right);

        let mut center = paragraph_of_text("alignment center");
        center.alignment = Some(Alignment::Center);

        let mut justify = paragraph_of_text("alignment justify Text");
        justify.alignment = Some(Alignment::Both);

        let mut first_line = Paragraph::new(vec![
            text_run("first line indent"),
            InlineElement::Run(Run::new(vec![
                InlineElement::Break(BreakType::Line),
                InlineElement::Text("second line without indent".to_string()),
            ])),
        ]);
        first_line.indent.first_line = Some(1134);

        let mut hanging = Paragraph::new(vec![
            text_run("hanging indent. first line without indent"),
            InlineElement::Run(Run::new(vec![
                InlineElement::Break(BreakType::Line),
                InlineElement::Text("second line with indent".to_string()),
            ])),
        ]);
        hanging.indent.hanging = Some(1134);
        hanging.indent.start = Some(1134);

        let mut both_margins = paragraph_of_text("paragraph indent left and right");
        both_margins.indent.start = Some(1134);
        both_margins.indent.end = Some(2268);

        let mut line_multiple = paragraph_of_text("spacing line rule multiple (3)");
        line_multiple.indent.end = Some(2268);
        line_multiple.spacing.line = Some(720);

        let mut line_exact = paragraph_of_text("spacing line rule exactly (24pt)");
        line_exact.indent.end = Some(2268);
        line_exact.spacing.line = Some(480);
        line_exact.spacing.line_rule = Some(LineRule::Exactly);

        let mut line_at_least = paragraph_of_text("spacing line rule at least (12pt)");
        line_at_least.indent.end = Some(2268);
        line_at_least.spacing.line = Some(240);
        line_at_least.spacing.line_rule = Some(LineRule::AtLeast);

        let mut before_after = paragraph_of_text("spacing before and after (42pt)");
        before_after.indent.end = Some(2268);
        before_after.spacing.before = Some(840);
        before_after.spacing.after = Some(840);

        let document = doc(vec![
            BlockElement::Paragraph(paragraph_of_text("default alignment left")),
            BlockElement::Paragraph(right),
            BlockElement::Paragraph(center),
            BlockElement::Paragraph(justify),
            BlockElement::Paragraph(first_line),
            BlockElement::Paragraph(hanging),
            BlockElement::Paragraph(both_margins),
            BlockElement::Paragraph(line_multiple),
            BlockElement::Paragraph(line_exact),
            BlockElement::Paragraph(line_at_least),
            BlockElement::Paragraph(before_after),
        ]);

        assert_eq!(
            document.to_html().unwrap(),
            "<p>default alignment left</p>\
             <p style=\"text-align: right;\">alignment right</p>\
             <p style=\"text-align: center;\">alignment center</p>\
             <p style=\"text-align: justify;\">alignment justify Text</p>\
             <p style=\"text-indent: 56.7pt;\">first line indent<br />second line without indent</p>\
             <p style=\"padding-left: 56.7pt;text-indent: -56.7pt;margin-left: 56.7pt;\">hanging indent. first line without indent<br />second line with indent</p>\
             <p style=\"margin-left: 56.7pt;margin-right: 113.4pt;\">paragraph indent left and right</p>\
             <p style=\"margin-right: 113.4pt;line-height: 3;\">spacing line rule multiple (3)</p>\
             <p style=\"margin-right: 113.4pt;line-height: 24px;\">spacing line rule exactly (24pt)</p>\
             <p style=\"margin-right: 113.4pt;line-height: 12px;\">spacing line rule at least (12pt)</p>\
             <p style=\"margin-right: 113.4pt;margin-top: 42pt;margin-bottom: 42pt;\">spacing before and after (42pt)</p>"
        );
    }

    fn numbered_paragraph(text: &str, format: &str) -> BlockElement {
        let mut paragraph = paragraph_of_text(text);
        paragraph.numbering = Some(NumberingProperties {
            level: Some(0),
            ordered: true,
            format: Some(format.to_string()),
        });
        BlockElement::Paragraph(paragraph)
    }

    #[test]
    fn numbered_paragraphs_become_typed_ordered_lists() {
        let document = doc(vec![
            numbered_paragraph("Decimal A", "decimal"),
            numbered_paragraph("Decimal B", "decimal"),
            numbered_paragraph("Decimal C", "decimal"),
            numbered_paragraph("Upper Roman A", "upperRoman"),
            numbered_paragraph("Upper Roman B", "upperRoman"),
            numbered_paragraph("Lower Letter A", "lowerLetter"),
        ]);

        assert_eq!(
            document.to_html().unwrap(),
            "<ol type=\"1\"><li>Decimal A</li><li>Decimal B</li><li>Decimal C</li></ol>\
             <ol type=\"I\"><li>Upper Roman A</li><li>Upper Roman B</li></ol>\
             <ol type=\"a\"><li>Lower Letter A</li></ol>"
        );
    }

    #[test]
    fn unknown_numbering_formats_produce_untyped_lists() {
        let document = doc(vec![
            numbered_paragraph("first", "chicago"),
            numbered_paragraph("second", "chicago"),
        ]);
        assert_eq!(
            document.to_html().unwrap(),
            "<ol><li>first</li><li>second</li></ol>"
        );
    }

    #[test]
    fn unordered_numbering_becomes_a_bulleted_list() {
        let mut paragraph = paragraph_of_text("bullet");
        paragraph.numbering = Some(NumberingProperties {
            level: Some(0),
            ordered: false,
            format: Some("bullet".to_string()),
        });
        let document = doc(vec![BlockElement::Paragraph(paragraph)]);
        assert_eq!(document.to_html().unwrap(), "<ul><li>bullet</li></ul>");
    }

    #[test]
    fn converts_run_color_background_and_fonts() {
        let mut highlighted = Run::new(vec![InlineElement::Text("Walking".to_string())]);
        highlighted.highlight = Some("yellow".to_string());

        let mut sized = Run::new(vec![InlineElement::Text("on ".to_string())]);
        sized.font_size = Some("28".to_string());

        let mut familied = Run::new(vec![InlineElement::Text("imported".to_string())]);
        familied.font = Some("Times New Roman".to_string());

        let mut colored = Run::new(vec![InlineElement::Text("air".to_string())]);
        colored.color = Some("#FF0000".to_string());

        let paragraph = Paragraph::new(vec![
            InlineElement::Run(highlighted),
            text_run(" "),
            InlineElement::Run(sized),
            InlineElement::Run(familied),
            text_run(" "),
            InlineElement::Run(colored),
        ]);

        assert_eq!(
            paragraph.to_html().unwrap(),
            "<p><span style=\"background-color:yellow\">Walking</span> \
             <span style=\"font-size:28pt\">on </span>\
             <span style=\"font-family:Times New Roman\">imported</span> \
             <font color=\"#FF0000\">air</font></p>"
        );
    }

    #[test]
    fn adjacent_runs_with_identical_color_share_one_wrapper() {
        let mut first = Run::new(vec![InlineElement::Text("stop".to_string())]);
        first.color = Some("#FF0000".to_string());
        let mut second = Run::new(vec![InlineElement::Text(" sign".to_string())]);
        second.color = Some("#FF0000".to_string());

        let paragraph = Paragraph::new(vec![
            InlineElement::Run(first),
            InlineElement::Run(second),
        ]);
        assert_eq!(
            paragraph.to_html().unwrap(),
            "<p><font color=\"#FF0000\">stop sign</font></p>"
        );
    }

    #[test]
    fn bold_italic_runs_nest_strong_outside_em() {
        let mut run = Run::new(vec![InlineElement::Text("both".to_string())]);
        run.is_bold = true;
        run.is_italic = true;
        let paragraph = Paragraph::new(vec![InlineElement::Run(run)]);
        assert_eq!(
            paragraph.to_html().unwrap(),
            "<p><strong><em>both</em></strong></p>"
        );
    }

    #[test]
    fn superscript_runs_are_wrapped_in_sup() {
        let mut run = Run::new(vec![InlineElement::Text("2".to_string())]);
        run.vertical_alignment = VerticalAlignment::Superscript;
        let paragraph = Paragraph::new(vec![text_run("x"), InlineElement::Run(run)]);
        assert_eq!(paragraph.to_html().unwrap(), "<p>x<sup>2</sup></p>");
    }

    #[test]
    fn tabs_render_as_tab_characters() {
        let paragraph = Paragraph::new(vec![InlineElement::Run(Run::new(vec![
            InlineElement::Text("a".to_string()),
            InlineElement::Tab,
            InlineElement::Text("b".to_string()),
        ]))]);
        assert_eq!(paragraph.to_html().unwrap(), "<p>a\tb</p>");
    }

    #[test]
    fn page_breaks_are_dropped() {
        let paragraph = Paragraph::new(vec![
            text_run("before"),
            InlineElement::Break(BreakType::Page),
            text_run("after"),
        ]);
        assert_eq!(paragraph.to_html().unwrap(), "<p>beforeafter</p>");
    }

    #[test]
    fn empty_paragraphs_are_ignored_by_default() {
        let document = doc(vec![
            BlockElement::Paragraph(Paragraph::new(vec![])),
            BlockElement::Paragraph(paragraph_of_text("content")),
        ]);
        assert_eq!(document.to_html().unwrap(), "<p>content</p>");
    }

    #[test]
    fn empty_paragraphs_can_be_kept() {
        let document = doc(vec![BlockElement::Paragraph(Paragraph::new(vec![]))]);
        let options = HtmlOptions::new().with_ignore_empty_paragraphs(false);
        assert_eq!(document.to_html_with_options(&options).unwrap(), "<p></p>");
    }

    fn bordered_cell(text: &str, borders: crate::document::CellBorders) -> TableCell {
        let mut cell = TableCell::new(vec![BlockElement::Paragraph(paragraph_of_text(text))]);
        cell.borders = borders;
        cell.width = CellWidth {
            value: Some(4621),
            unit: Some(WidthUnit::Dxa),
        };
        cell
    }

    fn border(line_type: &str, size: Option<&str>, color: Option<&str>) -> Border {
        Border {
            line_type: Some(line_type.to_string()),
            size: size.map(str::to_owned),
            space: None,
            color: color.map(str::to_owned),
        }
    }

    #[test]
    fn formatted_tables_convert_with_borders_and_widths() {
        use crate::document::CellBorders;

        let top_left = bordered_cell(
            "Top left",
            CellBorders {
                top: Some(border("nil", None, None)),
                bottom: Some(border("single", Some("48"), Some("FFC000"))),
                left: Some(border("dotted", Some("24"), Some("C0504D"))),
                right: Some(border("double", Some("4"), Some("000000"))),
            },
        );
        let top_right = bordered_cell(
            "Top right",
            CellBorders {
                top: None,
                bottom: Some(border("single", Some("4"), None)),
                left: Some(border("double", Some("4"), Some("000000"))),
                right: None,
            },
        );
        let bottom_left = bordered_cell(
            "Bottom left",
            CellBorders {
                top: Some(border("single", Some("48"), Some("FFC000"))),
                bottom: None,
                left: None,
                right: None,
            },
        );
        let bottom_right = bordered_cell(
            "Bottom right",
            CellBorders {
                top: None,
                bottom: Some(border("nil", None, None)),
                left: None,
                right: Some(border("single", Some("48"), Some("C0504D"))),
            },
        );

        let table = Table::new(vec![
            TableRow::new(vec![top_left, top_right]),
            TableRow::new(vec![bottom_left, bottom_right]),
        ]);

        assert_eq!(
            table.to_html().unwrap(),
            "<table style=\"border-collapse: collapse;\">\
             <tr><td style=\"border-top-style:none; border-bottom-style:solid; border-bottom-width:6pt; border-bottom-color:#FFC000; border-left-style:dotted; border-left-width:3pt; border-left-color:#C0504D; border-right-style:double; border-right-width:0.5pt; border-right-color:#000000; width: 231.05pt;\"><p>Top left</p></td>\
             <td style=\"border-bottom-style:solid; border-bottom-width:0.5pt; border-left-style:double; border-left-width:0.5pt; border-left-color:#000000; width: 231.05pt;\"><p>Top right</p></td></tr>\
             <tr><td style=\"border-top-style:solid; border-top-width:6pt; border-top-color:#FFC000; width: 231.05pt;\"><p>Bottom left</p></td>\
             <td style=\"border-bottom-style:none; border-right-style:solid; border-right-width:6pt; border-right-color:#C0504D; width: 231.05pt;\"><p>Bottom right</p></td></tr>\
             </table>"
        );
    }

    fn plain_cell(text: &str) -> TableCell {
        TableCell::new(vec![BlockElement::Paragraph(paragraph_of_text(text))])
    }

    fn two_by_two(first_cell: TableCell) -> Table {
        Table::new(vec![
            TableRow::new(vec![first_cell, plain_cell("Top right")]),
            TableRow::new(vec![plain_cell("Bottom left"), plain_cell("Bottom right")]),
        ])
    }

    #[test]
    fn cell_width_mapping() {
        let cases: [(CellWidth, &str); 4] = [
            (
                CellWidth {
                    value: Some(100),
                    unit: Some(WidthUnit::Dxa),
                },
                " style=\"width: 5pt;\"",
            ),
            (
                CellWidth {
                    value: Some(2000),
                    unit: Some(WidthUnit::Pct),
                },
                " style=\"width: 40%;\"",
            ),
            (
                CellWidth {
                    value: None,
                    unit: Some(WidthUnit::Auto),
                },
                "",
            ),
            (
                CellWidth {
                    value: None,
                    unit: Some(WidthUnit::Nil),
                },
                "",
            ),
        ];

        for (width, expected_style) in cases {
            let mut cell = plain_cell("Top left");
            cell.width = width;
            let table = two_by_two(cell);
            assert_eq!(
                table.to_html().unwrap(),
                format!(
                    "<table style=\"border-collapse: collapse;\">\
                     <tr><td{expected_style}><p>Top left</p></td><td><p>Top right</p></td></tr>\
                     <tr><td><p>Bottom left</p></td><td><p>Bottom right</p></td></tr>\
                     </table>"
                )
            );
        }
    }

    #[test]
    fn table_width_mapping() {
        let cases: [(Option<i64>, Option<WidthUnit>, &str); 4] = [
            (Some(100), Some(WidthUnit::Dxa), "width: 5pt;"),
            (Some(2000), Some(WidthUnit::Pct), "width: 40%;"),
            (None, Some(WidthUnit::Auto), ""),
            (None, Some(WidthUnit::Nil), ""),
        ];

        for (value, unit, expected_width) in cases {
            let mut table = two_by_two(plain_cell("Top left"));
            table.width = value;
            table.width_unit = unit;
            assert_eq!(
                table.to_html().unwrap(),
                format!(
                    "<table style=\"border-collapse: collapse;{expected_width}\">\
                     <tr><td><p>Top left</p></td><td><p>Top right</p></td></tr>\
                     <tr><td><p>Bottom left</p></td><td><p>Bottom right</p></td></tr>\
                     </table>"
                )
            );
        }
    }

    #[test]
    fn header_rows_use_th_cells() {
        let mut header = TableRow::new(vec![plain_cell("Name")]);
        header.is_header = true;
        let table = Table::new(vec![header, TableRow::new(vec![plain_cell("Ada")])]);
        assert_eq!(
            table.to_html().unwrap(),
            "<table style=\"border-collapse: collapse;\">\
             <tr><th><p>Name</p></th></tr><tr><td><p>Ada</p></td></tr></table>"
        );
    }

    #[test]
    fn spans_emit_colspan_and_rowspan_attributes() {
        let mut cell = plain_cell("wide");
        cell.col_span = 2;
        cell.row_span = 3;
        let table = Table::new(vec![TableRow::new(vec![cell])]);
        assert_eq!(
            table.to_html().unwrap(),
            "<table style=\"border-collapse: collapse;\">\
             <tr><td colspan=\"2\" rowspan=\"3\"><p>wide</p></td></tr></table>"
        );
    }

    #[test]
    fn empty_cells_still_render() {
        let table = Table::new(vec![TableRow::new(vec![TableCell::new(vec![])])]);
        assert_eq!(
            table.to_html().unwrap(),
            "<table style=\"border-collapse: collapse;\"><tr><td></td></tr></table>"
        );
    }

    #[test]
    fn tables_and_paragraphs_interleave() {
        let document = doc(vec![
            BlockElement::Paragraph(paragraph_of_text("Above")),
            BlockElement::Table(two_by_two(plain_cell("Top left"))),
            BlockElement::Paragraph(paragraph_of_text("Below")),
        ]);
        let html = document.to_html().unwrap();
        assert!(html.starts_with("<p>Above</p><table"));
        assert!(html.ends_with("</table><p>Below</p>"));
    }
}
