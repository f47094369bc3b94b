//! Readers that extract document model fields from raw markup elements.
//!
//! Each reader takes the relevant property element (`w:spacing`, `w:ind`,
//! `w:jc`, `w:rPr`, `w:tcPr`) and returns plain model data. Missing or
//! malformed attributes read as absent; nothing here fails.
use crate::common::unit::{format_css_number, parse_int_prefix};
use crate::document::{
    Alignment, BlockElement, Border, CellBorders, CellWidth, Indent, InlineElement, LineRule, Run,
    Spacing, TableCell, VerticalAlignment, WidthUnit,
};
use crate::docx::element::XmlElement;

/// Read paragraph spacing from a `<w:spacing>` element.
///
/// # Examples
///
/// ```rust
/// use longan::docx::{parse_fragment, read_paragraph_spacing};
///
/// let element = parse_fragment(r#"<w:spacing w:before="840" w:after="840"/>"#)?;
/// let spacing = read_paragraph_spacing(&element);
/// assert_eq!(spacing.before, Some(840));
/// assert_eq!(spacing.after, Some(840));
/// # Ok::<(), longan::Error>(())
/// ```
pub fn read_paragraph_spacing(element: &XmlElement) -> Spacing {
    Spacing {
        before: int_attribute(element, "w:before"),
        after: int_attribute(element, "w:after"),
        line: int_attribute(element, "w:line"),
        line_rule: element.attribute("w:lineRule").and_then(LineRule::from_xml),
        before_autospacing: on_off_attribute(element, "w:beforeAutospacing"),
        after_autospacing: on_off_attribute(element, "w:afterAutospacing"),
    }
}

/// Read paragraph indentation from a `<w:ind>` element.
///
/// `w:start`/`w:end` take precedence over the older `w:left`/`w:right`
/// names when both are present.
pub fn read_paragraph_indent(element: &XmlElement) -> Indent {
    Indent {
        start: int_attribute(element, "w:start").or_else(|| int_attribute(element, "w:left")),
        end: int_attribute(element, "w:end").or_else(|| int_attribute(element, "w:right")),
        first_line: int_attribute(element, "w:firstLine"),
        hanging: int_attribute(element, "w:hanging"),
    }
}

/// Read paragraph alignment from a `<w:jc>` element.
pub fn read_alignment(element: &XmlElement) -> Option<Alignment> {
    element.attribute("w:val").and_then(Alignment::from_xml)
}

/// Construct a run with the formatting from a `<w:rPr>` element.
///
/// Color and shading fills become display-ready `#RRGGBB` values (the
/// literal `auto` reads as absent); highlight keeps its color token, with
/// `none` reading as absent. Font size is converted from half-points to
/// points.
pub fn run_with_properties(properties: &XmlElement, children: Vec<InlineElement>) -> Run {
    let mut run = Run::new(children);
    run.style_id = value_of(properties, "w:rStyle").map(str::to_owned);
    run.is_bold = read_boolean_element(properties.first("w:b"));
    run.is_italic = read_boolean_element(properties.first("w:i"));
    run.is_strikethrough = read_boolean_element(properties.first("w:strike"));
    run.vertical_alignment = value_of(properties, "w:vertAlign")
        .and_then(VerticalAlignment::from_xml)
        .unwrap_or_default();
    run.font = properties
        .first("w:rFonts")
        .and_then(|fonts| fonts.attribute("w:ascii"))
        .map(str::to_owned);
    run.font_size = value_of(properties, "w:sz")
        .and_then(parse_int_prefix)
        .map(|half_points| format_css_number(half_points as f64 / 2.0));
    run.color = value_of(properties, "w:color")
        .filter(|value| !value.is_empty() && *value != "auto")
        .map(|value| format!("#{value}"));
    run.highlight = value_of(properties, "w:highlight")
        .filter(|value| !value.is_empty() && *value != "none")
        .map(str::to_owned);
    run.shading = properties
        .first("w:shd")
        .and_then(|shd| shd.attribute("w:fill"))
        .filter(|value| !value.is_empty() && *value != "auto")
        .map(|value| format!("#{value}"));
    run
}

/// Construct a table cell with the borders and width from a `<w:tcPr>`
/// element.
///
/// # Examples
///
/// ```rust
/// use longan::docx::{parse_fragment, table_cell_with_borders};
///
/// let properties = parse_fragment(
///     r#"<w:tcPr><w:tcW w:w="100" w:type="dxa"/></w:tcPr>"#,
/// )?;
/// let cell = table_cell_with_borders(&properties, vec![], 1);
/// assert_eq!(cell.width.value, Some(100));
/// # Ok::<(), longan::Error>(())
/// ```
pub fn table_cell_with_borders(
    properties: &XmlElement,
    children: Vec<BlockElement>,
    col_span: u32,
) -> TableCell {
    TableCell {
        children,
        col_span,
        row_span: 1,
        width: read_cell_width(properties.first_or_empty("w:tcW")),
        borders: read_table_cell_borders(properties.first_or_empty("w:tcBorders")),
    }
}

fn read_cell_width(element: &XmlElement) -> CellWidth {
    CellWidth {
        value: int_attribute(element, "w:w"),
        unit: element.attribute("w:type").and_then(WidthUnit::from_xml),
    }
}

fn read_table_cell_borders(element: &XmlElement) -> CellBorders {
    CellBorders {
        top: read_table_cell_border(element.first_or_empty("w:top")),
        bottom: read_table_cell_border(element.first_or_empty("w:bottom")),
        left: read_table_cell_border(element.first_or_empty("w:left")),
        right: read_table_cell_border(element.first_or_empty("w:right")),
    }
}

fn read_table_cell_border(element: &XmlElement) -> Option<Border> {
    let border = Border {
        line_type: element.attribute("w:val").map(str::to_owned),
        size: element.attribute("w:sz").map(str::to_owned),
        space: element.attribute("w:space").map(str::to_owned),
        color: element.attribute("w:color").map(str::to_owned),
    };
    // A side with no attributes at all reads as no border
    (border != Border::default()).then_some(border)
}

fn value_of<'a>(parent: &'a XmlElement, name: &str) -> Option<&'a str> {
    parent.first(name).and_then(|child| child.attribute("w:val"))
}

fn int_attribute(element: &XmlElement, name: &str) -> Option<i64> {
    element.attribute(name).and_then(parse_int_prefix)
}

fn on_off_attribute(element: &XmlElement, name: &str) -> Option<bool> {
    element
        .attribute(name)
        .map(|value| matches!(value, "1" | "true"))
}

fn read_boolean_element(element: Option<&XmlElement>) -> bool {
    match element {
        Some(e) => !matches!(e.attribute("w:val"), Some("false") | Some("0")),
        None => false,
    }
}
