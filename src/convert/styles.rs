//! The style-to-CSS mapping engine.
//!
//! Pure functions that take a semantic entity (paragraph, run, table cell)
//! and produce CSS text or augmented [`HtmlPath`]/attribute structures.
//! Output is byte-exact by contract: declaration order, separators, and
//! unit conversion all follow fixed rules, and downstream consumers depend
//! on the precise text.
//!
//! Functions that transform a path operate on a clone, never the caller's
//! original, so shared template paths reused across sibling nodes never
//! cross-contaminate.
use crate::common::unit::{
    EIGHTHS_PER_POINT, PCT_UNITS_PER_PERCENT, format_css_number, line_units_to_multiplier,
    parse_int_prefix, twips_to_points,
};
use crate::document::{BorderSide, LineRule, Paragraph, Run, TableCell, WidthUnit};
use crate::html::{Attributes, HtmlElement, HtmlPath};
use phf::phf_map;

/// Ordered-list `type` attribute values by numbering format name.
///
/// Unlisted formats produce no `type` attribute; that fallback is part of
/// the contract, not an omission.
static LIST_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "decimal" => "1",
    "upperRoman" => "I",
    "lowerRoman" => "i",
    "upperLetter" => "A",
    "lowerLetter" => "a",
};

/// CSS border styles by OOXML border line type.
///
/// Line types that are present but unlisted render as `solid`.
static BORDER_STYLES: phf::Map<&'static str, &'static str> = phf_map! {
    "nil" => "none",
    "single" => "solid",
    "dotted" => "dotted",
    "dashed" => "dashed",
    "double" => "double",
    "triple" => "double",
};

/// Return a copy of `path` whose outermost element carries the paragraph's
/// alignment, indent, and spacing as CSS declarations.
///
/// Declarations are appended in fixed order: alignment, first-line indent,
/// hanging indent (left padding plus a negating text-indent), start and
/// end indent, line height, then space before and after. A hanging indent
/// deliberately emits its `text-indent` after the first-line one, so the
/// later declaration wins. Pre-existing style text is kept, separated by a
/// single `;`.
///
/// # Examples
///
/// ```rust
/// use longan::convert::styles::with_alignment_indent_and_spacing;
/// use longan::document::{Alignment, Paragraph};
/// use longan::html::HtmlPath;
///
/// let mut paragraph = Paragraph::new(vec![]);
/// paragraph.alignment = Some(Alignment::Both);
/// let path = with_alignment_indent_and_spacing(&HtmlPath::top_level("p"), &paragraph);
/// assert_eq!(
///     path.first().unwrap().attributes().get("style"),
///     Some("text-align: justify;")
/// );
/// ```
pub fn with_alignment_indent_and_spacing(path: &HtmlPath, paragraph: &Paragraph) -> HtmlPath {
    let mut css = String::new();

    if let Some(alignment) = paragraph.alignment {
        css.push_str("text-align: ");
        css.push_str(alignment.css());
        css.push(';');
    }

    let indent = &paragraph.indent;
    if let Some(first_line) = indent.first_line {
        push_points(&mut css, "text-indent", twips_to_points(first_line));
    }
    if let Some(hanging) = indent.hanging {
        // Hanging indent: pad the whole paragraph left, pull the first
        // line back by the same amount
        push_points(&mut css, "padding-left", twips_to_points(hanging));
        css.push_str("text-indent: -");
        css.push_str(&format_css_number(twips_to_points(hanging)));
        css.push_str("pt;");
    }
    if let Some(start) = indent.start {
        push_points(&mut css, "margin-left", twips_to_points(start));
    }
    if let Some(end) = indent.end {
        push_points(&mut css, "margin-right", twips_to_points(end));
    }

    let spacing = &paragraph.spacing;
    if let Some(line) = spacing.line {
        if spacing.line_rule.is_some_and(LineRule::is_absolute) {
            css.push_str("line-height: ");
            css.push_str(&format_css_number(twips_to_points(line)));
            css.push_str("px;");
        } else {
            css.push_str("line-height: ");
            css.push_str(&format_css_number(line_units_to_multiplier(line)));
            css.push(';');
        }
    }
    if let Some(before) = spacing.before {
        push_points(&mut css, "margin-top", twips_to_points(before));
    }
    if let Some(after) = spacing.after {
        push_points(&mut css, "margin-bottom", twips_to_points(after));
    }

    let mut result = path.clone();
    if css.is_empty() {
        return result;
    }
    if let Some(first) = result.first_mut() {
        let style = match first.attributes().get("style") {
            Some(existing) if !existing.is_empty() => format!("{existing};{css}"),
            _ => css,
        };
        first.attributes_mut().set("style", style);
    }
    result
}

fn push_points(css: &mut String, property: &str, points: f64) {
    css.push_str(property);
    css.push_str(": ");
    css.push_str(&format_css_number(points));
    css.push_str("pt;");
}

/// Return a copy of the template path where every `ol` element carries a
/// `type` attribute derived from the paragraph's numbering format.
///
/// All elements in the path are visited, not just the first. Paragraphs
/// without a numbering format, and formats with no list-type mapping,
/// leave the copy unchanged.
pub fn with_numbering(path: &HtmlPath, paragraph: &Paragraph) -> HtmlPath {
    let mut result = path.clone();
    let list_type = paragraph
        .numbering
        .as_ref()
        .and_then(|numbering| numbering.format.as_deref())
        .and_then(|format| LIST_TYPES.get(format));
    if let Some(list_type) = list_type {
        for element in result.elements_mut() {
            if element.tag_name() == "ol" {
                element.attributes_mut().set("type", *list_type);
            }
        }
    }
    result
}

/// Append wrapper elements for the run's color, background, font family,
/// and font size to an existing wrapper sequence.
///
/// Append-only: prior entries are never removed or reordered, and every
/// appended wrapper is non-fresh so identically-formatted neighbors merge.
/// Shading takes priority over highlight for the background color. A
/// numeric font size gains a `pt` suffix; any other value passes through
/// unsuffixed, exactly as given.
pub fn with_background_color_and_font_style(paths: &mut Vec<HtmlElement>, run: &Run) {
    if let Some(color) = &run.color {
        paths.push(HtmlElement::new("font").with_attribute("color", color));
    }
    if let Some(background) = run.shading.as_deref().or(run.highlight.as_deref()) {
        paths.push(
            HtmlElement::new("span")
                .with_attribute("style", format!("background-color:{background}")),
        );
    }
    if let Some(font) = &run.font {
        paths.push(HtmlElement::new("span").with_attribute("style", format!("font-family:{font}")));
    }
    if let Some(font_size) = &run.font_size {
        let style = if font_size.parse::<f64>().is_ok() {
            format!("font-size:{font_size}pt")
        } else {
            format!("font-size:{font_size}")
        };
        paths.push(HtmlElement::new("span").with_attribute("style", style));
    }
}

/// Compute one CSS string covering the cell's four border sides and set it
/// as the `style` attribute.
///
/// Sides emit in fixed order (top, bottom, left, right); each declaration
/// ends with `; `. Border widths of zero or with unparseable sizes fall
/// back to `1pt`, spacing offsets likewise to `1px`, and the literal color
/// `auto` emits no color. When any side produced text the `style` key is
/// overwritten, so this mapper must run before other style contributions;
/// when no side produced text, existing attributes are left untouched.
pub fn with_borders(cell: &TableCell, attributes: &mut Attributes) {
    if cell.borders.is_empty() {
        return;
    }
    let mut css = String::new();
    for side in BorderSide::ALL {
        let Some(border) = cell.borders.get(side) else {
            continue;
        };
        if let Some(line_type) = border.line_type.as_deref().filter(|v| !v.is_empty()) {
            let style = BORDER_STYLES.get(line_type).copied().unwrap_or("solid");
            css.push_str(&format!("border-{side}-style:{style}; "));
        }
        if let Some(size) = border.size.as_deref().filter(|v| !v.is_empty()) {
            let points = parse_int_prefix(size)
                .map(|value| value as f64 / EIGHTHS_PER_POINT as f64)
                .filter(|points| *points != 0.0)
                .unwrap_or(1.0);
            css.push_str(&format!(
                "border-{side}-width:{}pt; ",
                format_css_number(points)
            ));
        }
        if let Some(space) = border.space.as_deref().filter(|v| !v.is_empty()) {
            let pixels = parse_int_prefix(space)
                .map(twips_to_points)
                .filter(|pixels| *pixels != 0.0)
                .unwrap_or(1.0);
            css.push_str(&format!(
                "padding-{side}:{}px; ",
                format_css_number(pixels)
            ));
        }
        if let Some(color) = border
            .color
            .as_deref()
            .filter(|v| !v.is_empty() && *v != "auto")
        {
            css.push_str(&format!("border-{side}-color:#{color}; "));
        }
    }
    if !css.is_empty() {
        attributes.set("style", css);
    }
}

/// The `width` declaration for a preferred table or cell width, if the
/// unit calls for one.
///
/// `dxa` widths convert from twips to points, `pct` widths from fiftieths
/// of a percent to percent; `auto` and `nil` widths, missing units, and
/// missing or zero values produce no declaration.
pub fn width_declaration(value: Option<i64>, unit: Option<WidthUnit>) -> Option<String> {
    let value = value.filter(|v| *v != 0)?;
    match unit? {
        WidthUnit::Dxa => Some(format!(
            "width: {}pt;",
            format_css_number(twips_to_points(value))
        )),
        WidthUnit::Pct => Some(format!(
            "width: {}%;",
            format_css_number(value as f64 / PCT_UNITS_PER_PERCENT as f64)
        )),
        WidthUnit::Nil | WidthUnit::Auto => None,
    }
}
