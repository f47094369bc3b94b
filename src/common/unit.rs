//! Source-unit constants and CSS number formatting.
//!
//! OOXML expresses paragraph and table measurements in twentieths of a
//! point ("twips"), border widths in eighths of a point, line spacing
//! multipliers in 240ths of a single line, and percentage table widths in
//! fiftieths of a percent. Each value is converted exactly once, at the
//! boundary where CSS text is produced.

/// Twips (twentieths of a point) per point.
pub const TWIPS_PER_POINT: i64 = 20;

/// Eighths of a point per point, used for border widths.
pub const EIGHTHS_PER_POINT: i64 = 8;

/// Line-spacing units per single line (240ths).
pub const LINE_UNITS_PER_LINE: i64 = 240;

/// Percentage-width units per percent (fiftieths).
pub const PCT_UNITS_PER_PERCENT: i64 = 50;

/// Convert a twip value to points.
#[inline]
pub fn twips_to_points(twips: i64) -> f64 {
    twips as f64 / TWIPS_PER_POINT as f64
}

/// Convert a line-spacing value to a unitless multiplier of single spacing.
#[inline]
pub fn line_units_to_multiplier(line: i64) -> f64 {
    line as f64 / LINE_UNITS_PER_LINE as f64
}

/// Format a number the way CSS output expects it.
///
/// Whole values render without a decimal part (`3`, `42`), fractional
/// values in their shortest round-trip form (`56.7`, `0.5`, `231.05`).
///
/// # Examples
///
/// ```rust
/// use longan::common::unit::format_css_number;
///
/// assert_eq!(format_css_number(56.7), "56.7");
/// assert_eq!(format_css_number(3.0), "3");
/// assert_eq!(format_css_number(-0.5), "-0.5");
/// ```
pub fn format_css_number(value: f64) -> String {
    // Integral values within i64 range print without a fractional part
    if value.is_finite() && value == value.trunc() && value.abs() < 9.0e15 {
        let mut buf = itoa::Buffer::new();
        buf.format(value as i64).to_string()
    } else {
        let mut buf = ryu::Buffer::new();
        buf.format(value).to_string()
    }
}

/// Lenient decimal parse: optional sign plus leading digits, trailing
/// junk ignored. Returns `None` when no digits are present.
///
/// Matches the permissive numeric handling of the source attribute values,
/// where `"48"` and `"48 "` both read as 48 and `"abc"` reads as nothing.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .as_bytes()
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}
