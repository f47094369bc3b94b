//! Rendering the HTML node tree to markup text.
use crate::html::{ElementNode, HtmlNode};
use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automatons are built only once, thread-safe
static TEXT_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">"])
        .expect("Failed to build HTML text escaper")
});

static ATTRIBUTE_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\""])
        .expect("Failed to build HTML attribute escaper")
});

/// Escape HTML text content.
///
/// # Examples
///
/// ```
/// use longan::html::writer::escape_html_text;
/// assert_eq!(escape_html_text("a & b"), "a &amp; b");
/// assert_eq!(escape_html_text("<tag>"), "&lt;tag&gt;");
/// ```
#[inline]
pub fn escape_html_text(s: &str) -> String {
    TEXT_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;"])
}

/// Escape an HTML attribute value for double-quoted attributes.
///
/// # Examples
///
/// ```
/// use longan::html::writer::escape_html_attribute;
/// assert_eq!(escape_html_attribute("say \"hi\""), "say &quot;hi&quot;");
/// ```
#[inline]
pub fn escape_html_attribute(s: &str) -> String {
    ATTRIBUTE_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;"])
}

/// Render a list of HTML nodes to markup text.
pub fn write_html(nodes: &[HtmlNode]) -> String {
    let mut out = String::new();
    write_nodes(&mut out, nodes);
    out
}

fn write_nodes(out: &mut String, nodes: &[HtmlNode]) {
    for node in nodes {
        write_node(out, node);
    }
}

fn write_node(out: &mut String, node: &HtmlNode) {
    match node {
        HtmlNode::Element(element) => write_element(out, element),
        HtmlNode::Text(text) => out.push_str(&escape_html_text(text)),
        HtmlNode::ForceWrite => {}
    }
}

fn write_element(out: &mut String, element: &ElementNode) {
    let tag_name = element.tag.tag_name();
    out.push('<');
    out.push_str(tag_name);
    for (name, value) in element.tag.attributes().iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_html_attribute(value));
        out.push('"');
    }
    if element.is_void() {
        out.push_str(" />");
        return;
    }
    out.push('>');
    write_nodes(out, &element.children);
    out.push_str("</");
    out.push_str(tag_name);
    out.push('>');
}
