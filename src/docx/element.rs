//! Raw markup elements from WordprocessingML.
//!
//! [`XmlElement`] keeps names with their namespace prefixes (`w:spacing`,
//! `w:tcPr`) exactly as they appear in the source, since the readers look
//! fields up by their prefixed names.
use crate::common::{Error, Result};
use once_cell::sync::Lazy;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Shared placeholder returned by [`XmlElement::first_or_empty`].
static EMPTY_ELEMENT: Lazy<XmlElement> = Lazy::new(XmlElement::default);

/// An element in a parsed OOXML fragment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

/// A node in a parsed OOXML fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    /// A nested element
    Element(XmlElement),
    /// Character data
    Text(String),
}

impl XmlElement {
    /// Create an element with a (prefixed) name and no attributes or
    /// children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute; builder used by hosts and tests to construct
    /// elements without going through the parser.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a child element.
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// The element's (prefixed) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by its (prefixed) name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The element's child nodes in document order.
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// The first child element with the given (prefixed) name.
    pub fn first(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find_map(|child| match child {
            XmlNode::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    /// The first child element with the given name, or a shared empty
    /// placeholder. The placeholder has no attributes or children, so
    /// lookups on it degrade to "absent" rather than failing.
    pub fn first_or_empty(&self, name: &str) -> &XmlElement {
        self.first(name).unwrap_or(&EMPTY_ELEMENT)
    }
}

/// Parse an OOXML fragment into an element tree.
///
/// The fragment must have a single root element. Namespace prefixes are
/// kept verbatim; attribute values are not entity-decoded beyond what the
/// XML parser reports.
///
/// # Examples
///
/// ```rust
/// use longan::docx::parse_fragment;
///
/// let spacing = parse_fragment(r#"<w:spacing w:before="120" w:after="240"/>"#)?;
/// assert_eq!(spacing.attribute("w:before"), Some("120"));
/// # Ok::<(), longan::Error>(())
/// ```
pub fn parse_fragment(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;
    let mut buf = Vec::with_capacity(256);

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                stack.push(element_from_start(&e));
            },
            Ok(Event::Empty(e)) => {
                let element = element_from_start(&e);
                attach(&mut stack, &mut root, element)?;
            },
            Ok(Event::Text(e)) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                if !text.is_empty() {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(XmlNode::Text(text));
                    }
                }
            },
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::Xml("unbalanced end tag in fragment".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {},
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(Error::Xml("unclosed element in fragment".to_string()));
    }
    root.ok_or_else(|| Error::InvalidFormat("fragment has no root element".to_string()))
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(XmlNode::Element(element));
    } else {
        if root.is_some() {
            return Err(Error::InvalidFormat(
                "fragment has multiple root elements".to_string(),
            ));
        }
        *root = Some(element);
    }
    Ok(())
}

fn element_from_start(e: &BytesStart<'_>) -> XmlElement {
    let mut element = XmlElement::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
    for attr in e.attributes().flatten() {
        element.attributes.push((
            String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            String::from_utf8_lossy(&attr.value).into_owned(),
        ));
    }
    element
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_with_attributes() {
        let tc_pr = parse_fragment(
            r#"<w:tcPr>
                <w:tcW w:w="100" w:type="dxa"/>
                <w:tcBorders>
                    <w:top w:val="single" w:sz="48" w:color="FFC000"/>
                </w:tcBorders>
            </w:tcPr>"#,
        )
        .unwrap();

        assert_eq!(tc_pr.name(), "w:tcPr");
        let width = tc_pr.first("w:tcW").unwrap();
        assert_eq!(width.attribute("w:w"), Some("100"));
        assert_eq!(width.attribute("w:type"), Some("dxa"));

        let top = tc_pr.first_or_empty("w:tcBorders").first("w:top").unwrap();
        assert_eq!(top.attribute("w:val"), Some("single"));
        assert_eq!(top.attribute("w:sz"), Some("48"));
    }

    #[test]
    fn first_or_empty_returns_attribute_free_placeholder() {
        let element = parse_fragment("<w:pPr/>").unwrap();
        let missing = element.first_or_empty("w:spacing");
        assert_eq!(missing.attribute("w:before"), None);
        assert!(missing.children().is_empty());
    }

    #[test]
    fn captures_text_content() {
        let element = parse_fragment("<w:t>Hello</w:t>").unwrap();
        assert_eq!(element.children(), &[XmlNode::Text("Hello".to_string())]);
    }

    #[test]
    fn rejects_unbalanced_fragments() {
        assert!(parse_fragment("<w:p><w:r></w:p>").is_err() || parse_fragment("<w:p><w:r>").is_err());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_fragment("").is_err());
    }
}
