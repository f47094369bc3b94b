//! Html path descriptions: nested wrapper tags used to render a semantic
//! node into concrete markup.
//!
//! An [`HtmlPath`] is a value type: cloning produces a deep, independent
//! copy, so a shared template path can be reused across sibling nodes as
//! long as every transformation clones before mutating.
use crate::html::{ElementNode, HtmlNode};
use smallvec::{SmallVec, smallvec};

/// An insertion-ordered mapping of HTML attribute names to values.
///
/// Attribute order is preserved so that generated markup is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any existing value in place so the
    /// original position is kept.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Whether the mapping has no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (key, value) in iter {
            attributes.set(key, value);
        }
        attributes
    }
}

/// A single wrapper tag descriptor in an [`HtmlPath`].
///
/// An element carries one or more acceptable tag names (the first is the
/// one emitted), an attribute mapping, a `fresh` flag (a fresh element is
/// never merged with an adjacent sibling of the same kind), and an optional
/// `separator` inserted between merged content.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlElement {
    tag_names: SmallVec<[String; 1]>,
    attributes: Attributes,
    fresh: bool,
    separator: Option<String>,
}

impl HtmlElement {
    /// Create a non-fresh element with a single tag name and no attributes.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_names: smallvec![tag_name.into()],
            attributes: Attributes::new(),
            fresh: false,
            separator: None,
        }
    }

    /// Create an element with several acceptable tag names; the first is
    /// the one emitted. At least one name must be supplied.
    pub fn with_tag_names<I, S>(tag_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tag_names: tag_names.into_iter().map(Into::into).collect(),
            attributes: Attributes::new(),
            fresh: false,
            separator: None,
        }
    }

    /// Mark the element as fresh: always emit a new tag, never merge.
    pub fn fresh(mut self) -> Self {
        self.fresh = true;
        self
    }

    /// Add or replace a single attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Replace the whole attribute mapping.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the separator inserted between merged list-like content.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// The tag name emitted for this element.
    pub fn tag_name(&self) -> &str {
        &self.tag_names[0]
    }

    /// All acceptable tag names.
    pub fn tag_names(&self) -> &[String] {
        &self.tag_names
    }

    /// The element's attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable access to the element's attributes.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Whether the element must always be emitted as a new tag.
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// The separator inserted between merged content, if any.
    pub fn separator(&self) -> Option<&str> {
        self.separator.as_deref()
    }

    /// Whether another element may merge into this one: the tag name sets
    /// intersect and the attributes are equal.
    pub fn matches(&self, other: &HtmlElement) -> bool {
        self.tag_names
            .iter()
            .any(|name| other.tag_names.contains(name))
            && self.attributes == other.attributes
    }
}

/// An ordered sequence of wrapper tag descriptors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HtmlPath {
    elements: Vec<HtmlElement>,
}

impl HtmlPath {
    /// Create a path from its elements, outermost first.
    pub fn new(elements: Vec<HtmlElement>) -> Self {
        Self { elements }
    }

    /// A path with no elements: wrapping is the identity.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A path consisting of a single element.
    pub fn single(element: HtmlElement) -> Self {
        Self {
            elements: vec![element],
        }
    }

    /// A path consisting of a single fresh element, the usual shape for
    /// block-level wrappers.
    pub fn top_level(tag_name: impl Into<String>) -> Self {
        Self::single(HtmlElement::new(tag_name).fresh())
    }

    /// The path's elements, outermost first.
    pub fn elements(&self) -> &[HtmlElement] {
        &self.elements
    }

    /// Mutable access to the path's elements.
    pub fn elements_mut(&mut self) -> &mut [HtmlElement] {
        &mut self.elements
    }

    /// The outermost element, if any.
    pub fn first(&self) -> Option<&HtmlElement> {
        self.elements.first()
    }

    /// Mutable access to the outermost element, if any.
    pub fn first_mut(&mut self) -> Option<&mut HtmlElement> {
        self.elements.first_mut()
    }

    /// Whether the path has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Wrap a list of child nodes in this path's tags, innermost last.
    pub fn wrap(&self, children: Vec<HtmlNode>) -> Vec<HtmlNode> {
        let mut result = children;
        for element in self.elements.iter().rev() {
            result = vec![HtmlNode::Element(ElementNode::new(element.clone(), result))];
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::write_html;

    #[test]
    fn attributes_preserve_insertion_order() {
        let mut attributes = Attributes::new();
        attributes.set("colspan", "2");
        attributes.set("style", "width: 5pt;");
        attributes.set("colspan", "3");

        let entries: Vec<(&str, &str)> = attributes.iter().collect();
        assert_eq!(entries, [("colspan", "3"), ("style", "width: 5pt;")]);
    }

    #[test]
    fn clone_is_independent_of_the_original() {
        let original = HtmlPath::top_level("p");
        let mut copy = original.clone();
        copy.first_mut()
            .unwrap()
            .attributes_mut()
            .set("style", "text-align: center;");

        assert!(original.first().unwrap().attributes().is_empty());
        assert_eq!(
            copy.first().unwrap().attributes().get("style"),
            Some("text-align: center;")
        );
    }

    #[test]
    fn wrap_nests_outermost_first() {
        let path = HtmlPath::new(vec![
            HtmlElement::new("blockquote").fresh(),
            HtmlElement::new("p").fresh(),
        ]);
        let nodes = path.wrap(vec![HtmlNode::text("quoted")]);
        assert_eq!(write_html(&nodes), "<blockquote><p>quoted</p></blockquote>");
    }

    #[test]
    fn elements_match_on_tag_intersection_and_attributes() {
        let bold = HtmlElement::with_tag_names(["b", "strong"]);
        let strong = HtmlElement::new("strong");
        assert!(bold.matches(&strong));
        assert!(!bold.matches(&strong.clone().with_attribute("class", "x")));
        assert!(!bold.matches(&HtmlElement::new("em")));
    }
}
