//! HTML node tree, path composition, and markup rendering.
//!
//! The conversion traversal produces a tree of [`HtmlNode`]s by wrapping
//! document content in [`HtmlPath`]s. Before rendering, [`simplify`]
//! merges adjacent non-fresh elements of the same kind (so consecutive
//! list items share one `<ol>` and identically-formatted runs share one
//! wrapper) and prunes elements left with no content.
//!
//! # Example
//!
//! ```rust
//! use longan::html::{simplify, write_html, HtmlElement, HtmlNode};
//!
//! let item = |text: &str| {
//!     HtmlNode::element(
//!         HtmlElement::new("ol"),
//!         vec![HtmlNode::element(
//!             HtmlElement::new("li").fresh(),
//!             vec![HtmlNode::text(text)],
//!         )],
//!     )
//! };
//! let nodes = simplify(vec![item("one"), item("two")]);
//! assert_eq!(write_html(&nodes), "<ol><li>one</li><li>two</li></ol>");
//! ```

// Submodule declarations
pub mod paths;
pub mod writer;

// Re-export public API
pub use paths::{Attributes, HtmlElement, HtmlPath};
pub use writer::write_html;

use phf::phf_set;

/// Tag names rendered as self-closing void elements.
static VOID_TAGS: phf::Set<&'static str> = phf_set! {
    "br",
    "hr",
    "img",
};

/// A node in the generated HTML tree.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    /// An element with a tag descriptor and child nodes
    Element(ElementNode),
    /// A text node, escaped at write time
    Text(String),
    /// A marker that keeps an otherwise-empty ancestor element from being
    /// pruned; writes nothing itself
    ForceWrite,
}

impl HtmlNode {
    /// Create an element node.
    pub fn element(tag: HtmlElement, children: Vec<HtmlNode>) -> Self {
        Self::Element(ElementNode::new(tag, children))
    }

    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

/// An element node: the wrapper tag descriptor plus its children.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    /// The tag descriptor this element was created from
    pub tag: HtmlElement,
    /// Child nodes in document order
    pub children: Vec<HtmlNode>,
}

impl ElementNode {
    /// Create an element node from a tag descriptor and children.
    pub fn new(tag: HtmlElement, children: Vec<HtmlNode>) -> Self {
        Self { tag, children }
    }

    /// Whether the element renders as a self-closing void tag.
    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(self.tag.tag_name())
    }
}

/// Merge adjacent mergeable elements, then prune empty ones.
pub fn simplify(nodes: Vec<HtmlNode>) -> Vec<HtmlNode> {
    remove_empty(collapse(nodes))
}

fn collapse(nodes: Vec<HtmlNode>) -> Vec<HtmlNode> {
    let mut children = Vec::with_capacity(nodes.len());
    for node in nodes {
        append_child(&mut children, collapse_node(node));
    }
    children
}

fn collapse_node(node: HtmlNode) -> HtmlNode {
    match node {
        HtmlNode::Element(element) => HtmlNode::Element(ElementNode::new(
            element.tag,
            collapse(element.children),
        )),
        other => other,
    }
}

/// Append a node, merging it into the previous sibling when the node is
/// non-fresh and both tags match. Merged content recurses so nested
/// mergeable wrappers coalesce too.
fn append_child(children: &mut Vec<HtmlNode>, child: HtmlNode) {
    match child {
        HtmlNode::Element(element) => {
            let can_merge = !element.tag.is_fresh()
                && matches!(
                    children.last(),
                    Some(HtmlNode::Element(last)) if element.tag.matches(&last.tag)
                );
            if can_merge {
                if let Some(HtmlNode::Element(last)) = children.last_mut() {
                    if let Some(separator) = element.tag.separator() {
                        if !separator.is_empty() {
                            append_child(&mut last.children, HtmlNode::Text(separator.to_owned()));
                        }
                    }
                    for grandchild in element.children {
                        append_child(&mut last.children, grandchild);
                    }
                }
            } else {
                children.push(HtmlNode::Element(element));
            }
        }
        other => children.push(other),
    }
}

fn remove_empty(nodes: Vec<HtmlNode>) -> Vec<HtmlNode> {
    nodes
        .into_iter()
        .filter_map(remove_empty_node)
        .collect()
}

fn remove_empty_node(node: HtmlNode) -> Option<HtmlNode> {
    match node {
        HtmlNode::Element(element) => {
            let is_void = element.is_void();
            let children = remove_empty(element.children);
            if children.is_empty() && !is_void {
                None
            } else {
                Some(HtmlNode::Element(ElementNode::new(element.tag, children)))
            }
        }
        HtmlNode::Text(text) => {
            if text.is_empty() {
                None
            } else {
                Some(HtmlNode::Text(text))
            }
        }
        HtmlNode::ForceWrite => Some(HtmlNode::ForceWrite),
    }
}
