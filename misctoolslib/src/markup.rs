//! Lookup tables from the children of a markup node.
//!
//! The tree itself is supplied by the caller through the [`MarkupNode`]
//! trait, so any XML or HTML parser's node type can be adapted with a few
//! lines. [`Element`] is a small owned implementation for building trees by
//! hand.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node in a hierarchical markup tree.
pub trait MarkupNode {
    /// Tag name, possibly carrying a namespace prefix.
    fn tag(&self) -> &str;

    /// Text content directly inside the node, if any.
    fn text(&self) -> Option<&str>;

    /// Immediate children, in document order.
    fn children(&self) -> impl Iterator<Item = &Self>;
}

/// Value stored for one child in the map built by [`dict_from_children`].
#[derive(Debug, PartialEq)]
pub enum ChildValue<'a, N> {
    /// The child has no children of its own; this is its text.
    Leaf(Option<&'a str>),
    /// The child has descendants; this is the child itself.
    Subtree(&'a N),
}

impl<N> Clone for ChildValue<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for ChildValue<'_, N> {}

impl<'a, N> ChildValue<'a, N> {
    /// Text of a leaf child.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            ChildValue::Leaf(text) => text,
            ChildValue::Subtree(_) => None,
        }
    }

    /// The node of a subtree child.
    pub fn as_subtree(&self) -> Option<&'a N> {
        match *self {
            ChildValue::Leaf(_) => None,
            ChildValue::Subtree(node) => Some(node),
        }
    }
}

/// Build a map from the immediate children of `element`.
///
/// Keys are the child tags with `prefix` removed when a tag starts with it.
/// Childless children map to their text, the others map to the child node.
/// When two children share a key the later one wins, keeping the position
/// of the first.
///
/// ```rust
/// use misctoolslib::{dict_from_children, ChildValue, Element};
///
/// let entry = Element::new("PDBx:entry")
///     .with_child(Element::new("PDBx:id").with_text("1ABC"))
///     .with_child(Element::new("PDBx:cell").with_child(Element::new("PDBx:length_a")));
///
/// let map = dict_from_children(&entry, Some("PDBx:"));
/// assert_eq!(map["id"], ChildValue::Leaf(Some("1ABC")));
/// assert!(map["cell"].as_subtree().is_some());
/// ```
pub fn dict_from_children<'a, N: MarkupNode>(
    element: &'a N,
    prefix: Option<&str>,
) -> IndexMap<String, ChildValue<'a, N>> {
    let prefix = prefix.filter(|p| !p.is_empty());
    let mut map = IndexMap::new();
    for child in element.children() {
        let tag = child.tag();
        let key = prefix
            .and_then(|p| tag.strip_prefix(p))
            .unwrap_or(tag);
        let value = if child.children().next().is_none() {
            ChildValue::Leaf(child.text())
        } else {
            ChildValue::Subtree(child)
        };
        map.insert(key.to_string(), value);
    }
    map
}

/// An owned markup element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name
    pub tag: String,
    /// Text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Child elements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Builder: set text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder: append a child
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
}

impl MarkupNode for Element {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }
}
