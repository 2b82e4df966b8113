#![forbid(unsafe_code)]

//! Node types and read-only accessors for the token tree.

/// Tag used by styled token wrappers and by everything this pass inserts.
pub const SPAN_TAG: &str = "span";

/// A text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    /// The literal text content.
    pub value: String,
}

/// Ordered attribute list.
///
/// Attributes keep insertion order so serialized output is stable across
/// runs; lookup is linear, which is fine for the two-or-three attributes a
/// highlighter token carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(String, String)>);

impl Attrs {
    /// Create an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add or replace an attribute (builder pattern).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an attribute, replacing any existing value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.0.iter_mut().find(|entry| entry.0 == name) {
            entry.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// An element node: a tag, attributes, and any number of children.
///
/// Styled tokens are conventionally a [`SPAN_TAG`] element wrapping exactly
/// one text child, but the model does not enforce that; callers may hand in
/// whatever their highlighter produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name.
    pub tag: String,
    /// Attribute list.
    pub attrs: Attrs,
    /// Owned, ordered children.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    /// Set the attribute list (builder pattern).
    #[must_use]
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Append a child (builder pattern).
    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// First child, if any.
    #[inline]
    #[must_use]
    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// Text value of the first child, if that child is a text node.
    #[must_use]
    pub fn inner_text(&self) -> Option<&str> {
        match self.first_child()? {
            Node::Text(text) => Some(&text.value),
            Node::Element(_) => None,
        }
    }

    /// Concatenated text content of all descendant text nodes.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(children: &[Node], out: &mut String) {
    for child in children {
        match child {
            Node::Text(text) => out.push_str(&text.value),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

/// A node in the token tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A text leaf.
    Text(TextNode),
    /// An element wrapper.
    Element(Element),
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(TextNode {
            value: value.into(),
        })
    }

    /// Check if this is a text node.
    #[inline]
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Check if this is an element node.
    #[inline]
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Borrow the element, if this is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Mutably borrow the element, if this is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Borrow the text node, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// Text value of a styled token.
///
/// Returns the inner text only for elements tagged [`SPAN_TAG`] whose first
/// child is a text node. Wrapper elements with other tags, bare text
/// children, and spans wrapping further elements are not text-bearing
/// tokens and yield `None`.
#[must_use]
pub fn token_value(node: &Node) -> Option<&str> {
    let el = node.as_element()?;
    if el.tag == SPAN_TAG {
        el.inner_text()
    } else {
        None
    }
}
