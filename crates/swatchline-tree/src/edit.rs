#![forbid(unsafe_code)]

//! Index-based edits on an element's child sequence.
//!
//! These are the only mutation primitives the swatch pass needs: it adds
//! nodes and splits text nodes, but never removes visible characters.

use crate::node::{Element, Node};

impl Element {
    /// Insert `node` before the child at `index`.
    ///
    /// # Panics
    /// Panics if `index > self.children.len()`.
    pub fn insert_child(&mut self, index: usize, node: Node) {
        self.children.insert(index, node);
    }

    /// Replace the child at `index` with `replacements`.
    ///
    /// An empty iterator removes the child outright.
    ///
    /// # Panics
    /// Panics if `index >= self.children.len()`.
    pub fn replace_child<I>(&mut self, index: usize, replacements: I)
    where
        I: IntoIterator<Item = Node>,
    {
        self.children.splice(index..=index, replacements);
    }

    /// Insert `node` as the first child.
    pub fn prepend_child(&mut self, node: Node) {
        self.children.insert(0, node);
    }

    /// Rewrite the first child's text value.
    ///
    /// Returns `false` (and leaves the element alone) when the first child
    /// is missing or is not a text node.
    pub fn set_inner_text(&mut self, value: impl Into<String>) -> bool {
        match self.children.first_mut() {
            Some(Node::Text(text)) => {
                text.value = value.into();
                true
            }
            _ => false,
        }
    }
}
