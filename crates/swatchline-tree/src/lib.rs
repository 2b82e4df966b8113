#![forbid(unsafe_code)]

//! Element-tree model for syntax-highlighted code lines.
//!
//! A highlighter renders one element per line of code; its children are the
//! line's tokens, each either a bare text node or a `"span"` element wrapping
//! a single text child that carries the highlighting attributes. This crate
//! provides that tree shape plus the read and edit primitives the swatch
//! pass is built on:
//! - [`Node`] / [`Element`] / [`TextNode`] - the tagged node model
//! - [`token_value`] - text of a styled token, guarding against wrappers
//! - index-based child edits: insert, replace-with-several, prepend
//!
//! # Example
//! ```
//! use swatchline_tree::{Attrs, Element, Node, SPAN_TAG, token_value};
//!
//! let line = Element::new(SPAN_TAG)
//!     .with_attrs(Attrs::new().with("class", "line"))
//!     .with_child(Node::Element(
//!         Element::new(SPAN_TAG)
//!             .with_attrs(Attrs::new().with("style", "color:#79c0ff"))
//!             .with_child(Node::text("let")),
//!     ));
//!
//! assert_eq!(token_value(&line.children[0]), Some("let"));
//! assert_eq!(line.plain_text(), "let");
//! ```

mod edit;
mod node;

pub use node::{Attrs, Element, Node, SPAN_TAG, TextNode, token_value};
