#![forbid(unsafe_code)]

//! Color swatches for syntax-highlighted code lines.
//!
//! A post-processing pass over one highlighted line at a time: it scans the
//! line's styled tokens for color literals - hex codes, `rgb()`/`rgba()`
//! expressions, CSS color names - and splices a small swatch element in
//! front of the detected text, preserving every visible character and the
//! token's highlighting attributes. Literals the highlighter split across
//! several tokens are reassembled before detection.
//!
//! The pass is synchronous and keeps no state between lines; callers may
//! process lines in any order or in parallel as long as the
//! [`ColorOracle`] is pure.
//!
//! # Example
//! ```
//! use swatchline::{Attrs, CssOracle, Element, Node, SPAN_TAG, annotate_line};
//!
//! let mut line = Element::new(SPAN_TAG)
//!     .with_attrs(Attrs::new().with("class", "line"))
//!     .with_child(Node::Element(
//!         Element::new(SPAN_TAG)
//!             .with_attrs(Attrs::new().with("style", "color:#79c0ff"))
//!             .with_child(Node::text("#ff7b72")),
//!     ));
//!
//! annotate_line(&mut line, &CssOracle);
//!
//! let token = line.children[0].as_element().unwrap();
//! let swatch = token.children[0].as_element().unwrap();
//! assert_eq!(swatch.attrs.get("data-color-preview"), Some("#ff7b72"));
//! assert_eq!(line.plain_text(), "#ff7b72");
//! ```

mod detect;
mod edit;
mod merge;
mod pass;

pub use detect::Detection;
pub use pass::{ColorPreviewPass, PreviewOptions, annotate_line};
pub use swatchline_color::{ColorOracle, ColorParseError, CssOracle};
pub use swatchline_tree::{Attrs, Element, Node, SPAN_TAG, TextNode, token_value};
