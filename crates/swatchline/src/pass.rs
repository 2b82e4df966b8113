#![forbid(unsafe_code)]

//! The per-line annotation pass.

use swatchline_color::ColorOracle;
use swatchline_tree::{Element, Node, token_value};

use crate::detect::detect_color;
use crate::edit::{split_with_swatch, swatch_element, whitespace_element};

/// Knobs for the generated swatch markup.
///
/// The defaults reproduce the canonical shape:
/// `<span data-color-preview="#ff0000" style="background-color: #ff0000;">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    swatch_tag: String,
    color_attr: String,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            swatch_tag: swatchline_tree::SPAN_TAG.into(),
            color_attr: "data-color-preview".into(),
        }
    }
}

impl PreviewOptions {
    /// Create the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tag of the swatch element (builder pattern).
    #[must_use]
    pub fn with_swatch_tag(mut self, tag: impl Into<String>) -> Self {
        self.swatch_tag = tag.into();
        self
    }

    /// Override the attribute that records the literal (builder pattern).
    #[must_use]
    pub fn with_color_attr(mut self, attr: impl Into<String>) -> Self {
        self.color_attr = attr.into();
        self
    }

    /// Tag of the swatch element.
    #[must_use]
    pub fn swatch_tag(&self) -> &str {
        &self.swatch_tag
    }

    /// Attribute that records the literal color value.
    #[must_use]
    pub fn color_attr(&self) -> &str {
        &self.color_attr
    }
}

/// A reusable line-annotation pass.
///
/// Holds only the oracle and options. Every [`annotate`](Self::annotate)
/// call operates exclusively on the line it is given, so one pass value may
/// serve many lines, in any order, from any number of threads, provided the
/// oracle is pure.
#[derive(Debug, Clone)]
pub struct ColorPreviewPass<O> {
    oracle: O,
    options: PreviewOptions,
}

impl<O: ColorOracle> ColorPreviewPass<O> {
    /// Create a pass with the default options.
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            options: PreviewOptions::default(),
        }
    }

    /// Replace the options (builder pattern).
    #[must_use]
    pub fn with_options(mut self, options: PreviewOptions) -> Self {
        self.options = options;
        self
    }

    /// Annotate one highlighted line in place.
    ///
    /// Children that carry no detectable color literal are left untouched,
    /// node for node. Nodes inserted by the pass itself are never
    /// re-scanned.
    pub fn annotate(&self, line: &mut Element) {
        let mut index = 0;
        while index < line.children.len() {
            index += self.annotate_token(line, index);
        }
    }

    /// Process the child at `index` and return how many settled nodes the
    /// cursor should step over. Edits only ever touch `index` and later.
    fn annotate_token(&self, line: &mut Element, index: usize) -> usize {
        let Some(text) = token_value(&line.children[index]) else {
            return 1;
        };
        let original = text.to_string();
        let trimmed = original.trim();
        let Some(found) = detect_color(trimmed, index, &line.children, &self.oracle) else {
            return 1;
        };
        tracing::debug!(color = %found.color, offset = found.offset, "color literal detected");

        let lead = original.len() - original.trim_start().len();
        if found.offset == 0 {
            let mut token_at = index;
            if lead > 0 {
                if let Some(token) = line.children[index].as_element_mut() {
                    token.set_inner_text(&original[lead..]);
                }
                line.insert_child(index, whitespace_element(&original[..lead]));
                token_at += 1;
            }
            if let Some(token) = line.children[token_at].as_element_mut() {
                token.prepend_child(Node::Element(swatch_element(&found.color, &self.options)));
            }
            token_at - index + 1
        } else {
            split_with_swatch(line, index, lead + found.offset, &found.color, &self.options)
        }
    }
}

/// Annotate one line with the default options.
///
/// Convenience wrapper around [`ColorPreviewPass`] for callers that do not
/// need to reuse a configured pass.
pub fn annotate_line(line: &mut Element, oracle: &impl ColorOracle) {
    ColorPreviewPass::new(oracle).annotate(line);
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use swatchline_color::CssOracle;
    use swatchline_tree::SPAN_TAG;

    fn token(text: &str) -> Node {
        Node::Element(Element::new(SPAN_TAG).with_child(Node::text(text)))
    }

    proptest! {
        #[test]
        fn visible_text_is_preserved(
            texts in prop::collection::vec("[ a-z0-9#;:(),.]{0,12}", 0..6)
        ) {
            let mut line = Element::new(SPAN_TAG);
            for text in &texts {
                line.children.push(token(text));
            }
            let before = line.plain_text();
            annotate_line(&mut line, &CssOracle);
            prop_assert_eq!(line.plain_text(), before);
        }

        #[test]
        fn colorless_lines_are_untouched(
            words in prop::collection::vec("[a-z]{1,8}", 0..6)
        ) {
            let mut line = Element::new(SPAN_TAG);
            for word in &words {
                if CssOracle.is_valid_named_color(word) {
                    continue;
                }
                line.children.push(token(word));
            }
            let before = line.clone();
            annotate_line(&mut line, &CssOracle);
            prop_assert_eq!(line, before);
        }
    }
}
