#![forbid(unsafe_code)]

//! Tree edits that splice swatches into a line.

use smallvec::SmallVec;

use swatchline_tree::{Attrs, Element, Node, SPAN_TAG};

use crate::pass::PreviewOptions;

/// Build a swatch element for `color`: an empty placeholder span whose
/// background renders the color, tagged with the literal for tooling.
pub(crate) fn swatch_element(color: &str, options: &PreviewOptions) -> Element {
    Element::new(options.swatch_tag())
        .with_attrs(
            Attrs::new()
                .with(options.color_attr(), color)
                .with("style", format!("background-color: {color};")),
        )
        .with_child(Node::text(""))
}

/// A bare span holding extracted leading whitespace.
pub(crate) fn whitespace_element(ws: &str) -> Node {
    Node::Element(Element::new(SPAN_TAG).with_child(Node::text(ws)))
}

fn styled_span(attrs: &Attrs, text: &str) -> Node {
    Node::Element(
        Element::new(SPAN_TAG)
            .with_attrs(attrs.clone())
            .with_child(Node::text(text)),
    )
}

/// Replace the token at `index` with up to three spans: leading text,
/// swatch plus the literal color text, trailing text.
///
/// `start` is a byte offset into the token's untrimmed text. Empty leading
/// and trailing segments are omitted rather than inserted as empty spans;
/// all produced spans inherit the token's attributes. Returns the number
/// of nodes now occupying the replaced slot.
pub(crate) fn split_with_swatch(
    line: &mut Element,
    index: usize,
    start: usize,
    color: &str,
    options: &PreviewOptions,
) -> usize {
    let Some(token) = line.children[index].as_element() else {
        return 1;
    };
    let Some(text) = token.inner_text() else {
        return 1;
    };
    let end = start + color.len();
    if end > text.len() {
        return 1;
    }

    let text = text.to_string();
    let attrs = token.attrs.clone();
    let before = &text[..start];
    let after = &text[end..];

    let mut replacements: SmallVec<[Node; 3]> = SmallVec::new();
    if !before.is_empty() {
        replacements.push(styled_span(&attrs, before));
    }
    replacements.push(Node::Element(
        Element::new(SPAN_TAG)
            .with_attrs(attrs.clone())
            .with_child(Node::Element(swatch_element(color, options)))
            .with_child(Node::text(color)),
    ));
    if !after.is_empty() {
        replacements.push(styled_span(&attrs, after));
    }

    let count = replacements.len();
    line.replace_child(index, replacements);
    count
}
