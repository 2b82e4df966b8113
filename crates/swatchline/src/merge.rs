#![forbid(unsafe_code)]

//! Reassembly of color literals the highlighter split across tokens.

use swatchline_tree::{Node, token_value};

/// Greedily concatenate sibling token texts after `index` onto `seed`.
///
/// Each step looks one sibling ahead. A sibling that is not a text-bearing
/// span aborts the merge. Otherwise the sibling's text is appended and:
///
/// - if the accumulated candidate satisfies `end`, the merge succeeds with
///   the terminator included;
/// - else if the sibling's own text satisfies `allow`, merging continues
///   from the next index;
/// - else the merge fails. A disallowed sibling never ends a merge early;
///   only `end` can produce a candidate.
pub(crate) fn merge_following(
    seed: &str,
    index: usize,
    siblings: &[Node],
    end: &impl Fn(&str) -> bool,
    allow: &impl Fn(&str) -> bool,
) -> Option<String> {
    let sibling = siblings.get(index + 1).and_then(token_value)?;
    let mut candidate = String::with_capacity(seed.len() + sibling.len());
    candidate.push_str(seed);
    candidate.push_str(sibling);
    if end(&candidate) {
        return Some(candidate);
    }
    if allow(sibling) {
        merge_following(&candidate, index + 1, siblings, end, allow)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatchline_tree::{Element, SPAN_TAG};

    fn token(text: &str) -> Node {
        Node::Element(Element::new(SPAN_TAG).with_child(Node::text(text)))
    }

    fn closes_paren(candidate: &str) -> bool {
        candidate.ends_with(')')
    }

    fn always(_: &str) -> bool {
        true
    }

    fn never(_: &str) -> bool {
        false
    }

    #[test]
    fn includes_the_terminator_sibling() {
        let tokens = vec![token("rgb"), token("(0,0,0"), token(")")];
        let merged = merge_following("rgb", 0, &tokens, &closes_paren, &always);
        assert_eq!(merged.as_deref(), Some("rgb(0,0,0)"));
    }

    #[test]
    fn stops_at_the_first_satisfying_candidate() {
        let tokens = vec![token("a"), token(")"), token(")")];
        let merged = merge_following("a", 0, &tokens, &closes_paren, &always);
        assert_eq!(merged.as_deref(), Some("a)"));
    }

    #[test]
    fn fails_without_a_following_sibling() {
        let tokens = vec![token("rgb")];
        assert_eq!(merge_following("rgb", 0, &tokens, &closes_paren, &always), None);
    }

    #[test]
    fn fails_on_a_bare_text_sibling() {
        let tokens = vec![token("rgb"), Node::text("(0,0,0)")];
        assert_eq!(merge_following("rgb", 0, &tokens, &closes_paren, &always), None);
    }

    #[test]
    fn fails_on_a_non_span_sibling() {
        let wrapper = Node::Element(Element::new("a").with_child(Node::text("(0,0,0)")));
        let tokens = vec![token("rgb"), wrapper];
        assert_eq!(merge_following("rgb", 0, &tokens, &closes_paren, &always), None);
    }

    #[test]
    fn fails_when_continuation_is_disallowed() {
        let tokens = vec![token("rgb"), token("junk"), token(")")];
        assert_eq!(merge_following("rgb", 0, &tokens, &closes_paren, &never), None);
    }

    #[test]
    fn runs_off_the_end_without_a_terminator() {
        let tokens = vec![token("rgb"), token("(0,"), token("0,0")];
        assert_eq!(merge_following("rgb", 0, &tokens, &closes_paren, &always), None);
    }
}
