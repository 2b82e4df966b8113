#![forbid(unsafe_code)]

//! Color-literal classifiers.
//!
//! Classifiers run in a fixed order per token, cheapest and most specific
//! first; the first hit wins. The exact classifiers may consult following
//! siblings through the merger when a literal was split by the highlighter;
//! the substring classifiers handle literals embedded mid-token (say,
//! inside a string literal like `"#fff"`).

use std::sync::LazyLock;

use regex::Regex;
use swatchline_color::ColorOracle;
use swatchline_tree::Node;

use crate::merge::merge_following;

/// A recognized color literal and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// The literal exactly as it should feed a `background-color` style.
    pub color: String,
    /// Byte offset of the literal within the trimmed token text; 0 for
    /// exact and merged matches. Classifier patterns are ASCII-only, so
    /// offsets always land on character boundaries.
    pub offset: usize,
}

static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{3,8}").expect("valid regex"));

// The alpha alternation is deliberately loose: a bare digit or a `0.`-style
// decimal. The oracle has the final say on the whole literal.
static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgba?\((\d{1,3},\s?){2}\d{1,3}(,\s?(\d|0\.\d+))?\)").expect("valid regex")
});

const HEX_DIGIT_COUNTS: [usize; 4] = [3, 4, 6, 8];

/// Run the classifier chain on one trimmed token text.
pub(crate) fn detect_color(
    trimmed: &str,
    index: usize,
    siblings: &[Node],
    oracle: &impl ColorOracle,
) -> Option<Detection> {
    exact_hex(trimmed, index, siblings, oracle)
        .or_else(|| exact_rgb(trimmed, index, siblings, oracle))
        .or_else(|| embedded_hex(trimmed, oracle))
        .or_else(|| embedded_rgb(trimmed, oracle))
        .or_else(|| named(trimmed, oracle))
}

fn exact_hex(
    trimmed: &str,
    index: usize,
    siblings: &[Node],
    oracle: &impl ColorOracle,
) -> Option<Detection> {
    if !trimmed.starts_with('#') {
        return None;
    }
    if oracle.is_valid_hex(trimmed) {
        return Some(Detection {
            color: trimmed.to_string(),
            offset: 0,
        });
    }
    let merged = merge_following(trimmed, index, siblings, &hex_complete, &is_hex_fragment)?;
    let candidate = strip_semicolon(&merged);
    if oracle.is_valid_hex(candidate) {
        Some(Detection {
            color: candidate.to_string(),
            offset: 0,
        })
    } else {
        None
    }
}

fn exact_rgb(
    trimmed: &str,
    index: usize,
    siblings: &[Node],
    oracle: &impl ColorOracle,
) -> Option<Detection> {
    if !trimmed.starts_with("rgb") {
        return None;
    }
    if oracle.is_valid_rgb(trimmed) {
        return Some(Detection {
            color: trimmed.to_string(),
            offset: 0,
        });
    }
    let allow =
        |token: &str| is_open_paren(token) || is_blank(token) || is_numeric(token) || is_comma(token);
    let merged = merge_following(trimmed, index, siblings, &rgb_complete, &allow)?;
    let candidate = strip_semicolon(&merged);
    if oracle.is_valid_rgb(candidate) {
        Some(Detection {
            color: candidate.to_string(),
            offset: 0,
        })
    } else {
        None
    }
}

fn embedded_hex(trimmed: &str, oracle: &impl ColorOracle) -> Option<Detection> {
    if !trimmed.contains('#') {
        return None;
    }
    let found = HEX_PATTERN.find(trimmed)?;
    let candidate = strip_semicolon(found.as_str());
    if oracle.is_valid_hex(candidate) {
        Some(Detection {
            color: candidate.to_string(),
            offset: found.start(),
        })
    } else {
        None
    }
}

fn embedded_rgb(trimmed: &str, oracle: &impl ColorOracle) -> Option<Detection> {
    if !trimmed.contains("rgb") {
        return None;
    }
    let found = RGB_PATTERN.find(trimmed)?;
    let candidate = strip_semicolon(found.as_str());
    if oracle.is_valid_rgb(candidate) {
        Some(Detection {
            color: candidate.to_string(),
            offset: found.start(),
        })
    } else {
        None
    }
}

fn named(trimmed: &str, oracle: &impl ColorOracle) -> Option<Detection> {
    if oracle.is_valid_named_color(trimmed) {
        Some(Detection {
            color: trimmed.to_string(),
            offset: 0,
        })
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Merge predicates
// ---------------------------------------------------------------------------

fn strip_semicolon(s: &str) -> &str {
    s.strip_suffix(';').unwrap_or(s)
}

// A finished hex candidate: `#` plus a total digit count that can form a
// color, with at most one trailing semicolon.
fn hex_complete(candidate: &str) -> bool {
    let Some(digits) = strip_semicolon(candidate).strip_prefix('#') else {
        return false;
    };
    HEX_DIGIT_COUNTS.contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

fn rgb_complete(candidate: &str) -> bool {
    candidate.ends_with(')') || candidate.ends_with(");")
}

fn is_hex_fragment(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_blank(token: &str) -> bool {
    token.trim().is_empty()
}

fn is_numeric(token: &str) -> bool {
    token.trim().parse::<f64>().is_ok()
}

fn is_comma(token: &str) -> bool {
    token.trim() == ","
}

fn is_open_paren(token: &str) -> bool {
    token == "("
}
