#![forbid(unsafe_code)]

//! Fallible parsing behind the default oracle.
//!
//! The swatch pass never sees these errors; [`CssOracle`](crate::CssOracle)
//! collapses them to booleans. They exist so the validation rules stay
//! testable and diagnosable on their own.

use std::fmt;

/// Reasons a candidate literal fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Missing the leading `#`.
    MissingHash,
    /// Hex digit count outside {3, 4, 6, 8}.
    HexLength { len: usize },
    /// A character that is not an ASCII hex digit.
    HexDigit { ch: char },
    /// Not an `rgb(` / `rgba(` function.
    NotRgbFunction,
    /// Missing the closing paren.
    Unterminated,
    /// Wrong number of components for the function form.
    ComponentCount { found: usize, expected: usize },
    /// A channel that is not an unsigned integer.
    Component { text: String },
    /// An integer channel above 255.
    ComponentRange { value: u32 },
    /// An alpha value that is not a digit or a digit-dot-digits decimal.
    Alpha { text: String },
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash => write!(f, "hex literal must start with '#'"),
            Self::HexLength { len } => {
                write!(f, "hex literal has {} digits, expected 3, 4, 6 or 8", len)
            }
            Self::HexDigit { ch } => write!(f, "'{}' is not a hex digit", ch),
            Self::NotRgbFunction => write!(f, "expected rgb(...) or rgba(...)"),
            Self::Unterminated => write!(f, "missing closing paren"),
            Self::ComponentCount { found, expected } => {
                write!(f, "found {} components, expected {}", found, expected)
            }
            Self::Component { text } => write!(f, "invalid channel '{}'", text),
            Self::ComponentRange { value } => {
                write!(f, "channel {} is out of range (0-255)", value)
            }
            Self::Alpha { text } => write!(f, "invalid alpha '{}'", text),
        }
    }
}

impl std::error::Error for ColorParseError {}

const HEX_DIGIT_COUNTS: [usize; 4] = [3, 4, 6, 8];

/// Validate a `#rgb` / `#rgba` / `#rrggbb` / `#rrggbbaa` literal.
pub fn parse_hex(s: &str) -> Result<(), ColorParseError> {
    let digits = s.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
    if let Some(ch) = digits.chars().find(|ch| !ch.is_ascii_hexdigit()) {
        return Err(ColorParseError::HexDigit { ch });
    }
    if !HEX_DIGIT_COUNTS.contains(&digits.len()) {
        return Err(ColorParseError::HexLength { len: digits.len() });
    }
    Ok(())
}

/// Validate an `rgb(r, g, b)` or `rgba(r, g, b, a)` literal.
///
/// Channels are unsigned integers in 0-255, with optional whitespace around
/// each component. The alpha shape is deliberately loose: any single digit,
/// or a decimal with one leading digit and a fractional part, passes with
/// no range check, so `5` and `1.5` are accepted.
pub fn parse_rgb(s: &str) -> Result<(), ColorParseError> {
    let (body, expected) = if let Some(rest) = s.strip_prefix("rgba(") {
        (rest, 4)
    } else if let Some(rest) = s.strip_prefix("rgb(") {
        (rest, 3)
    } else {
        return Err(ColorParseError::NotRgbFunction);
    };
    let body = body.strip_suffix(')').ok_or(ColorParseError::Unterminated)?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return Err(ColorParseError::ComponentCount {
            found: parts.len(),
            expected,
        });
    }

    for part in &parts[..3] {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ColorParseError::Component {
                text: (*part).to_string(),
            });
        }
        let value: u32 = part.parse().map_err(|_| ColorParseError::Component {
            text: (*part).to_string(),
        })?;
        if value > 255 {
            return Err(ColorParseError::ComponentRange { value });
        }
    }

    if expected == 4 && !is_loose_alpha(parts[3]) {
        return Err(ColorParseError::Alpha {
            text: parts[3].to_string(),
        });
    }

    Ok(())
}

fn is_loose_alpha(s: &str) -> bool {
    match s.as_bytes() {
        [d] => d.is_ascii_digit(),
        [d, b'.', rest @ ..] => {
            d.is_ascii_digit() && !rest.is_empty() && rest.iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Hex
    // ==========================================================================

    #[test]
    fn hex_accepts_every_valid_digit_count() {
        for s in ["#fff", "#fffa", "#ff0000", "#ff0000aa"] {
            assert_eq!(parse_hex(s), Ok(()), "{s}");
        }
    }

    #[test]
    fn hex_accepts_mixed_case() {
        assert_eq!(parse_hex("#AbCdEf"), Ok(()));
    }

    #[test]
    fn hex_rejects_missing_hash() {
        assert_eq!(parse_hex("ff0000"), Err(ColorParseError::MissingHash));
    }

    #[test]
    fn hex_rejects_odd_digit_counts() {
        assert_eq!(parse_hex("#ff0f0"), Err(ColorParseError::HexLength { len: 5 }));
        assert_eq!(parse_hex("#"), Err(ColorParseError::HexLength { len: 0 }));
        assert_eq!(
            parse_hex("#ff0000aaf"),
            Err(ColorParseError::HexLength { len: 9 })
        );
    }

    #[test]
    fn hex_rejects_non_hex_digits() {
        assert_eq!(parse_hex("#ggg"), Err(ColorParseError::HexDigit { ch: 'g' }));
        assert_eq!(
            parse_hex("#ff00;"),
            Err(ColorParseError::HexDigit { ch: ';' })
        );
    }

    // ==========================================================================
    // rgb / rgba
    // ==========================================================================

    #[test]
    fn rgb_accepts_plain_and_spaced_forms() {
        for s in ["rgb(0,0,0)", "rgb(255, 128, 0)", "rgb(1,  2,   3)"] {
            assert_eq!(parse_rgb(s), Ok(()), "{s}");
        }
    }

    #[test]
    fn rgba_accepts_four_components() {
        for s in ["rgba(0,0,0,0)", "rgba(255, 0, 0, 1)", "rgba(10,20,30,0.25)"] {
            assert_eq!(parse_rgb(s), Ok(()), "{s}");
        }
    }

    #[test]
    fn alpha_stays_loose_by_design() {
        // Shape check only: single digit or digit-dot-digits.
        assert_eq!(parse_rgb("rgba(0,0,0,5)"), Ok(()));
        assert_eq!(parse_rgb("rgba(0,0,0,1.5)"), Ok(()));
    }

    #[test]
    fn alpha_rejects_bad_shapes() {
        assert!(matches!(
            parse_rgb("rgba(0,0,0,.5)"),
            Err(ColorParseError::Alpha { .. })
        ));
        assert!(matches!(
            parse_rgb("rgba(0,0,0,0.)"),
            Err(ColorParseError::Alpha { .. })
        ));
        assert!(matches!(
            parse_rgb("rgba(0,0,0,12)"),
            Err(ColorParseError::Alpha { .. })
        ));
    }

    #[test]
    fn rgb_rejects_out_of_range_channels() {
        assert_eq!(
            parse_rgb("rgb(256,0,0)"),
            Err(ColorParseError::ComponentRange { value: 256 })
        );
        assert!(matches!(
            parse_rgb("rgb(999,999,999,999)"),
            Err(ColorParseError::ComponentCount {
                found: 4,
                expected: 3
            })
        ));
    }

    #[test]
    fn rgb_rejects_component_count_mismatch() {
        assert!(matches!(
            parse_rgb("rgba(0,0,0)"),
            Err(ColorParseError::ComponentCount {
                found: 3,
                expected: 4
            })
        ));
    }

    #[test]
    fn rgb_rejects_non_integer_channels() {
        assert!(matches!(
            parse_rgb("rgb(+1,0,0)"),
            Err(ColorParseError::Component { .. })
        ));
        assert!(matches!(
            parse_rgb("rgb(a,0,0)"),
            Err(ColorParseError::Component { .. })
        ));
        assert!(matches!(
            parse_rgb("rgb(,0,0)"),
            Err(ColorParseError::Component { .. })
        ));
    }

    #[test]
    fn rgb_rejects_wrong_function_or_missing_paren() {
        assert_eq!(parse_rgb("hsl(0,0,0)"), Err(ColorParseError::NotRgbFunction));
        assert_eq!(parse_rgb("rgb(0,0,0"), Err(ColorParseError::Unterminated));
    }

    #[test]
    fn errors_render_readable_messages() {
        let err = ColorParseError::HexLength { len: 5 };
        assert_eq!(err.to_string(), "hex literal has 5 digits, expected 3, 4, 6 or 8");
        let err = ColorParseError::ComponentRange { value: 300 };
        assert_eq!(err.to_string(), "channel 300 is out of range (0-255)");
    }
}
