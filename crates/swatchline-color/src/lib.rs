#![forbid(unsafe_code)]

//! Color-literal validation for the swatch pass.
//!
//! The pass only needs three yes/no questions, captured by [`ColorOracle`];
//! the bundled [`CssOracle`] answers them for CSS-style literals. Oracles
//! must be pure and reentrant: one oracle value may serve any number of
//! lines processed concurrently.
//!
//! # Example
//! ```
//! use swatchline_color::{ColorOracle, CssOracle};
//!
//! let oracle = CssOracle;
//! assert!(oracle.is_valid_hex("#ff7b72"));
//! assert!(oracle.is_valid_rgb("rgb(255, 123, 114)"));
//! assert!(oracle.is_valid_named_color("rebeccapurple"));
//! assert!(!oracle.is_valid_hex("#ff7b7"));
//! ```

mod named;
mod parse;

pub use named::is_named_color;
pub use parse::{ColorParseError, parse_hex, parse_rgb};

/// Validity checks the swatch pass depends on.
///
/// Implementations must be side-effect free; the pass calls them from
/// whatever thread is processing the line.
pub trait ColorOracle {
    /// Whether `s` is a complete hex color literal.
    fn is_valid_hex(&self, s: &str) -> bool;
    /// Whether `s` is a complete `rgb()`/`rgba()` literal.
    fn is_valid_rgb(&self, s: &str) -> bool;
    /// Whether `s` is a recognized color name.
    fn is_valid_named_color(&self, s: &str) -> bool;
}

impl<T: ColorOracle + ?Sized> ColorOracle for &T {
    fn is_valid_hex(&self, s: &str) -> bool {
        (**self).is_valid_hex(s)
    }

    fn is_valid_rgb(&self, s: &str) -> bool {
        (**self).is_valid_rgb(s)
    }

    fn is_valid_named_color(&self, s: &str) -> bool {
        (**self).is_valid_named_color(s)
    }
}

/// Default oracle for CSS color literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CssOracle;

impl ColorOracle for CssOracle {
    fn is_valid_hex(&self, s: &str) -> bool {
        parse::parse_hex(s).is_ok()
    }

    fn is_valid_rgb(&self, s: &str) -> bool {
        parse::parse_rgb(s).is_ok()
    }

    fn is_valid_named_color(&self, s: &str) -> bool {
        named::is_named_color(s)
    }
}
