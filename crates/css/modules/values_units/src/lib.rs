//! CSS Values and Units Module Level 3: numbers, lengths, and device density scales.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

// Chapter modules mirror the CSS Values table of contents; `density` covers the
// dp/sp scales that sit outside it.
pub mod chapter_4_numbers;
pub mod chapter_6_dimensions;
pub mod density;

pub use chapter_4_numbers::{Number, parse_number, parse_number_str};
pub use chapter_6_dimensions::{
    Length, LengthUnit, compute_length_px, parse_length, parse_length_str,
};
pub use density::{
    CSS_PX_PER_INCH, DP_PER_INCH, DensityScale, DevicePixelRatio, SP_PER_INCH, px_per_dp,
    px_per_sp,
};

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
}
