//! CSS Values & Units Level 3: §6 Dimensions (lengths subset plus `dp`/`sp`)
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>
//!
//! `dp` and `sp` are not CSS units. Stylesheets express them as
//! `calc(<n> * var(--px-per-dp))`; this module resolves the same quantities host-side.

use crate::ParseError;
use crate::density::DensityScale;
use cssparser::{Parser, ParserInput, Token};

/// Supported length units: CSS pixels plus the two density-derived units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Pixels,
    DensityIndependent,
    ScaleIndependent,
}

/// A length value with unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

/// Compute physical pixels for a `Length` under the given density scale.
///
/// - Pixels: returns the raw value.
/// - `dp`/`sp`: multiplies by the matching factor.
#[must_use]
pub fn compute_length_px(length: Length, scale: DensityScale) -> f64 {
    match length.unit {
        LengthUnit::Pixels => length.value,
        LengthUnit::DensityIndependent => length.value * scale.px_per_dp,
        LengthUnit::ScaleIndependent => length.value * scale.px_per_sp,
    }
}

/// Parse a length: `<number>px`, `<number>dp`, `<number>sp`, or unitless zero.
/// Unit names are ASCII case-insensitive.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a supported length.
pub fn parse_length(input: &mut Parser) -> Result<Length, ParseError> {
    input.skip_whitespace();
    let token = input.next().map_err(|_| ParseError::UnexpectedToken)?;
    match token {
        Token::Dimension { value, unit, .. } => {
            let unit_kind = match unit.to_ascii_lowercase().as_str() {
                "px" => LengthUnit::Pixels,
                "dp" => LengthUnit::DensityIndependent,
                "sp" => LengthUnit::ScaleIndependent,
                _ => return Err(ParseError::UnexpectedToken),
            };
            Ok(Length {
                value: f64::from(*value),
                unit: unit_kind,
            })
        }
        Token::Number { value: 0.0, .. } => Ok(Length {
            value: 0.0,
            unit: LengthUnit::Pixels,
        }),
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a whole string as a single length.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the text is not exactly one supported length.
pub fn parse_length_str(text: &str) -> Result<Length, ParseError> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let length = parse_length(&mut parser)?;
    parser
        .expect_exhausted()
        .map_err(|_| ParseError::UnexpectedToken)?;
    Ok(length)
}
