//! CSS Values & Units Level 3: §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

use crate::ParseError;
use cssparser::{Parser, ParserInput, Token};

/// A CSS <number>, widened to double precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f64);

/// Parse a CSS <number> (§4.2). Accepts integer or real numbers.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<number>`.
pub fn parse_number(input: &mut Parser) -> Result<Number, ParseError> {
    input.skip_whitespace();
    match input.next() {
        Ok(&Token::Number { value, .. }) => Ok(Number(f64::from(value))),
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a whole string as a single <number>, such as the value of `--px-per-dp`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the text is not exactly one `<number>`.
pub fn parse_number_str(text: &str) -> Result<Number, ParseError> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let number = parse_number(&mut parser)?;
    parser
        .expect_exhausted()
        .map_err(|_| ParseError::UnexpectedToken)?;
    Ok(number)
}
