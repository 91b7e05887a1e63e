//! Single-point evaluation: one coordinate vector, one formula, one value.

use crate::{error::ParseError, formula::compiled::CompiledExpression};

/// Parses a whitespace-separated list of floating-point coordinates.
///
/// # Parameters
/// - `input`: The point string, e.g. `"1.5 -2 3e2"`.
///
/// # Returns
/// The coordinates in input order.
///
/// # Errors
/// Returns `ParseError::InvalidNumber` carrying the offending text and its
/// one-based position if any token is not a valid float.
///
/// # Example
/// ```
/// use pointcalc::point::parse_coordinates;
///
/// let coords = parse_coordinates("1 2.5 -3").unwrap();
/// assert_eq!(coords, vec![1.0, 2.5, -3.0]);
///
/// assert!(parse_coordinates("1 two 3").is_err());
/// ```
pub fn parse_coordinates(input: &str) -> Result<Vec<f64>, ParseError> {
    input.split_whitespace()
         .enumerate()
         .map(|(i, text)| {
             text.parse()
                 .map_err(|_| ParseError::InvalidNumber { text:  text.to_string(),
                                                          index: i + 1, })
         })
         .collect()
}

/// Evaluates a formula at a single point.
///
/// The formula is compiled once and evaluated once; this is the library
/// entry point behind the `eval` subcommand.
///
/// # Parameters
/// - `point`: Whitespace-separated coordinates.
/// - `formula`: The formula text.
///
/// # Errors
/// Returns an error if the point string contains a malformed number, the
/// formula does not parse, or the point has fewer coordinates than the
/// formula references.
///
/// # Example
/// ```
/// use pointcalc::point;
///
/// let value = point::evaluate("2 3", "x1 + x2").unwrap();
/// assert_eq!(value, 5.0);
/// ```
pub fn evaluate(point: &str, formula: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let values = parse_coordinates(point)?;
    let expr = CompiledExpression::compile(formula)?;
    Ok(expr.evaluate(&values)?)
}
