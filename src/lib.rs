//! # pointcalc
//!
//! pointcalc evaluates arithmetic formulas over coordinate points and
//! generates randomized test datasets from them. Formulas use positional
//! variables (`x1`, `x2`, ...) together with a fixed set of operators and
//! mathematical functions; a formula is compiled once into an immutable
//! expression and then evaluated any number of times against different
//! coordinate vectors. The grammar is closed: no dynamic code is ever
//! constructed or executed, and everything outside the grammar is rejected
//! with a position-carrying error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed formulas.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of a formula as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all formula constructs.
/// - Attaches source offsets to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing, evaluation, and generation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a formula, and while generating datasets. It standardizes
/// error reporting and carries the offending source position with every
/// failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// The formula pipeline: lexer, parser, function allow-list, evaluator, and
/// the compiled expression form.
///
/// # Responsibilities
/// - Coordinates the compilation stages: tokens, AST, compiled expression.
/// - Provides the pure evaluator that reduces an AST to a value.
/// - Defines the closed function and constant vocabulary.
pub mod formula;
/// Randomized dataset generation.
///
/// Samples coordinate points uniformly within configured bounds, evaluates
/// a compiled formula against each, and writes the resulting dataset.
pub mod generator;
/// Single-point evaluation.
///
/// Parses one coordinate vector from text and evaluates a formula at it.
pub mod point;

pub use formula::compiled::CompiledExpression;

use crate::error::ParseError;

/// Compiles a formula string into a reusable [`CompiledExpression`].
///
/// This is a convenience wrapper around
/// [`CompiledExpression::compile`]; the compiled form is immutable and can
/// be evaluated repeatedly and concurrently.
///
/// # Errors
/// Returns an error if the formula is not a well-formed expression of the
/// grammar.
///
/// # Examples
/// ```
/// use pointcalc::compile;
///
/// let expr = compile("x1 * x1").unwrap();
/// assert_eq!(expr.evaluate(&[4.0]).unwrap(), 16.0);
///
/// // `x0` is invalid: variables are one-based.
/// assert!(compile("x0 + 1").is_err());
/// ```
pub fn compile(formula: &str) -> Result<CompiledExpression, ParseError> {
    CompiledExpression::compile(formula)
}
