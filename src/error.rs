/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing a formula
/// or a coordinate string. Parse errors include syntax mistakes, unexpected
/// tokens, invalid variable indices, and any other issues detected before
/// evaluation.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error types that can be raised while reducing a compiled
/// expression against a coordinate vector. Non-finite results (infinities,
/// NaN) are ordinary values, not errors; the only evaluation failure is a
/// coordinate vector that is too short for the variables a formula uses.
pub mod eval_error;
/// Dataset generation errors.
///
/// Errors raised by the dataset generator: invalid dimension, count, or
/// sampling bounds, plus propagated evaluation and I/O failures.
pub mod generator_error;

pub use eval_error::EvalError;
pub use generator_error::GeneratorError;
pub use parse_error::ParseError;
