#[derive(Debug)]
/// Represents all errors that can occur while evaluating a compiled
/// expression.
///
/// Numeric edge cases are deliberately absent: division by zero and domain
/// errors in functions like `sqrt` or `log` produce IEEE-754 infinities or
/// NaN, which propagate as ordinary values.
pub enum EvalError {
    /// The coordinate vector is shorter than a variable in the formula
    /// requires.
    MissingVariable {
        /// Zero-based index of the variable slot that had no value.
        index: usize,
        /// Byte offset of the variable in the formula.
        pos:   usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingVariable { index, pos } => write!(f,
                                                           "Error at offset {pos}: No value supplied for variable 'x{}'.",
                                                           index + 1),
        }
    }
}

impl std::error::Error for EvalError {}
