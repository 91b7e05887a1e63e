use crate::formula::functions::Arity;

#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// Byte offset in the formula where the error occurred.
        pos:   usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// Byte offset in the formula where the error occurred.
        pos: usize,
    },
    /// A parenthesis was opened but never closed, or closed without being
    /// opened.
    UnbalancedParens {
        /// Byte offset of the offending parenthesis.
        pos: usize,
    },
    /// Called a function that is not on the allow-list.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// Byte offset in the formula where the error occurred.
        pos:  usize,
    },
    /// A variable index outside the valid range. Variables are one-based:
    /// `x0` never refers to anything.
    InvalidVariableIndex {
        /// The index as written in the formula.
        index: u64,
        /// Byte offset in the formula where the error occurred.
        pos:   usize,
    },
    /// A function was called with the wrong number of arguments.
    WrongArgumentCount {
        /// The name of the function.
        name:     String,
        /// The number of arguments the function accepts.
        expected: Arity,
        /// The number of arguments actually supplied.
        found:    usize,
        /// Byte offset in the formula where the error occurred.
        pos:      usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// Byte offset in the formula where the error occurred.
        pos:   usize,
    },
    /// A coordinate in a point string is not a valid number.
    InvalidNumber {
        /// The offending text.
        text:  String,
        /// One-based position of the coordinate within the point string.
        index: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, pos } => {
                write!(f, "Error at offset {pos}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { pos } => {
                write!(f, "Error at offset {pos}: Unexpected end of input.")
            },

            Self::UnbalancedParens { pos } => {
                write!(f, "Error at offset {pos}: Unbalanced parentheses.")
            },

            Self::UnknownFunction { name, pos } => {
                write!(f, "Error at offset {pos}: Unknown function '{name}'.")
            },

            Self::InvalidVariableIndex { index, pos } => write!(f,
                                                                "Error at offset {pos}: Invalid variable index {index}. Variables start at x1."),

            Self::WrongArgumentCount { name,
                                       expected,
                                       found,
                                       pos, } => write!(f,
                                                        "Error at offset {pos}: Function '{name}' expects {expected} argument(s), found {found}."),

            Self::UnexpectedTrailingTokens { token, pos } => write!(f,
                                                                    "Error at offset {pos}: Extra tokens after the expression: {token}."),

            Self::InvalidNumber { text, index } => {
                write!(f, "Coordinate {index}: '{text}' is not a valid number.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
