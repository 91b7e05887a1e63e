use crate::error::EvalError;

#[derive(Debug)]
/// Represents all errors that can occur during dataset generation.
pub enum GeneratorError {
    /// The requested dimension is not a positive number.
    InvalidDimension {
        /// The dimension that was requested.
        dimension: usize,
    },
    /// The requested point count is not a positive number.
    InvalidCount {
        /// The count that was requested.
        count: usize,
    },
    /// The sampling interval is empty or not finite.
    InvalidBounds {
        /// Lower bound of the sampling interval.
        min: f64,
        /// Upper bound of the sampling interval.
        max: f64,
    },
    /// Evaluating the formula against a sampled point failed.
    Eval(EvalError),
    /// Writing the dataset failed.
    Io(std::io::Error),
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimension { dimension } => {
                write!(f, "Invalid dimension {dimension}: must be at least 1.")
            },

            Self::InvalidCount { count } => {
                write!(f, "Invalid point count {count}: must be at least 1.")
            },

            Self::InvalidBounds { min, max } => write!(f,
                                                       "Invalid sampling bounds [{min}, {max}]: bounds must be finite with min <= max."),

            Self::Eval(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "Failed to write the dataset: {e}"),
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Eval(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EvalError> for GeneratorError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl From<std::io::Error> for GeneratorError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
