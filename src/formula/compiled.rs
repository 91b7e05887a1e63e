use crate::{
    ast::Expr,
    error::{EvalError, ParseError},
    formula::{evaluator::eval_expr, parser::core::parse_formula},
};

/// The validated, immutable form of a formula.
///
/// A `CompiledExpression` owns the AST produced by the parser together with
/// the highest variable index the formula references, which is used to
/// validate that an input vector is long enough. It holds no mutable state,
/// so one compiled formula can be reused across many evaluations and shared
/// freely between threads.
///
/// ## Example
/// ```
/// use pointcalc::CompiledExpression;
///
/// let expr = CompiledExpression::compile("x1 + x2").unwrap();
///
/// assert_eq!(expr.evaluate(&[2.0, 3.0]).unwrap(), 5.0);
/// assert_eq!(expr.evaluate(&[10.0, -4.0]).unwrap(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpression {
    root:         Expr,
    /// Highest-indexed variable in the formula, as a
    /// `(zero-based index, byte offset)` pair. `None` for constant formulas.
    max_variable: Option<(usize, usize)>,
}

impl CompiledExpression {
    /// Compiles a formula string.
    ///
    /// Parsing happens exactly once; the result can then be evaluated any
    /// number of times against different coordinate vectors.
    ///
    /// # Parameters
    /// - `formula`: The formula text, e.g. `"x1 * sin(x2)"`.
    ///
    /// # Errors
    /// Returns a `ParseError` if the formula is not a well-formed expression
    /// of the grammar.
    pub fn compile(formula: &str) -> Result<Self, ParseError> {
        let root = parse_formula(formula)?;
        let max_variable = max_variable(&root);
        Ok(Self { root, max_variable })
    }

    /// The number of coordinates the formula requires, i.e. the highest
    /// one-based variable index it references. Zero for constant formulas.
    ///
    /// ## Example
    /// ```
    /// use pointcalc::CompiledExpression;
    ///
    /// let expr = CompiledExpression::compile("x2 + x7").unwrap();
    ///
    /// assert_eq!(expr.max_variable_index(), 7);
    /// ```
    #[must_use]
    pub fn max_variable_index(&self) -> usize {
        self.max_variable.map_or(0, |(index, _)| index + 1)
    }

    /// Checks that an input vector of length `len` covers every variable the
    /// formula references.
    ///
    /// # Errors
    /// Returns `EvalError::MissingVariable` for the highest-indexed variable
    /// if `len` is too small.
    pub fn check_input_len(&self, len: usize) -> Result<(), EvalError> {
        match self.max_variable {
            Some((index, pos)) if len <= index => Err(EvalError::MissingVariable { index, pos }),
            _ => Ok(()),
        }
    }

    /// Evaluates the compiled formula against a coordinate vector.
    ///
    /// Evaluation is deterministic and side-effect-free: repeated calls with
    /// identical inputs yield bit-identical results. Non-finite outcomes
    /// (infinities, NaN) are returned as values.
    ///
    /// # Parameters
    /// - `values`: Coordinate vector; slot `i` backs variable `x<i+1>`.
    ///
    /// # Errors
    /// Returns `EvalError::MissingVariable` if `values` is shorter than
    /// [`Self::max_variable_index`].
    pub fn evaluate(&self, values: &[f64]) -> Result<f64, EvalError> {
        self.check_input_len(values.len())?;
        eval_expr(&self.root, values)
    }
}

/// Finds the highest-indexed variable in an expression tree.
///
/// Returns the `(zero-based index, byte offset)` of its occurrence, or
/// `None` if the expression references no variables.
fn max_variable(expr: &Expr) -> Option<(usize, usize)> {
    match expr {
        Expr::Literal { .. } => None,
        Expr::Variable { index, pos } => Some((*index, *pos)),
        Expr::UnaryOp { expr, .. } => max_variable(expr),
        Expr::BinaryOp { left, right, .. } => merge(max_variable(left), max_variable(right)),
        Expr::Call { arguments, .. } => {
            arguments.iter().map(max_variable).fold(None, merge)
        },
    }
}

/// Combines two optional variable occurrences, keeping the higher index.
const fn merge(a: Option<(usize, usize)>, b: Option<(usize, usize)>) -> Option<(usize, usize)> {
    match (a, b) {
        (Some(x), Some(y)) => {
            if y.0 > x.0 {
                Some(y)
            } else {
                Some(x)
            }
        },
        (Some(x), None) => Some(x),
        (None, y) => y,
    }
}
