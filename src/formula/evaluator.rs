use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression against a coordinate vector.
///
/// Evaluation is a pure recursive reduction over the AST: literals return
/// their value, variables index into `values`, unary and binary operators
/// combine recursively evaluated operands, and calls evaluate all arguments
/// left to right before applying the function.
///
/// Arithmetic follows IEEE-754 double precision. Division by zero produces
/// an infinity or NaN and propagates as a value; domain errors in functions
/// (`sqrt` of a negative, `log` of a non-positive) produce NaN. Callers that
/// want to reject non-finite results can do so downstream.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `values`: Coordinate vector; slot `i` backs variable `x<i+1>`.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// Returns `EvalError::MissingVariable` if the expression references a
/// variable with no corresponding slot in `values`.
pub fn eval_expr(expr: &Expr, values: &[f64]) -> EvalResult<f64> {
    match expr {
        Expr::Literal { value, .. } => Ok(*value),
        Expr::Variable { index, pos } => {
            values.get(*index)
                  .copied()
                  .ok_or(EvalError::MissingVariable { index: *index,
                                                      pos:   *pos, })
        },
        Expr::UnaryOp { op, expr, .. } => Ok(apply_unary(*op, eval_expr(expr, values)?)),
        Expr::BinaryOp { left, op, right, .. } => {
            let left = eval_expr(left, values)?;
            let right = eval_expr(right, values)?;
            Ok(apply_binary(*op, left, right))
        },
        Expr::Call { function, arguments, .. } => {
            let mut args = Vec::with_capacity(arguments.len());
            for argument in arguments {
                args.push(eval_expr(argument, values)?);
            }
            Ok(function.apply(&args))
        },
    }
}

/// Applies a unary operator to an evaluated operand.
const fn apply_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Negate => -value,
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// Division by zero is not special-cased: `1/0` is infinity and `0/0` is
/// NaN, per IEEE-754.
fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
        BinaryOperator::Pow => left.powf(right),
    }
}
