use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    formula::{
        functions::{Function, constant},
        lexer::Token,
        parser::{
            binary::token_to_binary_operator,
            core::{ParseResult, parse_expression},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Unary operators are
/// right-associative, so an input like `--x1` is parsed as `-(-x1)`.
///
/// Negation binds tighter than multiplication but looser than
/// exponentiation, so `-x1^2` is `-(x1^2)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | exponent
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or an exponent-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, pos)) = tokens.peek() {
        let pos = *pos;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           pos })
    } else {
        parse_exponent(tokens)
    }
}

/// Parses an exponentiation expression.
///
/// Exponentiation is right-associative: `x1 ^ 2 ^ 3` parses as
/// `x1 ^ (2 ^ 3)`. The right-hand side re-enters [`parse_unary`], which both
/// produces the right associativity and allows a negated exponent
/// (`x1 ^ -2`).
///
/// The rule is: `exponent := primary (("^" | "**") unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An exponentiation expression tree.
pub(crate) fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_primary(tokens)?;
    if let Some((token, pos)) = tokens.peek()
       && let Some(op) = token_to_binary_operator(token)
       && matches!(op, BinaryOperator::Pow)
    {
        let pos = *pos;
        tokens.next();
        let right = parse_unary(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op,
                                   right: Box::new(right),
                                   pos });
    }
    Ok(left)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar and include:
/// - numeric literals
/// - positional variables (`x1`, `x2`, ...)
/// - named constants (`pi`, `e`, `tau`)
/// - function calls from the allow-list
/// - parenthesized sub-expressions
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER
///              | VARIABLE
///              | identifier_or_call
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { pos: 0 })?;

    match peeked {
        (Token::Number(_), _) => parse_literal(tokens),
        (Token::Variable(_), _) => parse_variable(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::RParen, pos) => Err(ParseError::UnbalancedParens { pos: *pos }),
        (tok, pos) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                        pos:   *pos, }),
    }
}

/// Parses a numeric literal.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a number.
///
/// # Returns
/// An [`Expr::Literal`] containing the parsed value.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), pos)) => Ok(Expr::Literal { value: *n,
                                                            pos:   *pos, }),
        _ => unreachable!(),
    }
}

/// Parses a positional variable reference.
///
/// The surface syntax is one-based (`x1` is the first coordinate); the
/// index is converted to a zero-based slot here. `x0` does not refer to
/// anything and is rejected at parse time, as is an index too large to be a
/// valid slot.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a variable.
///
/// # Returns
/// An [`Expr::Variable`] with the zero-based index.
///
/// # Errors
/// Returns `ParseError::InvalidVariableIndex` for `x0` or an index that
/// does not fit in `usize`.
fn parse_variable<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Variable(raw), pos)) => {
            let index = usize::try_from(*raw).ok()
                                             .and_then(|i| i.checked_sub(1))
                                             .ok_or(ParseError::InvalidVariableIndex { index: *raw,
                                                                                       pos:   *pos, })?;
            Ok(Expr::Variable { index, pos: *pos })
        },
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::UnbalancedParens` pointing at the
/// opening one.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, pos) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::UnbalancedParens { pos }),
    }
}

/// Parses an identifier: a function call or a named constant.
///
/// If the identifier is followed by `(`, it must name an allow-listed
/// function; the call's arguments are parsed and the argument count is
/// checked against the function's arity. Otherwise the identifier must be a
/// named constant, which is substituted with its literal value.
///
/// No other identifiers exist in the language, so anything unresolved is a
/// parse error and names never leak into the AST.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// - [`Expr::Call`] if followed by parentheses,
/// - [`Expr::Literal`] for a named constant.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is not on the function allow-list,
/// - the argument count does not satisfy the function's arity,
/// - a bare identifier is not a known constant.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, pos) = match tokens.next() {
        Some((Token::Identifier(n), pos)) => (n.clone(), *pos),
        _ => unreachable!(),
    };

    match tokens.peek() {
        Some((Token::LParen, lparen_pos)) => {
            let lparen_pos = *lparen_pos;
            tokens.next();

            let Some(function) = Function::resolve(&name) else {
                return Err(ParseError::UnknownFunction { name, pos });
            };

            let arguments = parse_call_arguments(tokens, lparen_pos)?;
            if !function.arity().check(arguments.len()) {
                return Err(ParseError::WrongArgumentCount { name,
                                                            expected: function.arity(),
                                                            found: arguments.len(),
                                                            pos });
            }

            Ok(Expr::Call { function,
                            arguments,
                            pos })
        },

        _ => match constant(&name) {
            Some(value) => Ok(Expr::Literal { value, pos }),
            None => Err(ParseError::UnexpectedToken { token: name, pos }),
        },
    }
}

/// Parses the comma-separated argument list of a function call.
///
/// The opening `(` has already been consumed. Arguments are parsed with
/// [`parse_expression`] until the closing `)`. An immediately encountered
/// `)` produces an empty list (the arity check rejects it afterwards, since
/// no allow-listed function is nullary).
///
/// Grammar: `arguments := ")" | expression ("," expression)* ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `lparen_pos`: Byte offset of the opening parenthesis, for unbalanced
///   reports.
///
/// # Returns
/// The parsed argument expressions in source order.
///
/// # Errors
/// Returns a `ParseError` if an argument fails to parse, a separator is
/// malformed, or the input ends before the closing `)`.
fn parse_call_arguments<'a, I>(tokens: &mut Peekable<I>,
                               lparen_pos: usize)
                               -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut arguments = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();

        return Ok(arguments);
    }
    loop {
        arguments.push(parse_expression(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((tok, pos)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or ')', found {tok:?}"),
                                                         pos:   *pos, });
            },
            None => return Err(ParseError::UnbalancedParens { pos: lparen_pos }),
        }
    }
    Ok(arguments)
}
