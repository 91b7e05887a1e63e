/// The lexer module tokenizes formula strings for further parsing.
///
/// The lexer reads the raw formula text and produces a stream of tokens,
/// each corresponding to a meaningful element such as a number literal, a
/// positional variable, an operator, or a parenthesis. This is the first
/// stage of compilation.
///
/// # Responsibilities
/// - Converts the formula character stream into tokens.
/// - Handles numeric literals, variables (`x<digits>`), and identifiers.
/// - Rejects characters outside the formula alphabet.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of the
/// formula. No dynamic code is ever constructed or executed: the grammar is
/// closed, and everything outside it is rejected with a position-carrying
/// error.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces operator precedence and associativity.
/// - Resolves function names against the allow-list at parse time.
pub mod parser;
/// The evaluator module reduces AST nodes to numeric results.
///
/// Evaluation is a pure structural recursion: literals return their value,
/// variables index into the coordinate vector, operators and functions
/// combine recursively evaluated operands. There is no shared mutable state,
/// so the same expression can be evaluated concurrently.
///
/// # Responsibilities
/// - Reduces an AST to an `f64` given a coordinate vector.
/// - Propagates IEEE-754 edge cases (infinities, NaN) as values.
/// - Reports missing coordinates with the variable's source offset.
pub mod evaluator;
/// The functions module defines the fixed function allow-list.
///
/// Every function a formula may call is declared here, together with its
/// name, its arity, and its implementation over `f64` arguments. The parser
/// resolves call sites against this table, so unknown names and wrong
/// argument counts are compile-time errors, never runtime surprises.
pub mod functions;
/// The compiled module defines the reusable compiled form of a formula.
///
/// A [`CompiledExpression`](compiled::CompiledExpression) owns the validated
/// AST and knows the highest variable index the formula references. It is
/// immutable after construction and safe to share across threads.
pub mod compiled;
