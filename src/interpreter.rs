/// The evaluator module reduces a token stream to a single integer.
///
/// The evaluator keeps an operand stack and an operator stack, resolves
/// operator precedence and parenthesized groups, and applies each binary
/// operator as soon as its operands are known.
///
/// # Responsibilities
/// - Drives reductions on operator precedence and on `)`.
/// - Drains both stacks at the end of input.
/// - Reports underflow, malformed input, division by zero and overflow.
pub mod evaluator;
/// The lexer module tokenizes expressions for the evaluator.
///
/// The lexer reads the raw source text and produces a lazy stream of tokens:
/// integer literals, the four arithmetic operators and parentheses. Whitespace
/// is skipped.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their byte offset.
/// - Parses integer literals, reporting those that do not fit into an `i64`.
/// - Rejects or skips unrecognized characters depending on configuration.
pub mod lexer;
