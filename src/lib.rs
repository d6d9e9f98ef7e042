//! # stackeval
//!
//! stackeval evaluates integer arithmetic expressions such as `100*(2+12)/14`.
//! Expressions are made of non-negative integer literals, the operators
//! `+ - * /`, parentheses and whitespace. Evaluation is direct: tokens are fed
//! into an operand stack and an operator stack and reduced on the fly, with no
//! syntax tree in between.

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

use log::debug;

use crate::{
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::tokenize,
    },
    options::Options,
};

/// Provides the error type returned by evaluation.
///
/// This module defines every error that can be raised while tokenizing or
/// reducing an expression, together with the byte offset where it occurred.
///
/// # Responsibilities
/// - Defines the `EvalError` enum and its fieldless `ErrorKind` category.
/// - Renders human readable messages through `Display`.
pub mod error;
/// Tokenizer and dual-stack evaluator.
///
/// This module ties the lexer and the evaluator together. The lexer produces a
/// lazy token stream, the evaluator consumes it one token at a time.
pub mod interpreter;
/// Binary operators and their precedence table.
pub mod operator;
/// Evaluation settings.
pub mod options;

/// Evaluates an arithmetic expression with the default [`Options`].
///
/// Unrecognized characters are rejected.
///
/// # Errors
/// Returns an error if the expression contains an unknown character, a literal
/// or intermediate value that does not fit into an `i64`, unbalanced
/// parentheses, a missing operand, or a division by zero.
///
/// # Examples
/// ```
/// use stackeval::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("10+2*6").unwrap(), 22);
/// assert_eq!(evaluate("100 * ( 2 + 12 )").unwrap(), 1400);
///
/// let err = evaluate("5/0").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate(expression: &str) -> EvalResult<i64> {
    evaluate_with(expression, &Options::default())
}

/// Evaluates an arithmetic expression with explicit [`Options`].
///
/// Each call owns its own stacks; nothing is shared between calls.
///
/// # Errors
/// See [`evaluate`]. With `UnknownCharacters::Skip` unknown characters are
/// dropped instead of reported.
pub fn evaluate_with(expression: &str, options: &Options) -> EvalResult<i64> {
    debug!("evaluating {expression:?}");
    let result = Evaluator::new().run(tokenize(expression, options.unknown), expression.len());
    match &result {
        Ok(value) => debug!("{expression:?} = {value}"),
        Err(e) => debug!("{expression:?} failed: {e}"),
    }
    result
}
