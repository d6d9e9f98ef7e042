/// Evaluation errors.
///
/// Defines every failure that can occur while scanning or reducing an
/// expression: unrecognized characters, literals that do not fit into an
/// `i64`, unbalanced groups, missing operands and division by zero.
pub mod eval_error;

pub use eval_error::{ErrorKind, EvalError};
