/// What the tokenizer does with characters it does not recognize.
///
/// Recognized characters are ASCII digits, whitespace, `+ - * /` and the two
/// parentheses. Anything else is handled according to this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCharacters {
    /// Fail with [`EvalError::InvalidCharacter`](crate::error::EvalError).
    #[default]
    Reject,
    /// Drop the character and continue scanning.
    Skip,
}

/// Evaluation settings.
///
/// The default configuration rejects unknown characters.
///
/// # Example
/// ```
/// use stackeval::{
///     evaluate_with,
///     options::{Options, UnknownCharacters},
/// };
///
/// let options = Options { unknown: UnknownCharacters::Skip };
/// assert!(evaluate_with("2 x 3 + 1", &options).is_err());
/// assert_eq!(evaluate_with("2 * 3 $+ 1", &options).unwrap(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Policy for unrecognized characters.
    pub unknown: UnknownCharacters,
}
