#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Every variant records the byte offset in the source expression where the
/// problem was detected.
pub enum EvalError {
    /// A reduction needed an operator or an operand that was not on its stack.
    StackUnderflow {
        /// Byte offset of the operator or `)` that triggered the reduction.
        position: usize,
    },
    /// The expression did not reduce to exactly one value.
    MalformedExpression {
        /// Details about what was left over.
        details:  String,
        /// Byte offset where the problem was detected.
        position: usize,
    },
    /// The right operand of a `/` reduction was zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// A token that is not one of `+ - * /` reached operator application.
    InvalidOperator {
        /// The offending symbol.
        symbol:   String,
        /// Byte offset of the symbol.
        position: usize,
    },
    /// A character that is neither a digit, whitespace, operator nor
    /// parenthesis.
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A literal or an intermediate result does not fit into an `i64`.
    NumericOverflow {
        /// Byte offset of the literal or operator.
        position: usize,
    },
}

/// The category of an [`EvalError`], without any location data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    StackUnderflow,
    MalformedExpression,
    DivisionByZero,
    InvalidOperator,
    InvalidCharacter,
    NumericOverflow,
}

impl EvalError {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use stackeval::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("5/0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            Self::MalformedExpression { .. } => ErrorKind::MalformedExpression,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::InvalidOperator { .. } => ErrorKind::InvalidOperator,
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::NumericOverflow { .. } => ErrorKind::NumericOverflow,
        }
    }

    /// Byte offset in the source expression where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::StackUnderflow { position }
            | Self::MalformedExpression { position, .. }
            | Self::DivisionByZero { position }
            | Self::InvalidOperator { position, .. }
            | Self::InvalidCharacter { position, .. }
            | Self::NumericOverflow { position } => *position,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow { position } => write!(f,
                                                        "Error at offset {position}: Missing operand or unbalanced parenthesis."),

            Self::MalformedExpression { details, position } => {
                write!(f, "Error at offset {position}: Malformed expression: {details}.")
            },

            Self::DivisionByZero { position } => {
                write!(f, "Error at offset {position}: Division by zero.")
            },

            Self::InvalidOperator { symbol, position } => {
                write!(f, "Error at offset {position}: Invalid operator '{symbol}'.")
            },

            Self::InvalidCharacter { character, position } => {
                write!(f, "Error at offset {position}: Unexpected character '{character}'.")
            },

            Self::NumericOverflow { position } => write!(f,
                                                         "Error at offset {position}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for EvalError {}
