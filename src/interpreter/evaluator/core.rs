use log::trace;

use crate::{
    error::EvalError,
    interpreter::lexer::{Spanned, Token},
    operator::Operator,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// A pending binary operator.
    Operator {
        /// The operator.
        op:       Operator,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// An open-parenthesis marker. Only a matching `)` removes it.
    Group {
        /// Byte offset of the `(` in the source.
        position: usize,
    },
}

/// Evaluation state for a single expression.
///
/// Holds the operand stack and the operator stack. Both are owned by one
/// evaluation and dropped with it.
#[derive(Debug, Default)]
pub struct Evaluator {
    operands:  Vec<i64>,
    operators: Vec<Entry>,
}

impl Evaluator {
    /// Creates an evaluator with empty stacks.
    #[must_use]
    pub fn new() -> Self {
        Self { operands:  Vec::new(),
               operators: Vec::new(), }
    }

    /// Consumes a token stream and returns the value of the expression.
    ///
    /// `end` is the byte length of the source and is used to locate errors
    /// detected after the last token.
    ///
    /// # Errors
    /// Propagates tokenizer errors and returns any error raised while
    /// reducing.
    ///
    /// # Example
    /// ```
    /// use stackeval::{
    ///     interpreter::{evaluator::core::Evaluator, lexer::tokenize},
    ///     options::UnknownCharacters,
    /// };
    ///
    /// let source = "100*(2+12)/14";
    /// let tokens = tokenize(source, UnknownCharacters::Reject);
    /// assert_eq!(Evaluator::new().run(tokens, source.len()).unwrap(), 100);
    /// ```
    pub fn run<I>(mut self, tokens: I, end: usize) -> EvalResult<i64>
        where I: Iterator<Item = EvalResult<Spanned>>
    {
        for spanned in tokens {
            let Spanned { token, position } = spanned?;
            self.step(token, position)?;
        }
        self.finish(end)
    }

    /// Feeds a single token to the machine.
    ///
    /// # Errors
    /// Returns `StackUnderflow` for an unmatched `)` or a missing operand,
    /// and any error raised by operator application.
    pub fn step(&mut self, token: Token, position: usize) -> EvalResult<()> {
        match token {
            Token::Integer(value) => self.operands.push(value),
            Token::LParen => self.operators.push(Entry::Group { position }),
            Token::RParen => self.close_group(position)?,
            other => {
                let op = Operator::from_token(&other, position)?;
                self.push_operator(op, position)?;
            },
        }
        Ok(())
    }

    /// Reduces everything back to the innermost open-parenthesis marker and
    /// discards the marker.
    fn close_group(&mut self, position: usize) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some(Entry::Group { .. }) => return Ok(()),
                Some(Entry::Operator { op, position: at }) => self.reduce(op, at)?,
                None => return Err(EvalError::StackUnderflow { position }),
            }
        }
    }

    /// Reduces pending operators of equal or higher precedence, then pushes
    /// `op`.
    fn push_operator(&mut self, op: Operator, position: usize) -> EvalResult<()> {
        while let Some(&Entry::Operator { op: top, position: at }) = self.operators.last()
              && top.binds_at_least_as_tightly(op)
        {
            self.operators.pop();
            self.reduce(top, at)?;
        }
        self.operators.push(Entry::Operator { op, position });
        Ok(())
    }

    /// Pops two operands, applies `op` and pushes the result.
    fn reduce(&mut self, op: Operator, position: usize) -> EvalResult<()> {
        let (Some(b), Some(a)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(EvalError::StackUnderflow { position });
        };
        let value = Self::apply_op(op, b, a, position)?;
        trace!("reduced {a} {op} {b} = {value}");
        self.operands.push(value);
        Ok(())
    }

    /// Drains the operator stack and returns the single remaining operand.
    ///
    /// # Errors
    /// Returns `MalformedExpression` for an unclosed `(` or when anything
    /// other than exactly one operand is left.
    pub fn finish(mut self, end: usize) -> EvalResult<i64> {
        while let Some(entry) = self.operators.pop() {
            match entry {
                Entry::Operator { op, position } => self.reduce(op, position)?,
                Entry::Group { position } => {
                    return Err(EvalError::MalformedExpression { details:  "unclosed '('".to_string(),
                                                                position, });
                },
            }
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            [] => Err(EvalError::MalformedExpression { details:  "no value to return".to_string(),
                                                       position: end, }),
            rest => Err(EvalError::MalformedExpression { details:  format!("{} values are not joined by an operator",
                                                                           rest.len()),
                                                         position: end, }),
        }
    }
}
