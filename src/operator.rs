use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, lexer::Token},
};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating integer division.
    Div,
}

impl Operator {
    /// Returns the precedence tier of the operator.
    ///
    /// `*` and `/` share the upper tier, `+` and `-` the lower one. Operators
    /// on the same tier associate to the left.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Returns `true` if `self`, sitting on top of the operator stack, must be
    /// reduced before `incoming` is pushed.
    ///
    /// # Example
    /// ```
    /// use stackeval::operator::Operator;
    ///
    /// assert!(Operator::Mul.binds_at_least_as_tightly(Operator::Add));
    /// assert!(Operator::Sub.binds_at_least_as_tightly(Operator::Add));
    /// assert!(!Operator::Add.binds_at_least_as_tightly(Operator::Div));
    /// ```
    #[must_use]
    pub const fn binds_at_least_as_tightly(self, incoming: Self) -> bool {
        self.precedence() >= incoming.precedence()
    }

    /// Converts an operator token into an `Operator`.
    ///
    /// # Errors
    /// Returns `EvalError::InvalidOperator` for any token that is not one of
    /// `+ - * /`.
    pub fn from_token(token: &Token, position: usize) -> EvalResult<Self> {
        match token {
            Token::Plus => Ok(Self::Add),
            Token::Minus => Ok(Self::Sub),
            Token::Star => Ok(Self::Mul),
            Token::Slash => Ok(Self::Div),
            other => Err(EvalError::InvalidOperator { symbol: other.to_string(),
                                                      position }),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_tier_is_left_associative() {
        for (top, incoming) in [(Operator::Add, Operator::Sub),
                                (Operator::Sub, Operator::Add),
                                (Operator::Mul, Operator::Div),
                                (Operator::Div, Operator::Mul),
                                (Operator::Div, Operator::Div)]
        {
            assert!(top.binds_at_least_as_tightly(incoming), "{top} vs {incoming}");
        }
    }

    #[test]
    fn multiplicative_tier_is_higher() {
        assert!(Operator::Mul.binds_at_least_as_tightly(Operator::Sub));
        assert!(!Operator::Sub.binds_at_least_as_tightly(Operator::Mul));
        assert!(!Operator::Add.binds_at_least_as_tightly(Operator::Div));
    }

    #[test]
    fn non_operator_tokens_are_rejected() {
        let err = Operator::from_token(&Token::LParen, 3).unwrap_err();
        assert_eq!(err,
                   EvalError::InvalidOperator { symbol:   "(".to_string(),
                                                position: 3, });
        assert_eq!(Operator::from_token(&Token::Slash, 0).unwrap(), Operator::Div);
    }
}
