use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    operator::Operator,
};

impl Evaluator {
    /// Applies `op` to two operands, where `a` was pushed before `b`, so the
    /// result is `a op b`.
    ///
    /// Division truncates toward zero. All four operations are checked for
    /// `i64` overflow.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `b`: Right operand, popped first.
    /// - `a`: Left operand, popped second.
    /// - `position`: Byte offset of the operator for error reporting.
    ///
    /// # Errors
    /// - `DivisionByZero` if `op` is `/` and `b` is zero.
    /// - `NumericOverflow` if the result does not fit into an `i64`.
    ///
    /// # Example
    /// ```
    /// use stackeval::{interpreter::evaluator::core::Evaluator, operator::Operator};
    ///
    /// assert_eq!(Evaluator::apply_op(Operator::Sub, 3, 10, 0).unwrap(), 7);
    /// assert_eq!(Evaluator::apply_op(Operator::Div, 2, 7, 0).unwrap(), 3);
    /// assert!(Evaluator::apply_op(Operator::Div, 0, 7, 0).is_err());
    /// ```
    pub fn apply_op(op: Operator, b: i64, a: i64, position: usize) -> EvalResult<i64> {
        let result = match op {
            Operator::Add => a.checked_add(b),
            Operator::Sub => a.checked_sub(b),
            Operator::Mul => a.checked_mul(b),
            Operator::Div => {
                if b == 0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                a.checked_div(b)
            },
        };

        result.ok_or(EvalError::NumericOverflow { position })
    }
}
