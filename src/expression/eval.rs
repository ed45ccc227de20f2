use log::trace;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::expression::ast::{Expression, Number, Operator};
use crate::expression::errors::ExpressionError;

impl Operator {
    /// Applies the operator with exact arithmetic.
    ///
    /// # Errors
    ///
    /// Returns an error when the divisor is zero or the result does not fit an
    /// `i128` numerator/denominator.
    pub fn apply(self, left: &Number, right: &Number) -> Result<Number, ExpressionError> {
        match self {
            Operator::Add => left.checked_add(right).ok_or(ExpressionError::Overflow),
            Operator::Sub => left.checked_sub(right).ok_or(ExpressionError::Overflow),
            Operator::Mul => left.checked_mul(right).ok_or(ExpressionError::Overflow),
            Operator::Div => {
                if right.is_zero() {
                    return Err(ExpressionError::DivisionByZero);
                }
                left.checked_div(right).ok_or(ExpressionError::Overflow)
            }
        }
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when evaluation divides by zero or overflows.
    pub fn evaluate(&self) -> Result<Number, ExpressionError> {
        let result = match self {
            Expression::Leaf { value, .. } => Ok(Number::from_integer(i128::from(*value))),
            Expression::Binary { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                op.apply(&left, &right)
            }
        };

        if let Err(e) = &result {
            trace!("Evaluation of {} failed: {}", self, e);
        }

        result
    }
}
