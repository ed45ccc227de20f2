use std::fmt;

use crate::expression::ast::{Expression, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Every operator application below the root is parenthesized, as is a negative
/// leaf used as an operand: `(5 + 3) * (2 - 7)`, `3 - (-8)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_operand(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Leaf { value, .. } if *value < 0 => write!(f, "({})", value),
                Expression::Leaf { value, .. } => write!(f, "{}", value),
                Expression::Binary { .. } => {
                    write!(f, "(")?;
                    fmt_expression(f, expr)?;
                    write!(f, ")")
                }
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Leaf { value, .. } => write!(f, "{}", value),
                Expression::Binary { op, left, right } => {
                    write_operand(f, left)?;
                    write!(f, " {} ", op)?;
                    write_operand(f, right)
                }
            }
        }

        fmt_expression(f, self)
    }
}
