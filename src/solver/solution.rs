use std::fmt;

use crate::expression::Expression;
use crate::solver::constants::{ALL_NUMBERS_BONUS, OPERAND_COUNT};

/// Inputs used, plus a bonus for using all of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub fn for_leaf_count(count: usize) -> Self {
        let base = u8::try_from(count).unwrap_or(u8::MAX);
        if count == OPERAND_COUNT {
            Score(base.saturating_add(ALL_NUMBERS_BONUS))
        } else {
            Score(base)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A derivation of the goal, formatted once when it is accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    expression: Expression,
    text: String,
    score: Score,
}

impl Solution {
    pub fn new(expression: Expression) -> Self {
        let text = expression.to_string();
        let score = Score::for_leaf_count(expression.leaf_count());
        Self {
            expression,
            text,
            score,
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn score(&self) -> Score {
        self.score
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}
