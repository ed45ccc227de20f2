use std::fmt;

use crate::expression::{Expression, Operator};

/// Normalized signature of an expression.
///
/// Chains of `+`/`-` become one signed multiset of terms and chains of `*`/`/`
/// one multiset of factors, so commutative reorderings and associative
/// regroupings of the same derivation produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalKey {
    Leaf(i64),
    Sum(Vec<Term>),
    Product(Vec<Factor>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Term {
    pub negated: bool,
    pub key: CanonicalKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Factor {
    pub inverted: bool,
    pub key: CanonicalKey,
}

impl CanonicalKey {
    pub fn of(expr: &Expression) -> Self {
        match expr {
            Expression::Leaf { value, .. } => CanonicalKey::Leaf(*value),
            Expression::Binary {
                op: Operator::Add | Operator::Sub,
                ..
            } => {
                let mut terms = Vec::new();
                collect_terms(expr, false, &mut terms);
                terms.sort();
                CanonicalKey::Sum(terms)
            }
            Expression::Binary {
                op: Operator::Mul | Operator::Div,
                ..
            } => {
                let mut factors = Vec::new();
                collect_factors(expr, false, &mut factors);
                factors.sort();
                CanonicalKey::Product(factors)
            }
        }
    }
}

fn collect_terms(expr: &Expression, negated: bool, out: &mut Vec<Term>) {
    match expr {
        Expression::Binary {
            op: Operator::Add,
            left,
            right,
        } => {
            collect_terms(left, negated, out);
            collect_terms(right, negated, out);
        }
        Expression::Binary {
            op: Operator::Sub,
            left,
            right,
        } => {
            collect_terms(left, negated, out);
            collect_terms(right, !negated, out);
        }
        other => out.push(Term {
            negated,
            key: CanonicalKey::of(other),
        }),
    }
}

fn collect_factors(expr: &Expression, inverted: bool, out: &mut Vec<Factor>) {
    match expr {
        Expression::Binary {
            op: Operator::Mul,
            left,
            right,
        } => {
            collect_factors(left, inverted, out);
            collect_factors(right, inverted, out);
        }
        Expression::Binary {
            op: Operator::Div,
            left,
            right,
        } => {
            collect_factors(left, inverted, out);
            collect_factors(right, !inverted, out);
        }
        other => out.push(Factor {
            inverted,
            key: CanonicalKey::of(other),
        }),
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CanonicalKey::Leaf(value) => write!(f, "{}", value),
            CanonicalKey::Sum(terms) => {
                write!(f, "sum(")?;
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}{}", if term.negated { '-' } else { '+' }, term.key)?;
                }
                write!(f, ")")
            }
            CanonicalKey::Product(factors) => {
                write!(f, "prod(")?;
                for (i, factor) in factors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}{}", if factor.inverted { '/' } else { '*' }, factor.key)?;
                }
                write!(f, ")")
            }
        }
    }
}
