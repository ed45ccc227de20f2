use num_rational::Ratio;

/// Exact value of an input or an intermediate result
pub type Number = Ratio<i128>;

/// The four arithmetic operators available to the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Every operator, in the order the search tries them
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Commutative operators are applied once per pair, the others in both orders
    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// An expression tree over the puzzle inputs.
///
/// A leaf remembers which input position it came from, so a finished tree can be
/// checked for reuse of an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Leaf {
        value: i64,
        position: usize,
    },
    Binary {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn leaf(value: i64, position: usize) -> Self {
        Expression::Leaf { value, position }
    }

    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Input positions of every leaf, left to right
    pub fn leaf_positions(&self) -> Vec<usize> {
        let mut positions = Vec::new();
        self.collect_positions(&mut positions);
        positions
    }

    fn collect_positions(&self, out: &mut Vec<usize>) {
        match self {
            Expression::Leaf { position, .. } => out.push(*position),
            Expression::Binary { left, right, .. } => {
                left.collect_positions(out);
                right.collect_positions(out);
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Expression::Leaf { .. } => 1,
            Expression::Binary { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}
