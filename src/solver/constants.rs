/// Numbers in one puzzle
pub const OPERAND_COUNT: usize = 5;

/// Largest accepted magnitude for an input number or goal. Products of several
/// such inputs can exceed `i128`; those candidates are pruned by the checked
/// arithmetic in `Operator::apply`.
pub const MAX_INPUT_MAGNITUDE: i64 = 1_000_000_000;

/// Bonus added to the score of a solution that uses every input
pub const ALL_NUMBERS_BONUS: u8 = 1;
