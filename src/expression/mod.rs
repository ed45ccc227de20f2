//! Expression trees over the puzzle inputs: exact evaluation, display and parsing

mod ast;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::{Expression, Number, Operator};
pub use errors::ExpressionError;
