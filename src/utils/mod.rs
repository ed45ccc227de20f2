//! Input parsing, validation and index combinatorics

mod combinations;
mod errors;
mod numbers;
mod validation;

pub use combinations::generate_combinations;
pub use errors::UtilsError;
pub use numbers::{parse_date, parse_numbers};
pub use validation::{validate_date, validate_goal, validate_numbers};

#[cfg(test)]
mod tests;
