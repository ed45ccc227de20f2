use thiserror::Error;

/// Errors that can occur while validating puzzle inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Number {value} at position {position} is outside [-{limit}, {limit}]")]
    NumberOutOfRange {
        position: usize,
        value: i64,
        limit: i64,
    },
    #[error("Goal {value} is outside [-{limit}, {limit}]")]
    GoalOutOfRange { value: i64, limit: i64 },
    #[error("Expected {expected} numbers, found {found}")]
    WrongNumberCount { expected: usize, found: usize },
    #[error("Not an integer: {0}")]
    InvalidNumber(String),
    #[error("Invalid date: year={year}, month={month}, day={day}")]
    InvalidDate { year: u32, month: u32, day: u32 },
    #[error("Date must be written as YYYY-MM-DD: {0}")]
    MalformedDate(String),
}
