//! Dateo solver - find every way to combine five numbers into a goal
//!
//! Five integers are combined with `+`, `-`, `*` and `/` in exact rational
//! arithmetic. Every distinct derivation of the goal is reported once, as soon as
//! it is found, and a running search can be cancelled at any time.

pub mod canonical;
pub mod channel;
pub mod expression;
pub mod seed;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use channel::{Control, Notification};
pub use expression::{Expression, ExpressionError};
pub use solver::{
    CancelToken, Request, Session, SolveHandle, Solution, Solver, SolverConfig, SolverError,
};

use solver::constants::OPERAND_COUNT;

/// Start solving for `goal` with `numbers` on a worker thread
///
/// # Errors
///
/// Returns an error if the goal or a number is out of range, before anything is
/// searched.
///
/// # Examples
///
/// ```
/// use dateo_solver::{Notification, solve_by_goal};
///
/// let handle = solve_by_goal(1, [1, 2, 3, 4, 5]).expect("valid input");
/// let found: Vec<Notification> = handle.notifications().collect();
/// assert!(found.contains(&Notification::Solution { text: "5 - 4".into(), score: 2 }));
/// assert_eq!(found.last(), Some(&Notification::Done));
/// ```
pub fn solve_by_goal(
    goal: i64,
    numbers: [i64; OPERAND_COUNT],
) -> Result<SolveHandle, SolverError> {
    Solver::default().spawn(Request::Goal { goal, numbers })
}

/// Start solving the puzzle for a date on a worker thread
///
/// The numbers are seeded from the date and the goal is the day of the month.
///
/// # Errors
///
/// Returns an error if the date does not exist.
pub fn solve_by_date(year: u32, month: u32, day: u32) -> Result<SolveHandle, SolverError> {
    Solver::default().spawn(Request::Date { year, month, day })
}

/// Find every solution for `goal` with `numbers`, on the calling thread
///
/// # Errors
///
/// Returns an error if the goal or a number is out of range.
pub fn collect_solutions(
    goal: i64,
    numbers: [i64; OPERAND_COUNT],
) -> Result<Vec<Solution>, SolverError> {
    Solver::default().collect(Request::Goal { goal, numbers })
}

/// Find every solution to the puzzle for a date, on the calling thread
///
/// # Errors
///
/// Returns an error if the date does not exist.
pub fn collect_solutions_by_date(
    year: u32,
    month: u32,
    day: u32,
) -> Result<Vec<Solution>, SolverError> {
    Solver::default().collect(Request::Date { year, month, day })
}
