//! The search for every derivation of a goal

mod cancel;
mod config;
pub mod constants;
mod engine;
mod errors;
mod session;
mod solution;

pub use cancel::CancelToken;
pub use config::SolverConfig;
pub use engine::{SearchEngine, SearchOutcome, SearchReport, SearchStats};
pub use errors::SolverError;
pub use session::{Request, Session, SolveHandle, Solver};
pub use solution::{Score, Solution};
