use thiserror::Error;

use crate::seed::SeedError;
use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] UtilsError),
    #[error("Seed error: {0}")]
    SeedError(#[from] SeedError),
    #[error("Failed to start search worker: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("Search worker panicked")]
    WorkerPanicked,
}
