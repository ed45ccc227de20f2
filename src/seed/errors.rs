use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeedError {
    #[error("Seed {seed} produced fewer than five distinct numbers in {draws} draws")]
    Exhausted { seed: u64, draws: usize },
}
