use std::num::NonZeroUsize;

/// Configuration for the search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Only divide when the quotient is an integer, so every intermediate value
    /// is an integer
    pub integer_only: bool,
    /// Cancel the search once this many solutions have been delivered
    pub limit: Option<NonZeroUsize>,
}

impl SolverConfig {
    pub fn integer_only() -> Self {
        Self {
            integer_only: true,
            ..Self::default()
        }
    }

    pub fn with_limit(self, limit: NonZeroUsize) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }
}
