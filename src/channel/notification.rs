use serde::{Deserialize, Serialize};

use crate::solver::Solution;

/// Messages streamed from a search to its caller, in order: any number of
/// `Solution`s, then one `Done` if the search ran to exhaustion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Notification {
    Solution { text: String, score: u8 },
    Done,
}

impl From<&Solution> for Notification {
    fn from(solution: &Solution) -> Self {
        Notification::Solution {
            text: solution.text().to_string(),
            score: solution.score().value(),
        }
    }
}

/// Messages a caller may send to an in-flight search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Control {
    Cancel,
}
