//! Duplicate suppression for algebraically identical derivations

mod key;

use std::collections::HashSet;

use log::trace;

use crate::expression::Expression;

pub use key::{CanonicalKey, Factor, Term};

/// Remembers the keys emitted during one search.
#[derive(Debug, Default)]
pub struct Canonicalizer {
    seen: HashSet<CanonicalKey>,
}

impl Canonicalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the expression's key, returning `false` if an equivalent
    /// expression was admitted before.
    pub fn admit(&mut self, expr: &Expression) -> bool {
        let key = CanonicalKey::of(expr);
        if self.seen.contains(&key) {
            trace!("Duplicate of {}: {}", key, expr);
            return false;
        }
        self.seen.insert(key);
        true
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests;
