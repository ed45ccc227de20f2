//! Deterministic daily numbers.
//!
//! The numbers for a date come from a Lehmer generator seeded with
//! `day + 100 * year + 1_000_000 * month`, so everyone asking about the same day
//! gets the same puzzle.

mod errors;
mod lehmer;

use log::debug;

use crate::solver::constants::OPERAND_COUNT;

pub use errors::SeedError;
pub use lehmer::{MODULUS, MULTIPLIER, lehmer_sequence, lehmer_step};

/// Largest magnitude a generated number can have
pub const MAX_MAGNITUDE: i64 = 20;

/// Upper bound on generator steps while collecting distinct numbers
pub const MAX_DRAWS: usize = 10_000;

pub fn initial_seed(year: u32, month: u32, day: u32) -> u64 {
    u64::from(day) + 100 * u64::from(year) + 1_000_000 * u64::from(month)
}

/// Maps a generator state to a number in `[-20, -1] ∪ [1, 20]`
pub fn candidate(state: u64) -> i64 {
    // state < MODULUS, so the remainder always fits
    let magnitude = (state % MAX_MAGNITUDE as u64) as i64 + 1;
    if state % 3 == 0 { -magnitude } else { magnitude }
}

/// Five distinct nonzero numbers in `[-20, 20]` for the date, ascending.
///
/// The date is not validated here.
///
/// # Errors
///
/// Returns `SeedError::Exhausted` if `MAX_DRAWS` steps do not yield five distinct
/// values, which only happens for a seed that is a multiple of the modulus.
pub fn numbers_for_date(
    year: u32,
    month: u32,
    day: u32,
) -> Result<[i64; OPERAND_COUNT], SeedError> {
    let seed = initial_seed(year, month, day);

    let mut chosen = Vec::with_capacity(OPERAND_COUNT);
    for number in lehmer_sequence(seed).take(MAX_DRAWS).map(candidate) {
        if !chosen.contains(&number) {
            chosen.push(number);
            if chosen.len() == OPERAND_COUNT {
                break;
            }
        }
    }

    let mut numbers: [i64; OPERAND_COUNT] = chosen.try_into().map_err(|_| SeedError::Exhausted {
        seed,
        draws: MAX_DRAWS,
    })?;
    numbers.sort_unstable();

    debug!(
        "Numbers for {}-{}-{} (seed {}): {:?}",
        year, month, day, seed, numbers
    );
    Ok(numbers)
}

/// Goal for a date: the day of the month
pub fn goal_for_date(_year: u32, _month: u32, day: u32) -> i64 {
    i64::from(day)
}

#[cfg(test)]
mod tests;
