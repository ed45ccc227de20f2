use chrono::NaiveDate;
use log::{debug, warn};

use crate::solver::constants::MAX_INPUT_MAGNITUDE;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error naming the first number whose magnitude exceeds
/// `MAX_INPUT_MAGNITUDE`.
pub fn validate_numbers(numbers: &[i64]) -> Result<(), UtilsError> {
    debug!("Validating numbers: {:?}", numbers);

    if let Some((position, &value)) = numbers
        .iter()
        .enumerate()
        .find(|(_, value)| value.unsigned_abs() > MAX_INPUT_MAGNITUDE.unsigned_abs())
    {
        warn!("Number {} at position {} is out of range", value, position);
        return Err(UtilsError::NumberOutOfRange {
            position,
            value,
            limit: MAX_INPUT_MAGNITUDE,
        });
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if the goal's magnitude exceeds `MAX_INPUT_MAGNITUDE`.
pub fn validate_goal(goal: i64) -> Result<(), UtilsError> {
    if goal.unsigned_abs() > MAX_INPUT_MAGNITUDE.unsigned_abs() {
        warn!("Goal {} is out of range", goal);
        return Err(UtilsError::GoalOutOfRange {
            value: goal,
            limit: MAX_INPUT_MAGNITUDE,
        });
    }
    Ok(())
}

/// # Errors
///
/// Returns an error unless the triple names a real calendar day in year 1 or later.
pub fn validate_date(year: u32, month: u32, day: u32) -> Result<NaiveDate, UtilsError> {
    debug!("Validating date: {}-{}-{}", year, month, day);

    let date = i32::try_from(year)
        .ok()
        .filter(|&year| year >= 1)
        .and_then(|year| NaiveDate::from_ymd_opt(year, month, day));

    date.ok_or_else(|| {
        warn!("Rejecting date {}-{}-{}", year, month, day);
        UtilsError::InvalidDate { year, month, day }
    })
}
