use log::debug;

use crate::solver::constants::OPERAND_COUNT;
use crate::utils::errors::UtilsError;

/// Parses exactly five whitespace- or comma-separated integers
///
/// # Errors
///
/// Returns an error if a token is not an integer or the count is not five.
pub fn parse_numbers(text: &str) -> Result<[i64; OPERAND_COUNT], UtilsError> {
    debug!("Parsing numbers from '{}'", text);

    let numbers = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| UtilsError::InvalidNumber(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let found = numbers.len();
    numbers
        .try_into()
        .map_err(|_| UtilsError::WrongNumberCount {
            expected: OPERAND_COUNT,
            found,
        })
}

/// Parses a `YYYY-MM-DD` date into its parts without validating the calendar
///
/// # Errors
///
/// Returns an error if the text does not have three numeric dash-separated parts.
pub fn parse_date(text: &str) -> Result<(u32, u32, u32), UtilsError> {
    let malformed = || UtilsError::MalformedDate(text.to_string());
    let parts = text
        .trim()
        .split('-')
        .map(|part| part.parse::<u32>().map_err(|_| malformed()))
        .collect::<Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        &[year, month, day] => Ok((year, month, day)),
        _ => Err(malformed()),
    }
}
