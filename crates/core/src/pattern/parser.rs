//! Parsing of the wizard's free-text answers.
//!
//! Input arrives untrusted from the prompt loop; everything here either
//! parses or returns a typed error. Re-prompting on failure is the caller's
//! job, never done here.

use std::num::ParseIntError;

use thiserror::Error;

use crate::availability::{END_HOUR, START_HOUR};

use super::types::{DateSelector, Interval};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// Interval hours must pair up; carries the offending token count.
    #[error("cannot pair an odd number of times: {0}")]
    OddIntervalCount(usize),

    /// A token that should be a number was not one; the underlying parse
    /// failure is surfaced as-is.
    #[error(transparent)]
    BadNumber(#[from] ParseIntError),
}

/// Parse a whitespace-separated list of hours into intervals.
///
/// `never` means no availability, `always` the whole working day. Hours are
/// paired positionally - (1st, 2nd), (3rd, 4th), ... - with no sorting and no
/// overlap merging; the order the user typed is the order that counts.
pub fn parse_intervals(input: &str) -> Result<Vec<Interval>, PatternError> {
    let input = input.trim();
    if input == "never" {
        return Ok(Vec::new());
    }
    if input == "always" {
        return Ok(vec![Interval::new(START_HOUR, END_HOUR)]);
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(PatternError::OddIntervalCount(tokens.len()));
    }

    let hours = tokens
        .iter()
        .map(|t| t.parse::<u32>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(hours
        .chunks_exact(2)
        .map(|pair| Interval::new(pair[0], pair[1]))
        .collect())
}

/// Parse a date selection: `None`, `All`, or day-of-month numbers.
pub fn parse_date_selector(input: &str) -> Result<DateSelector, PatternError> {
    let input = input.trim();
    if input == "None" {
        return Ok(DateSelector::None);
    }
    if input == "All" {
        return Ok(DateSelector::All);
    }

    let days = input
        .split_whitespace()
        .map(|t| t.parse::<u32>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DateSelector::Days(days))
}

/// Parse the exception-date answer: `None` or day-of-month numbers.
pub fn parse_exception_list(input: &str) -> Result<Vec<u32>, PatternError> {
    let input = input.trim();
    if input == "None" {
        return Ok(Vec::new());
    }

    input
        .split_whitespace()
        .map(|t| t.parse::<u32>().map_err(PatternError::from))
        .collect()
}
