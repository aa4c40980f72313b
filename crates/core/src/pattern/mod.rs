//! User-declared availability patterns and their text parsers.

mod parser;
mod types;

pub use parser::{parse_date_selector, parse_exception_list, parse_intervals, PatternError};
pub use types::{DateSelector, Interval, Pattern};
