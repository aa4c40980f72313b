//! The month availability grid: one cell per weekday date and working hour.

mod grid;
mod types;

pub use grid::{AvailabilityGrid, GridError};
pub use types::{weekday_name, Slot, END_HOUR, SLOTS_PER_DAY, START_HOUR};
