use crate::availability::AvailabilityGrid;

/// Half-open hour range `[start, end)` marking availability.
///
/// Hours are expected inside the working day but are not strictly validated;
/// out-of-range hours simply address no slot when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// Which days of the month a pattern touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSelector {
    /// Every date present in the grid.
    All,
    /// No dates at all.
    None,
    /// An explicit day-of-month list.
    Days(Vec<u32>),
}

impl DateSelector {
    pub fn matches(&self, day: u32) -> bool {
        match self {
            Self::All => true,
            Self::None => false,
            Self::Days(days) => days.contains(&day),
        }
    }

    /// True when the selector can never match a date.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::All => false,
            Self::None => true,
            Self::Days(days) => days.is_empty(),
        }
    }
}

/// One unit of user-declared availability: a date selection plus the hour
/// intervals that hold on those dates.
///
/// Patterns are applied in the order the user supplied them; a later pattern
/// overwrites the dates it matches wholesale, which is what lets a narrower
/// pattern carve an exception out of an earlier, broader one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub dates: DateSelector,
    pub intervals: Vec<Interval>,
}

impl Pattern {
    pub fn new(dates: DateSelector, intervals: Vec<Interval>) -> Self {
        Self { dates, intervals }
    }

    /// Apply this pattern to the grid as one atomic overwrite.
    pub fn apply_to(&self, grid: &mut AvailabilityGrid) {
        grid.overwrite(&self.dates, &self.intervals);
    }
}
