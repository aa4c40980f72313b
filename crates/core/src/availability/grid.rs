//! Grid construction and the pattern-application primitives.

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;
use tracing::debug;

use crate::pattern::{DateSelector, Interval};

use super::types::{Slot, END_HOUR, SLOTS_PER_DAY, START_HOUR};

/// Errors raised while deriving the month's dates.
///
/// Passing a valid year/month is a caller contract; these only fire when that
/// contract is broken, never during normal wizard use.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("month {0} is out of range [1-12]")]
    MonthOutOfRange(u32),

    #[error("no calendar for {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
}

/// Availability of every weekday (Mon-Fri) date of one month, hour by hour.
///
/// Cells are stored densely, `SLOTS_PER_DAY` per date in date order, so a
/// (day, hour) lookup is a direct index computation. Weekend dates and dates
/// of adjacent months have no cells at all.
#[derive(Debug, Clone)]
pub struct AvailabilityGrid {
    year: i32,
    month: u32,
    /// Weekday dates of the month, ascending: (day of month, weekday).
    days: Vec<(u32, Weekday)>,
    /// Position of each day of month in `days`; index 0 is unused.
    day_index: Vec<Option<usize>>,
    cells: Vec<bool>,
}

impl AvailabilityGrid {
    /// Build the grid for one month, every cell unavailable.
    pub fn new(year: i32, month: u32) -> Result<Self, GridError> {
        if !(1..=12).contains(&month) {
            return Err(GridError::MonthOutOfRange(month));
        }

        let mut days = Vec::new();
        let mut day_index = vec![None; 32];
        for day in 1..=days_in_month(year, month) {
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(GridError::InvalidMonth { year, month })?;
            if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                continue;
            }
            day_index[day as usize] = Some(days.len());
            days.push((day, date.weekday()));
        }

        let cells = vec![false; days.len() * SLOTS_PER_DAY];
        debug!(year, month, dates = days.len(), "grid built");
        Ok(Self { year, month, days, day_index, cells })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Total number of slots: weekday dates x hours per date.
    pub fn slot_count(&self) -> usize {
        self.cells.len()
    }

    /// Availability of one cell; `None` when the (day, hour) addresses no slot.
    pub fn is_available(&self, day: u32, hour: u32) -> Option<bool> {
        self.cell(day, hour).map(|idx| self.cells[idx])
    }

    /// Fill every slot uniformly; implements "free all day by default".
    pub fn set_default(&mut self, available: bool) {
        self.cells.fill(available);
    }

    /// The single mutation primitive: mark every matched (date, interval hour)
    /// cell with `available`. Hours outside the grid's range address no slot
    /// and are skipped. An empty interval list is a no-op.
    ///
    /// Calls are applied strictly in the order they arrive; a later call wins
    /// on any cell it touches.
    pub fn apply_pattern(
        &mut self,
        dates: &DateSelector,
        intervals: &[Interval],
        available: bool,
    ) {
        for day in self.matched_days(dates) {
            for interval in intervals {
                for hour in interval.start..interval.end {
                    if let Some(idx) = self.cell(day, hour) {
                        self.cells[idx] = available;
                    }
                }
            }
        }
        debug!(?dates, intervals = intervals.len(), available, "pattern applied");
    }

    /// Overwrite the matched dates wholesale: clear every hour of each date,
    /// then mark the intervals. This is what one user-supplied pattern means;
    /// an empty interval list leaves the grid untouched.
    pub fn overwrite(&mut self, dates: &DateSelector, intervals: &[Interval]) {
        if intervals.is_empty() {
            return;
        }
        let matched = self.matched_days(dates);
        self.reset_dates(&matched);
        self.apply_pattern(dates, intervals, true);
    }

    /// Clear every hour of the given dates. Days without slots are ignored.
    pub fn reset_dates(&mut self, days: &[u32]) {
        for &day in days {
            let Some(base) = self.day_position(day) else { continue };
            let start = base * SLOTS_PER_DAY;
            self.cells[start..start + SLOTS_PER_DAY].fill(false);
        }
    }

    /// Day-of-month values with the given weekday, ascending; the menu offered
    /// when collecting exception dates.
    pub fn dates_for_weekday(&self, weekday: Weekday) -> Vec<u32> {
        self.days
            .iter()
            .filter(|&&(_, wd)| wd == weekday)
            .map(|&(day, _)| day)
            .collect()
    }

    /// Flatten the grid into export rows, sorted by (day, hour) ascending.
    pub fn export(&self) -> Vec<Slot> {
        let mut rows = Vec::with_capacity(self.cells.len());
        for (position, &(day, weekday)) in self.days.iter().enumerate() {
            for offset in 0..SLOTS_PER_DAY {
                rows.push(Slot {
                    day,
                    hour: START_HOUR + offset as u32,
                    weekday,
                    available: self.cells[position * SLOTS_PER_DAY + offset],
                });
            }
        }
        rows
    }

    fn matched_days(&self, dates: &DateSelector) -> Vec<u32> {
        self.days
            .iter()
            .map(|&(day, _)| day)
            .filter(|&day| dates.matches(day))
            .collect()
    }

    fn day_position(&self, day: u32) -> Option<usize> {
        self.day_index.get(day as usize).copied().flatten()
    }

    fn cell(&self, day: u32, hour: u32) -> Option<usize> {
        if !(START_HOUR..END_HOUR).contains(&hour) {
            return None;
        }
        let base = self.day_position(day)?;
        Some(base * SLOTS_PER_DAY + (hour - START_HOUR) as usize)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // February 2021 starts on a Monday and has exactly four full weeks:
    // 20 weekday dates, Mondays on 1, 8, 15, 22.
    fn feb_2021() -> AvailabilityGrid {
        AvailabilityGrid::new(2021, 2).unwrap()
    }

    #[test]
    fn covers_every_weekday_slot() {
        let grid = feb_2021();
        assert_eq!(grid.slot_count(), 20 * SLOTS_PER_DAY);

        let rows = grid.export();
        assert_eq!(rows.len(), grid.slot_count());
        assert!(rows.iter().all(|r| (START_HOUR..END_HOUR).contains(&r.hour)));
        assert!(rows.iter().all(|r| !r.available));
    }

    #[test]
    fn weekends_have_no_slots() {
        let grid = feb_2021();
        // 2021-02-06 was a Saturday, 2021-02-07 a Sunday.
        assert_eq!(grid.is_available(6, 10), None);
        assert_eq!(grid.is_available(7, 10), None);
    }

    #[test]
    fn weekdays_match_calendar_dates() {
        let grid = feb_2021();
        assert_eq!(grid.dates_for_weekday(Weekday::Mon), vec![1, 8, 15, 22]);
        assert_eq!(grid.dates_for_weekday(Weekday::Fri), vec![5, 12, 19, 26]);
    }

    #[test]
    fn thirty_day_month() {
        let grid = AvailabilityGrid::new(2021, 4).unwrap();
        assert_eq!(grid.slot_count(), 22 * SLOTS_PER_DAY);
    }

    #[test]
    fn month_out_of_range() {
        assert_eq!(
            AvailabilityGrid::new(2021, 0).unwrap_err(),
            GridError::MonthOutOfRange(0)
        );
        assert_eq!(
            AvailabilityGrid::new(2021, 13).unwrap_err(),
            GridError::MonthOutOfRange(13)
        );
    }

    #[test]
    fn set_default_fills_uniformly() {
        let mut grid = feb_2021();
        grid.set_default(true);
        assert!(grid.export().iter().all(|r| r.available));
        grid.set_default(false);
        assert!(grid.export().iter().all(|r| !r.available));
    }

    #[test]
    fn apply_pattern_marks_interval_hours() {
        let mut grid = feb_2021();
        grid.apply_pattern(&DateSelector::Days(vec![5]), &[Interval::new(10, 12)], true);

        assert_eq!(grid.is_available(5, 10), Some(true));
        assert_eq!(grid.is_available(5, 11), Some(true));
        assert_eq!(grid.is_available(5, 12), Some(false));
        assert_eq!(grid.is_available(5, 9), Some(false));
        assert_eq!(grid.is_available(4, 10), Some(false));
    }

    #[test]
    fn apply_pattern_all_dates() {
        let mut grid = feb_2021();
        grid.apply_pattern(&DateSelector::All, &[Interval::new(9, 19)], true);
        assert!(grid.export().iter().all(|r| r.available));
    }

    #[test]
    fn apply_pattern_no_dates_is_noop() {
        let mut grid = feb_2021();
        grid.apply_pattern(&DateSelector::None, &[Interval::new(9, 19)], true);
        assert!(grid.export().iter().all(|r| !r.available));
    }

    #[test]
    fn apply_pattern_empty_intervals_is_noop() {
        let mut grid = feb_2021();
        grid.set_default(true);
        grid.apply_pattern(&DateSelector::All, &[], false);
        assert!(grid.export().iter().all(|r| r.available));
    }

    #[test]
    fn out_of_range_hours_are_skipped() {
        let mut grid = feb_2021();
        grid.apply_pattern(&DateSelector::Days(vec![5]), &[Interval::new(7, 10)], true);
        assert_eq!(grid.is_available(5, 9), Some(true));
        // Hours before START_HOUR address no slot.
        assert_eq!(grid.is_available(5, 7), None);
    }

    #[test]
    fn primitive_application_is_cumulative() {
        let mut grid = feb_2021();
        grid.apply_pattern(&DateSelector::Days(vec![5]), &[Interval::new(9, 12)], true);
        grid.apply_pattern(&DateSelector::Days(vec![5]), &[Interval::new(10, 11)], true);
        // apply_pattern only writes the hours it covers.
        assert_eq!(grid.is_available(5, 9), Some(true));
        assert_eq!(grid.is_available(5, 10), Some(true));
    }

    #[test]
    fn later_overwrite_wins_on_overlapping_dates() {
        let mut grid = feb_2021();
        grid.overwrite(&DateSelector::Days(vec![5]), &[Interval::new(9, 12)]);
        grid.overwrite(&DateSelector::Days(vec![5]), &[Interval::new(10, 11)]);

        assert_eq!(grid.is_available(5, 9), Some(false));
        assert_eq!(grid.is_available(5, 10), Some(true));
        assert_eq!(grid.is_available(5, 11), Some(false));
    }

    #[test]
    fn overwrite_with_empty_intervals_keeps_grid() {
        let mut grid = feb_2021();
        grid.set_default(true);
        grid.overwrite(&DateSelector::Days(vec![5]), &[]);
        assert_eq!(grid.is_available(5, 9), Some(true));
    }

    #[test]
    fn exception_carve_out() {
        let mut grid = feb_2021();
        grid.apply_pattern(&DateSelector::Days(vec![5, 12]), &[Interval::new(9, 19)], true);

        grid.reset_dates(&[5]);
        grid.apply_pattern(&DateSelector::Days(vec![5]), &[Interval::new(14, 16)], true);

        for hour in START_HOUR..END_HOUR {
            let expected = (14..16).contains(&hour);
            assert_eq!(grid.is_available(5, hour), Some(expected), "hour {hour}");
        }
        // The sibling date keeps its full-day availability.
        assert!(grid.export().iter().filter(|r| r.day == 12).all(|r| r.available));
    }

    #[test]
    fn reset_unknown_dates_is_harmless() {
        let mut grid = feb_2021();
        grid.set_default(true);
        grid.reset_dates(&[6, 31, 40]);
        assert!(grid.export().iter().all(|r| r.available));
    }
}
