use std::fmt;
use std::ops::RangeInclusive;

use chrono::{NaiveDate, TimeZone, Weekday};

use crate::config::CalendarConfig;
use crate::error::{ConfigurationError, DateArithmeticError, Error, Result};
use crate::utils::dates::{add_days, sub_days, week_end_of, week_start_of};

// --
// -- RecordRange
// --

/// Bounds of the days where a record may exist.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct RecordRange {
    first: NaiveDate,
    last: NaiveDate,
}

impl RecordRange {
    /// Create a new range of records, which must not end before it starts.
    ///
    /// ```
    /// use calendar_grid::RecordRange;
    /// use chrono::NaiveDate;
    ///
    /// let d1 = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
    /// let d2 = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
    ///
    /// assert!(RecordRange::new(d1, d2).is_ok());
    /// assert!(RecordRange::new(d2, d1).is_err());
    /// ```
    pub fn new(first: NaiveDate, last: NaiveDate) -> Result<Self> {
        if first > last {
            return Err(ConfigurationError::InvertedRecordRange { first, last }.into());
        }

        Ok(Self { first, last })
    }

    /// A range of records covering a single day.
    pub fn single(day: NaiveDate) -> Self {
        Self { first: day, last: day }
    }

    pub fn first(&self) -> NaiveDate {
        self.first
    }

    pub fn last(&self) -> NaiveDate {
        self.last
    }
}

// --
// -- DisplayRange
// --

/// Span of days materialized into the cells of the grid.
///
/// It always starts on the first day of a week, ends on the last day of the
/// week containing today and contains today.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DisplayRange {
    first: NaiveDate,
    last: NaiveDate,
}

impl DisplayRange {
    /// Compute the days displayed by a grid.
    ///
    /// The range covers at least `default_weeks` weeks ending with the week
    /// of `today`, and is extended back to the week of the first record.
    ///
    /// ```
    /// use calendar_grid::{DisplayRange, RecordRange};
    /// use chrono::{NaiveDate, Weekday};
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
    /// let records = RecordRange::single(today);
    /// let range = DisplayRange::compute(Weekday::Sun, &records, today, 5).unwrap();
    ///
    /// assert_eq!(range.first(), NaiveDate::from_ymd_opt(2023, 12, 17).unwrap());
    /// assert_eq!(range.last(), NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
    /// ```
    pub fn compute(
        week_start: Weekday,
        records: &RecordRange,
        today: NaiveDate,
        default_weeks: usize,
    ) -> Result<Self> {
        let this_week_start = week_start_of(today, week_start)?;
        let default_days = u64::try_from(default_weeks.saturating_sub(1))
            .ok()
            .and_then(|weeks| weeks.checked_mul(7))
            .ok_or(DateArithmeticError::new(this_week_start, "subtract weeks"))?;

        let default_range_start = sub_days(this_week_start, default_days)?;
        let measure_week_start = week_start_of(records.first, week_start)?;

        Ok(Self {
            first: default_range_start.min(measure_week_start),
            last: week_end_of(today, week_start)?,
        })
    }

    pub fn first(&self) -> NaiveDate {
        self.first
    }

    pub fn last(&self) -> NaiveDate {
        self.last
    }

    /// Check if a day is displayed by this range.
    pub fn contains(&self, day: NaiveDate) -> bool {
        (self.first..=self.last).contains(&day)
    }

    /// Number of days displayed, bounds included.
    pub fn cell_count(&self) -> usize {
        // Always positive as first <= last
        (self.last - self.first).num_days() as usize + 1
    }

    /// Number of rows of the grid, the last one may be partial.
    pub fn row_count(&self) -> usize {
        self.cell_count().div_ceil(7)
    }

    /// Iterate over displayed days in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        self.first.iter_days().take(self.cell_count())
    }
}

impl From<DisplayRange> for RangeInclusive<NaiveDate> {
    fn from(range: DisplayRange) -> Self {
        range.first..=range.last
    }
}

impl fmt::Display for DisplayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.first, self.last)
    }
}

// --
// -- DateGrid
// --

/// Logical content of the calendar: which day is displayed in which cell.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct DateGrid {
    range: DisplayRange,
    today: NaiveDate,
    week_start: Weekday,
}

impl DateGrid {
    /// Build the grid of a calendar for given records.
    pub fn new<Tz: TimeZone>(
        config: &CalendarConfig<Tz>,
        records: &RecordRange,
        today: NaiveDate,
        default_weeks: usize,
    ) -> Result<Self> {
        let range = DisplayRange::compute(config.week_start, records, today, default_weeks)?;
        Ok(Self { range, today, week_start: config.week_start })
    }

    pub fn display_range(&self) -> DisplayRange {
        self.range
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn cell_count(&self) -> usize {
        self.range.cell_count()
    }

    pub fn row_count(&self) -> usize {
        self.range.row_count()
    }

    /// Get the day displayed in a cell.
    ///
    /// ```
    /// use calendar_grid::{CalendarConfig, DateGrid, RecordRange};
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
    /// let grid = DateGrid::new(&CalendarConfig::new(), &RecordRange::single(today), today, 3)
    ///     .unwrap();
    ///
    /// assert_eq!(grid.day_for_cell_index(0).unwrap(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    /// assert!(grid.day_for_cell_index(grid.cell_count()).is_err());
    /// ```
    pub fn day_for_cell_index(&self, index: usize) -> Result<NaiveDate> {
        let len = self.cell_count();

        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        Ok(add_days(self.range.first, index as u64)?)
    }

    /// Get the cell displaying a day.
    pub fn cell_index_for_day(&self, day: NaiveDate) -> Result<usize> {
        if !self.range.contains(day) {
            return Err(Error::DayOutOfRange {
                day,
                first: self.range.first,
                last: self.range.last,
            });
        }

        Ok((day - self.range.first).num_days() as usize)
    }

    /// Index of the cell displaying today.
    pub fn today_cell_index(&self) -> Result<usize> {
        self.cell_index_for_day(self.today)
    }

    /// Insert today in front of the days having a record, see
    /// [`unique_days_with_today_injected`].
    pub fn unique_days_with_today_injected(&self, days: Vec<NaiveDate>) -> Vec<NaiveDate> {
        unique_days_with_today_injected(days, self.today)
    }
}

/// Insert `today` in front of a list of days if it doesn't contain it yet.
///
/// The input is otherwise left untouched: it is neither sorted nor
/// deduplicated.
///
/// ```
/// use calendar_grid::grid::unique_days_with_today_injected;
/// use chrono::NaiveDate;
///
/// let d1 = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// let d2 = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
///
/// assert_eq!(unique_days_with_today_injected(vec![d2, d1], today), [today, d2, d1]);
/// assert_eq!(unique_days_with_today_injected(vec![d1, today, d1], today), [d1, today, d1]);
/// ```
pub fn unique_days_with_today_injected(
    mut days: Vec<NaiveDate>,
    today: NaiveDate,
) -> Vec<NaiveDate> {
    if !days.contains(&today) {
        days.insert(0, today);
    }

    days
}
