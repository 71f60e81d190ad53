use std::cmp::min;
use std::ops::Range;

use chrono::{Datelike, Locale, NaiveDate, Weekday};

use crate::error::Result;
use crate::grid::{DateGrid, DisplayRange};
use crate::localization::month_label;
use crate::utils::dates::{
    add_days, count_days_in_month, count_weeks_in_month, first_of_month, week_of_month,
    weekday_offset,
};

/// Rows of the grid covered by a calendar month, used to draw month overlays
/// while the calendar is scrolled.
///
/// Two consecutive segments share a row when a month doesn't end on the last
/// day of a week: the cells of that row are then split between the two
/// segments, see [`MonthSegment::top_row_offset`] and
/// [`MonthSegment::bottom_row_offset`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct MonthSegment {
    /// First cell of the grid belonging to this month
    pub start_cell_index: usize,
    /// Cell following the last cell of the grid belonging to this month
    pub end_cell_index: usize,
    /// First row containing a day of this month
    pub start_row: usize,
    /// Number of rows containing a day of this month
    pub row_span: usize,
    /// First displayed day of this month
    pub first_day: NaiveDate,
}

impl MonthSegment {
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Rows covered by this segment.
    pub fn rows(&self) -> Range<usize> {
        self.start_row..self.start_row + self.row_span
    }

    /// Cells of the days of this month.
    pub fn cells(&self) -> Range<usize> {
        self.start_cell_index..self.end_cell_index
    }

    /// Check if this segment covers any of given rows.
    pub fn intersects_rows(&self, rows: &Range<usize>) -> bool {
        !rows.is_empty() && self.start_row < rows.end && rows.start < self.start_row + self.row_span
    }

    /// Number of leading cells of the first row that belong to the previous
    /// month.
    pub fn top_row_offset(&self) -> usize {
        self.start_cell_index % 7
    }

    /// Number of trailing cells of the last row that belong to the next
    /// month.
    pub fn bottom_row_offset(&self) -> usize {
        (7 - self.end_cell_index % 7) % 7
    }

    /// Text displayed above this segment.
    pub fn label(&self, locale: Locale) -> String {
        month_label(self.first_day, locale)
    }
}

/// Split the rows of a displayed range into months.
///
/// ```
/// use calendar_grid::{DisplayRange, RecordRange};
/// use calendar_grid::month::compute_segments;
/// use chrono::{NaiveDate, Weekday};
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
/// let range = DisplayRange::compute(Weekday::Sun, &RecordRange::single(today), today, 5)
///     .unwrap();
///
/// let segments = compute_segments(&range, Weekday::Sun).unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!((segments[0].month(), segments[0].start_row, segments[0].row_span), (12, 0, 3));
/// assert_eq!((segments[1].month(), segments[1].start_row, segments[1].row_span), (1, 2, 3));
/// ```
pub fn compute_segments(range: &DisplayRange, week_start: Weekday) -> Result<Vec<MonthSegment>> {
    let cell_count = range.cell_count();
    let row_count = range.row_count();
    let mut segments = Vec::new();
    let mut cursor = range.first();
    let mut index = 0;
    let mut row = 0;

    loop {
        let days_in_month = count_days_in_month(cursor)? as usize;
        let weeks_in_month = count_weeks_in_month(cursor, week_start)? as usize;
        let remain_days = days_in_month - cursor.day0() as usize;
        let remain_weeks = weeks_in_month + 1 - week_of_month(cursor, week_start)? as usize;

        // The last month may continue after the end of the grid
        segments.push(MonthSegment {
            start_cell_index: index,
            end_cell_index: min(index + remain_days, cell_count),
            start_row: row,
            row_span: min(remain_weeks, row_count - row),
            first_day: cursor,
        });

        if index + remain_days >= cell_count {
            break;
        }

        let first_next_month = add_days(cursor, remain_days as u64)?;

        if first_next_month.weekday() == week_start {
            row += remain_weeks;
        } else {
            // The last week of this month is also the first of the next one
            row += remain_weeks - 1;
        }

        index += remain_days;
        cursor = first_next_month;
    }

    Ok(segments)
}

/// Number of cells of the first row of a month belonging to the previous
/// month, and number of cells of its last row belonging to the next month.
///
/// ```
/// use calendar_grid::month::column_offsets_for_month;
/// use chrono::{NaiveDate, Weekday};
///
/// // September 2023 has 30 days and starts on a Friday
/// let day = NaiveDate::from_ymd_opt(2023, 9, 12).unwrap();
/// assert_eq!(column_offsets_for_month(day, Weekday::Sun).unwrap(), (5, 0));
/// assert_eq!(column_offsets_for_month(day, Weekday::Mon).unwrap(), (4, 1));
/// ```
pub fn column_offsets_for_month(day: NaiveDate, week_start: Weekday) -> Result<(usize, usize)> {
    let top = weekday_offset(first_of_month(day)?, week_start) as usize;
    let days_in_month = count_days_in_month(day)? as usize;
    let bottom = 7 - (top + days_in_month) % 7;

    if bottom == 7 {
        Ok((top, 0))
    } else {
        Ok((top, bottom))
    }
}

impl DateGrid {
    /// Split the rows of this grid into months.
    pub fn month_segments(&self) -> Result<Vec<MonthSegment>> {
        compute_segments(&self.display_range(), self.week_start())
    }
}
