use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::error::DateArithmeticError;

type Result<T> = std::result::Result<T, DateArithmeticError>;

pub(crate) fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or(DateArithmeticError::new(date, "add days"))
}

pub(crate) fn sub_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_sub_days(Days::new(days))
        .ok_or(DateArithmeticError::new(date, "subtract days"))
}

/// Number of days between the start of the week and given date, which is
/// also the column of this date in the grid.
pub(crate) fn weekday_offset(date: NaiveDate, week_start: Weekday) -> u32 {
    (7 + date.weekday().num_days_from_sunday() - week_start.num_days_from_sunday()) % 7
}

/// First day of the week containing given date.
pub(crate) fn week_start_of(date: NaiveDate, week_start: Weekday) -> Result<NaiveDate> {
    sub_days(date, weekday_offset(date, week_start).into())
}

/// Last day of the week containing given date.
pub(crate) fn week_end_of(date: NaiveDate, week_start: Weekday) -> Result<NaiveDate> {
    add_days(date, (6 - weekday_offset(date, week_start)).into())
}

pub(crate) fn first_of_month(date: NaiveDate) -> Result<NaiveDate> {
    date.with_day(1)
        .ok_or(DateArithmeticError::new(date, "get first day of month"))
}

pub(crate) fn count_days_in_month(date: NaiveDate) -> Result<u32> {
    let Some(date_next_month) = date.checked_add_months(Months::new(1)) else {
        // December of last supported year
        return Ok(31);
    };

    let first_this_month = first_of_month(date)?;
    let first_next_month = first_of_month(date_next_month)?;

    (first_next_month - first_this_month)
        .num_days()
        .try_into()
        .map_err(|_| DateArithmeticError::new(date, "count days in month"))
}

/// Number of rows used by the month containing given date in a grid where
/// weeks start on `week_start`.
pub(crate) fn count_weeks_in_month(date: NaiveDate, week_start: Weekday) -> Result<u32> {
    let leading = weekday_offset(first_of_month(date)?, week_start);
    Ok((leading + count_days_in_month(date)?).div_ceil(7))
}

/// Week of the month containing given date, starting from 1.
pub(crate) fn week_of_month(date: NaiveDate, week_start: Weekday) -> Result<u32> {
    let leading = weekday_offset(first_of_month(date)?, week_start);
    Ok((leading + date.day0()) / 7 + 1)
}
