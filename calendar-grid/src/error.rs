use std::fmt;

use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, Error>;

/// Any failure raised while building or querying a calendar grid.
///
/// None of these are meant to be retried: every computation of this crate is
/// a pure function of its inputs, so the same inputs raise the same error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The host supplied an invalid configuration or data range.
    Configuration(ConfigurationError),
    /// The calendar could not compute a date offset or component. No partial
    /// grid is built when this happens.
    DateArithmetic(DateArithmeticError),
    /// A cell index or section was queried outside of the bounds established
    /// by the latest reload.
    IndexOutOfRange { index: usize, len: usize },
    /// A day was queried outside of the range displayed by the latest reload.
    DayOutOfRange {
        day: NaiveDate,
        first: NaiveDate,
        last: NaiveDate,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Week start days are numbered from 1 (Sunday) to 7 (Saturday).
    InvalidWeekStartDay(u8),
    /// The first day of a record range is after its last day.
    InvertedRecordRange { first: NaiveDate, last: NaiveDate },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateArithmeticError {
    /// Date the operation was applied to
    pub date: NaiveDate,
    /// Short description of the failing operation
    pub operation: &'static str,
}

impl DateArithmeticError {
    pub(crate) fn new(date: NaiveDate, operation: &'static str) -> Self {
        Self { date, operation }
    }
}

impl From<ConfigurationError> for Error {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

impl From<DateArithmeticError> for Error {
    fn from(err: DateArithmeticError) -> Self {
        Self::DateArithmetic(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "invalid configuration: {err}"),
            Self::DateArithmetic(err) => write!(f, "{err}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range: expected less than {len}")
            }
            Self::DayOutOfRange { day, first, last } => {
                write!(f, "{day} is not displayed: expected a day from {first} to {last}")
            }
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWeekStartDay(day) => {
                write!(f, "week start day {day} is not in 1 (Sunday) to 7 (Saturday)")
            }
            Self::InvertedRecordRange { first, last } => {
                write!(f, "record range starts on {first} after it ends on {last}")
            }
        }
    }
}

impl fmt::Display for DateArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to {} from {}", self.operation, self.date)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(err) => Some(err),
            Self::DateArithmetic(err) => Some(err),
            Self::IndexOutOfRange { .. } | Self::DayOutOfRange { .. } => None,
        }
    }
}

impl std::error::Error for ConfigurationError {}
impl std::error::Error for DateArithmeticError {}
