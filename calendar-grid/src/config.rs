use chrono::{DateTime, Locale, NaiveDate, TimeZone, Utc, Weekday};

use crate::error::{ConfigurationError, Result};

// --
// -- Calendar
// --

/// Calendar settings that every date computation of a grid depends on.
///
/// This value is never mutated once a grid has been derived from it: building
/// a new configuration and reloading is the only way to change the calendar
/// of a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarConfig<Tz: TimeZone = Utc> {
    pub(crate) week_start: Weekday,
    pub(crate) locale: Locale,
    pub(crate) tz: Tz,
}

impl CalendarConfig<Utc> {
    /// Sunday-first calendar, in english and UTC.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for CalendarConfig<Utc> {
    fn default() -> Self {
        Self { week_start: Weekday::Sun, locale: Locale::en_US, tz: Utc }
    }
}

impl<Tz: TimeZone> CalendarConfig<Tz> {
    /// Set the first day of the week from its number, where 1 is Sunday and
    /// 7 is Saturday.
    ///
    /// ```
    /// use calendar_grid::CalendarConfig;
    /// use chrono::Weekday;
    ///
    /// let config = CalendarConfig::new().with_week_start_day(2).unwrap();
    /// assert_eq!(config.week_start(), Weekday::Mon);
    /// assert!(CalendarConfig::new().with_week_start_day(8).is_err());
    /// ```
    pub fn with_week_start_day(self, day: u8) -> Result<Self> {
        let week_start = weekday_from_sunday_number(day)
            .ok_or(ConfigurationError::InvalidWeekStartDay(day))?;

        Ok(self.with_week_start(week_start))
    }

    /// Set the first day of the week.
    pub fn with_week_start(self, week_start: Weekday) -> Self {
        Self { week_start, ..self }
    }

    /// Set the locale used to render labels.
    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    /// Attach a new timezone, which defines where days start and end.
    ///
    /// ```
    /// use calendar_grid::CalendarConfig;
    /// use chrono::FixedOffset;
    ///
    /// let tz = FixedOffset::east_opt(9 * 3600).unwrap();
    /// let config = CalendarConfig::new().with_tz(tz);
    /// assert_eq!(config.tz(), &tz);
    /// ```
    pub fn with_tz<Tz2: TimeZone>(self, tz: Tz2) -> CalendarConfig<Tz2> {
        CalendarConfig { week_start: self.week_start, locale: self.locale, tz }
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Number of the first day of the week, from 1 (Sunday) to 7 (Saturday).
    pub fn week_start_day(&self) -> u8 {
        sunday_number(self.week_start)
    }

    /// Last day of the week.
    pub fn week_end(&self) -> Weekday {
        self.week_start.pred()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn tz(&self) -> &Tz {
        &self.tz
    }

    /// Get the day an instant belongs to in this calendar's timezone.
    ///
    /// ```
    /// use calendar_grid::CalendarConfig;
    /// use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
    ///
    /// let tokyo = CalendarConfig::new().with_tz(FixedOffset::east_opt(9 * 3600).unwrap());
    /// let instant = Utc.with_ymd_and_hms(2024, 1, 16, 20, 0, 0).unwrap();
    /// assert_eq!(tokyo.day_of(&instant), NaiveDate::from_ymd_opt(2024, 1, 17).unwrap());
    /// ```
    pub fn day_of<T: TimeZone>(&self, instant: &DateTime<T>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// Get current day in this calendar's timezone.
    pub fn today(&self) -> NaiveDate {
        self.day_of(&Utc::now())
    }
}

/// Position of a weekday in a Sunday-first week, from 1 to 7.
pub(crate) fn sunday_number(weekday: Weekday) -> u8 {
    // Always in 1..=7
    weekday.number_from_sunday() as u8
}

pub(crate) fn weekday_from_sunday_number(day: u8) -> Option<Weekday> {
    match day {
        1 => Some(Weekday::Sun),
        2 => Some(Weekday::Mon),
        3 => Some(Weekday::Tue),
        4 => Some(Weekday::Wed),
        5 => Some(Weekday::Thu),
        6 => Some(Weekday::Fri),
        7 => Some(Weekday::Sat),
        _ => None,
    }
}

// --
// -- Metrics
// --

/// Fixed sizes of the views and the rules to pick how many weeks of the
/// calendar are visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMetrics {
    /// Height of a row of the calendar
    pub cell_height: f64,
    /// Height of the weekday names above the calendar
    pub weekday_header_height: f64,
    /// Height of a day header in the record list
    pub record_list_header_height: f64,
    /// Views taller than this display more weeks and can shrink
    pub shrink_threshold: f64,
    /// Visible weeks when the view is taller than the threshold
    pub default_weeks_tall: usize,
    /// Visible weeks when the view is not taller than the threshold
    pub default_weeks_short: usize,
    /// Visible weeks while the calendar is shrunk
    pub shrunk_weeks: usize,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            cell_height: 60.0,
            weekday_header_height: 30.0,
            record_list_header_height: 24.0,
            shrink_threshold: 455.0,
            default_weeks_tall: 5,
            default_weeks_short: 3,
            shrunk_weeks: 2,
        }
    }
}

impl GridMetrics {
    /// Number of weeks displayed by default for a view of given height.
    ///
    /// ```
    /// use calendar_grid::GridMetrics;
    ///
    /// let metrics = GridMetrics::default();
    /// assert_eq!(metrics.default_weeks(640.0), 5);
    /// assert_eq!(metrics.default_weeks(455.0), 3);
    /// ```
    pub fn default_weeks(&self, height: f64) -> usize {
        if self.should_shrink(height) {
            self.default_weeks_tall
        } else {
            self.default_weeks_short
        }
    }

    /// Check if the calendar of a view of given height may shrink while the
    /// record list is scrolled.
    pub fn should_shrink(&self, height: f64) -> bool {
        height > self.shrink_threshold
    }

    /// Height of the calendar when it displays its default number of weeks.
    pub fn expanded_height(&self, height: f64) -> f64 {
        self.cell_height * self.default_weeks(height) as f64
    }

    /// Height of the calendar while it is shrunk.
    pub fn shrunk_height(&self) -> f64 {
        self.cell_height * self.shrunk_weeks as f64
    }
}
