use chrono::{TimeZone, Utc, Weekday};
use chrono_tz::{America, Asia};

use crate::error::{ConfigurationError, Error};
use crate::{date, CalendarConfig, GridMetrics};

#[test]
fn default_calendar() {
    let config = CalendarConfig::new();
    assert_eq!(config.week_start(), Weekday::Sun);
    assert_eq!(config.week_end(), Weekday::Sat);
    assert_eq!(config.week_start_day(), 1);
    assert_eq!(config.locale(), chrono::Locale::en_US);
}

#[test]
fn week_start_day_numbers() -> Result<(), Error> {
    for day in 1..=7 {
        let config = CalendarConfig::new().with_week_start_day(day)?;
        assert_eq!(config.week_start_day(), day);
    }

    let config = CalendarConfig::new().with_week_start_day(7)?;
    assert_eq!(config.week_start(), Weekday::Sat);
    assert_eq!(config.week_end(), Weekday::Fri);
    Ok(())
}

#[test]
fn invalid_week_start_day() {
    for day in [0, 8, 255] {
        assert_eq!(
            CalendarConfig::new().with_week_start_day(day),
            Err(Error::Configuration(ConfigurationError::InvalidWeekStartDay(day))),
        );
    }
}

#[test]
fn day_of_instant_depends_on_tz() {
    let instant = Utc.with_ymd_and_hms(2024, 1, 16, 20, 0, 0).unwrap();

    let tokyo = CalendarConfig::new().with_tz(Asia::Tokyo);
    assert_eq!(tokyo.day_of(&instant), date!("2024-01-17"));

    let new_york = CalendarConfig::new().with_tz(America::New_York);
    assert_eq!(new_york.day_of(&instant), date!("2024-01-16"));
}

#[test]
fn tz_is_kept_by_other_settings() {
    let config = CalendarConfig::new()
        .with_tz(Asia::Tokyo)
        .with_week_start(Weekday::Mon)
        .with_locale(chrono::Locale::ja_JP);

    assert_eq!(config.tz(), &Asia::Tokyo);
    assert_eq!(config.week_start(), Weekday::Mon);
    assert_eq!(config.locale(), chrono::Locale::ja_JP);
}

#[test]
fn metrics_of_tall_views() {
    let metrics = GridMetrics::default();
    assert!(metrics.should_shrink(640.0));
    assert_eq!(metrics.default_weeks(640.0), 5);
    assert_eq!(metrics.expanded_height(640.0), 300.0);
    assert_eq!(metrics.shrunk_height(), 120.0);
}

#[test]
fn metrics_of_short_views() {
    let metrics = GridMetrics::default();

    for height in [0.0, 400.0, 455.0] {
        assert!(!metrics.should_shrink(height));
        assert_eq!(metrics.default_weeks(height), 3);
        assert_eq!(metrics.expanded_height(height), 180.0);
    }
}
