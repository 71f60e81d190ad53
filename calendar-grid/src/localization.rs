//! Texts displayed around the grid: month overlay labels, the weekday header
//! and the headers of the record list.

use chrono::{Datelike, Locale, NaiveDate, Weekday};

/// Any Sunday, used to get the names of weekdays.
const REFERENCE_SUNDAY: NaiveDate = match NaiveDate::from_ymd_opt(2023, 1, 1) {
    Some(date) => date,
    None => panic!("invalid reference date"),
};

/// Language part of a locale, for example `"ja"` for `ja_JP`.
pub fn language(locale: Locale) -> String {
    let name = locale.to_string();

    match name.split_once('_') {
        Some((lang, _)) => lang.to_string(),
        None => name,
    }
}

/// Label of the month containing given day, as displayed over the month
/// segments of the grid.
///
/// ```
/// use calendar_grid::localization::month_label;
/// use chrono::{Locale, NaiveDate};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
/// assert_eq!(month_label(day, Locale::en_US), "January 2024");
/// assert_eq!(month_label(day, Locale::fr_FR), "janvier 2024");
/// assert_eq!(month_label(day, Locale::ja_JP), "2024年 1月");
/// ```
pub fn month_label(day: NaiveDate, locale: Locale) -> String {
    if language(locale) == "ja" {
        format!("{}年 {}月", day.year(), day.month())
    } else {
        format!("{} {}", day.format_localized("%B", locale), day.year())
    }
}

/// Title of the section of the record list for given day.
///
/// ```
/// use calendar_grid::localization::section_title;
/// use chrono::{Locale, NaiveDate};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
/// assert_eq!(section_title(day, Locale::en_US), "Wednesday, January 17, 2024");
/// assert_eq!(section_title(day, Locale::ja_JP), "2024年1月17日 水曜日");
/// ```
pub fn section_title(day: NaiveDate, locale: Locale) -> String {
    let fmt = match language(locale).as_str() {
        "ja" => "%Y年%-m月%-d日 %A",
        "en" => "%A, %B %-d, %Y",
        _ => "%A %-d %B %Y",
    };

    day.format_localized(fmt, locale).to_string()
}

/// A column of the header displayed above the grid.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct WeekdayLabel {
    pub weekday: Weekday,
    /// Short name of the weekday
    pub symbol: String,
}

impl WeekdayLabel {
    /// Sundays are usually highlighted in the header.
    pub fn is_sunday(&self) -> bool {
        self.weekday == Weekday::Sun
    }
}

/// Names of the 7 columns of the grid, starting from `week_start`.
///
/// ```
/// use calendar_grid::localization::weekday_header;
/// use chrono::{Locale, Weekday};
///
/// let header = weekday_header(Weekday::Mon, Locale::en_US);
/// let symbols: Vec<_> = header.iter().map(|label| label.symbol.as_str()).collect();
/// assert_eq!(symbols, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
/// assert!(header[6].is_sunday());
/// ```
pub fn weekday_header(week_start: Weekday, locale: Locale) -> Vec<WeekdayLabel> {
    REFERENCE_SUNDAY
        .iter_days()
        .skip(week_start.num_days_from_sunday() as usize)
        .take(7)
        .map(|day| WeekdayLabel {
            weekday: day.weekday(),
            symbol: day.format_localized("%a", locale).to_string(),
        })
        .collect()
}
