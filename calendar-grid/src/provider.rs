use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone};

use crate::config::CalendarConfig;
use crate::grid::RecordRange;

/// Source of the records displayed by a calendar, implemented by the host.
///
/// Each method is called during a reload only, the results are kept until
/// the next reload.
pub trait RecordProvider {
    type Record;

    /// Bounds of the days where records may exist, `None` if there is no
    /// record at all.
    fn record_range<Tz: TimeZone>(&self, config: &CalendarConfig<Tz>) -> Option<RecordRange>;

    /// Days having at least one record, in the order sections of the record
    /// list must be displayed.
    ///
    /// Records are only fetched for the days listed here: a day missing from
    /// this list is displayed without records, both in the record list and in
    /// its calendar cell.
    fn unique_days_of_record<Tz: TimeZone>(&self, config: &CalendarConfig<Tz>) -> Vec<NaiveDate>;

    /// Records of a single day.
    fn records_of<Tz: TimeZone>(
        &self,
        day: NaiveDate,
        config: &CalendarConfig<Tz>,
    ) -> Vec<Self::Record>;
}

/// Records stored in memory and indexed by day. Sections are listed from the
/// most recent day to the oldest.
///
/// ```
/// use std::collections::BTreeMap;
///
/// use calendar_grid::{CalendarConfig, RecordProvider};
/// use chrono::NaiveDate;
///
/// let d1 = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// let d2 = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let records = BTreeMap::from([(d1, vec!["run"]), (d2, vec!["swim", "bike"])]);
/// let config = CalendarConfig::new();
///
/// assert_eq!(records.record_range(&config).map(|range| range.first()), Some(d1));
/// assert_eq!(records.unique_days_of_record(&config), [d2, d1]);
/// assert_eq!(records.records_of(d2, &config), ["swim", "bike"]);
///
/// let empty = BTreeMap::from([(d1, Vec::<&str>::new())]);
/// assert_eq!(empty.record_range(&config), None);
/// ```
impl<R: Clone> RecordProvider for BTreeMap<NaiveDate, Vec<R>> {
    type Record = R;

    fn record_range<Tz: TimeZone>(&self, _config: &CalendarConfig<Tz>) -> Option<RecordRange> {
        let mut days = self
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(day, _)| *day);

        let first = days.next()?;
        let last = days.next_back().unwrap_or(first);
        RecordRange::new(first, last).ok()
    }

    fn unique_days_of_record<Tz: TimeZone>(&self, _config: &CalendarConfig<Tz>) -> Vec<NaiveDate> {
        self.iter()
            .rev()
            .filter(|(_, records)| !records.is_empty())
            .map(|(day, _)| *day)
            .collect()
    }

    fn records_of<Tz: TimeZone>(
        &self,
        day: NaiveDate,
        _config: &CalendarConfig<Tz>,
    ) -> Vec<Self::Record> {
        self.get(&day).cloned().unwrap_or_default()
    }
}
